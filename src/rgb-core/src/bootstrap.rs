//! Bootstrap 5 brand palette.
//!
//! Values follow <https://getbootstrap.com/docs/5.2/customize/color/>.

use crate::color::Color;

/// Bootstrap blue (#0D6EFD).
pub const BLUE: Color = Color::from_u32(0x0D6E_FDFF);
/// Bootstrap indigo (#6610F2).
pub const INDIGO: Color = Color::from_u32(0x6610_F2FF);
/// Bootstrap purple (#6F42C1).
pub const PURPLE: Color = Color::from_u32(0x6F42_C1FF);
/// Bootstrap pink (#D63384).
pub const PINK: Color = Color::from_u32(0xD633_84FF);
/// Bootstrap red (#DC3545).
pub const RED: Color = Color::from_u32(0xDC35_45FF);
/// Bootstrap orange (#FD7E14).
pub const ORANGE: Color = Color::from_u32(0xFD7E_14FF);
/// Bootstrap yellow (#FFC107).
pub const YELLOW: Color = Color::from_u32(0xFFC1_07FF);
/// Bootstrap green (#198754).
pub const GREEN: Color = Color::from_u32(0x1987_54FF);
/// Bootstrap teal (#20C997).
pub const TEAL: Color = Color::from_u32(0x20C9_97FF);
/// Bootstrap cyan (#0DCAF0).
pub const CYAN: Color = Color::from_u32(0x0DCA_F0FF);
/// Bootstrap black (#000000).
pub const BLACK: Color = Color::from_u32(0x0000_00FF);
/// Bootstrap gray (#ADB5BD).
pub const GRAY: Color = Color::from_u32(0xADB5_BDFF);
/// Bootstrap white (#FFFFFF).
pub const WHITE: Color = Color::from_u32(0xFFFF_FFFF);

/// Every palette entry with its name, in palette order.
pub const ALL: [(&str, Color); 13] = [
    ("blue", BLUE),
    ("indigo", INDIGO),
    ("purple", PURPLE),
    ("pink", PINK),
    ("red", RED),
    ("orange", ORANGE),
    ("yellow", YELLOW),
    ("green", GREEN),
    ("teal", TEAL),
    ("cyan", CYAN),
    ("black", BLACK),
    ("gray", GRAY),
    ("white", WHITE),
];
