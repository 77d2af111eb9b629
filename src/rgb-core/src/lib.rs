//! Packed 32-bit RGBA colors.
//!
//! This crate provides a small immutable color value and the operations built on it:
//!
//! - [`color`]: the [`Color`] type, hex parsing/formatting, tints, shades, opacity and grayscale
//! - [`bootstrap`]: the Bootstrap brand palette as constants
//! - [`error`]: error types for hex parsing
//!
//! With the `serde` feature enabled, [`Color`] serializes as its `#RRGGBBAA` string.
//!
//! # Examples
//!
//! ```
//! use rgb_core::{Color, bootstrap};
//!
//! let blue = Color::from_hex("#0D6EFD").unwrap();
//! assert_eq!(blue, bootstrap::BLUE);
//!
//! let tint = blue.lighten(0.5);
//! let shade = blue.darken(0.25);
//! let gray = blue.grayscale();
//! assert_eq!(gray.red(), gray.blue());
//!
//! println!("{tint} {shade} {}", blue.opacify(0.8));
//! ```
//!
//! # Diagnostics
//!
//! Out-of-range factors passed to [`Color::lighten`], [`Color::darken`] and
//! [`Color::opacify`] are not errors. They are corrected (or, for opacity,
//! applied as-is) and reported as `WARN` events through [`tracing`] under
//! the `rgb_core` target; install a subscriber to collect them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::many_single_char_names)]

pub mod bootstrap;
pub mod color;
pub mod error;
#[cfg(feature = "serde")]
mod serialization;

pub use color::Color;
pub use error::{ColorParseError, Result};
