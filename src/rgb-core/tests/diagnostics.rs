//! Out-of-range factors are reported through `tracing`, not as errors.

use std::io;
use std::sync::{Arc, Mutex};

use rgb_core::Color;
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, captured.contents())
}

#[test]
fn test_lighten_out_of_range_warns() {
    let (color, logs) = capture(|| Color::rgb(13, 110, 253).lighten(1.5));
    assert_eq!(color.channels(), (255, 255, 255));
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("lighten"), "{logs}");
    assert!(logs.contains("1.5"), "{logs}");
}

#[test]
fn test_darken_negative_warns() {
    let (color, logs) = capture(|| Color::rgb(13, 110, 253).darken(-0.25));
    assert_eq!(color, Color::rgb(13, 110, 253));
    assert!(logs.contains("darken"), "{logs}");
}

#[test]
fn test_opacify_out_of_range_warns_and_wraps() {
    let (color, logs) = capture(|| Color::rgb(13, 110, 253).opacify(2.0));
    assert_eq!(color.alpha(), 254);
    assert!(logs.contains("opacify"), "{logs}");
}

#[test]
fn test_in_range_factors_are_silent() {
    let (_, logs) = capture(|| {
        let c = Color::rgb(13, 110, 253);
        (c.lighten(0.5), c.darken(1.0), c.opacify(0.0))
    });
    assert!(logs.is_empty(), "{logs}");
}
