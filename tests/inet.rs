#![cfg(feature = "std")]

mod common;

use inet::base::{Family, Inet, ParseInetError};
use rstest::rstest;

//----------- Round trips ----------------------------------------------------

#[rstest]
#[case("0.0.0.0")]
#[case("10.0.0.1")]
#[case("255.255.255.255")]
#[case("::")]
#[case("::1")]
#[case("2001:db8::1")]
#[case("fe80::1:2:3:4")]
#[case("::ffff:192.0.2.1")]
#[case("1:2:3:4:5:6:7:8")]
fn default_mask_round_trip(#[case] text: &str) {
    common::init_logging();

    let inet: Inet = text.parse().unwrap();
    assert!(inet.has_default_mask());
    assert_eq!(inet.to_string(), text);
}

#[rstest]
#[case("192.168.1.1/24", "192.168.1.1/24")]
#[case("10.0.0.1/32", "10.0.0.1")]
#[case("10.0.0.0/8", "10.0.0.0/8")]
#[case("0.0.0.0/0", "0.0.0.0/0")]
#[case("::1/128", "::1")]
#[case("2001:db8::/32", "2001:db8::/32")]
#[case("2001:0db8:0000:0000:0000:0000:0000:0001", "2001:db8::1")]
#[case("2001:DB8:0:0:1:0:0:1/64", "2001:db8::1:0:0:1/64")]
#[case("::FFFF:C000:0201", "::ffff:192.0.2.1")]
#[case("0:0:0:0:0:0:c000:0201/100", "::192.0.2.1/100")]
fn canonical_text(#[case] text: &str, #[case] expected: &str) {
    common::init_logging();

    let inet: Inet = text.parse().unwrap();
    assert_eq!(inet.to_string(), expected);
}

#[rstest]
#[case("192.168.1.1/24")]
#[case("10.0.0.1/32")]
#[case("172.16.0.0/12")]
#[case("2001:0db8:0000:0000:0000:0000:0000:0001")]
#[case("fe80::/10")]
#[case("::ffff:10.0.0.1/120")]
#[case("::/0")]
fn display_is_idempotent(#[case] text: &str) {
    common::init_logging();

    let inet: Inet = text.parse().unwrap();
    let again: Inet = inet.to_string().parse().unwrap();
    assert_eq!(inet, again);
    assert_eq!(inet.family(), again.family());
    assert_eq!(inet.address(), again.address());
    assert_eq!(inet.mask(), again.mask());
    assert_eq!(inet.to_string(), again.to_string());
}

//----------- Families and masks ---------------------------------------------

#[rstest]
#[case("192.0.2.1", Family::V4, 32)]
#[case("192.0.2.1/0", Family::V4, 0)]
#[case("192.0.2.1/17", Family::V4, 17)]
#[case("::", Family::V6, 128)]
#[case("::/64", Family::V6, 64)]
#[case("::ffff:192.0.2.1", Family::V6, 128)]
fn family_and_mask(
    #[case] text: &str,
    #[case] family: Family,
    #[case] mask: u16,
) {
    common::init_logging();

    let inet = Inet::scan_str(text).unwrap();
    assert_eq!(inet.family(), family);
    assert_eq!(inet.mask(), mask);
    assert!(inet.mask() <= family.max_mask());
}

//----------- Rejections -----------------------------------------------------

#[rstest]
#[case("", ParseInetError::InvalidFormat)]
#[case("not.an.address", ParseInetError::InvalidFormat)]
#[case("999.999.999.999", ParseInetError::InvalidFormat)]
#[case("192.0.2", ParseInetError::InvalidFormat)]
#[case("192.0.2.01", ParseInetError::InvalidFormat)]
#[case("2001:db8:::1", ParseInetError::InvalidFormat)]
#[case("[::1]", ParseInetError::InvalidFormat)]
#[case("10.0.0.1/abc", ParseInetError::InvalidMaskSyntax)]
#[case("10.0.0.1/", ParseInetError::InvalidMaskSyntax)]
#[case("10.0.0.1/-1", ParseInetError::InvalidMaskSyntax)]
#[case("10.0.0.1/ 8", ParseInetError::InvalidMaskSyntax)]
#[case("10.0.0.1/1000", ParseInetError::InvalidMaskSyntax)]
#[case("192.168.1.1/33", ParseInetError::MaskOutOfRange)]
#[case("::1/129", ParseInetError::MaskOutOfRange)]
fn rejected(#[case] text: &str, #[case] expected: ParseInetError) {
    common::init_logging();

    assert_eq!(Inet::scan_str(text), Err(expected));

    let err = Inet::try_parse(text).unwrap_err();
    assert_eq!(err.kind(), expected);
    assert_eq!(err.input(), text);
    assert_eq!(
        err.to_string(),
        format!(
            "Failed to convert string \"{}\" to inet: {}",
            text,
            expected.as_str()
        )
    );
}

//----------- Logging --------------------------------------------------------

#[cfg(feature = "tracing")]
#[test]
fn rejection_is_traced() {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(move || writer.clone())
        .without_time()
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        assert_eq!(
            Inet::scan_str("10.0.0.1/33"),
            Err(ParseInetError::MaskOutOfRange)
        );
        assert!(Inet::scan_str("10.0.0.1/8").is_ok());
    });

    let out = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    assert!(out.contains("rejected inet text"));
    assert!(out.contains("10.0.0.1/33"));
    assert!(out.contains(ParseInetError::MaskOutOfRange.as_str()));
    assert_eq!(out.lines().count(), 1);
}
