//! Canonical text of IPv6 addresses.

use super::Ipv6Addr;
use core::fmt;

//------------ Ipv6Text ------------------------------------------------------

/// Displays an IPv6 address in its canonical textual form.
///
/// The address is written as colon-separated groups of lowercase hex digits
/// without leading zeros. The first of the longest runs of at least two
/// all-zero groups is replaced by `::`. A single zero group is written as
/// `0`.
///
/// If the first run of zero groups is the longest one and is exactly six
/// groups long, or exactly five groups long and followed by `ffff`, the
/// last two groups are written as a dotted-decimal IPv4 address. This
/// gives the well-known `::192.0.2.1` and `::ffff:192.0.2.1` forms.
///
/// Exactly six means the seventh group has to be non-zero. Thus
/// `::0.1.0.0` keeps its dotted form while `::0.0.0.2` has seven leading
/// zero groups and is written `::2`, as are `::` and `::1`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ipv6Text(Ipv6Addr);

impl Ipv6Text {
    /// Creates a new value for displaying the given address.
    #[must_use]
    pub fn new(addr: Ipv6Addr) -> Self {
        Ipv6Text(addr)
    }

    /// Returns the address.
    #[must_use]
    pub fn addr(self) -> Ipv6Addr {
        self.0
    }
}

/// Returns the start and length of the first longest run of zero groups.
///
/// Runs of length one are reported like any other. It is up to the caller
/// to decide whether such a run is worth compressing.
fn find_zero_run(segments: &[u16; 8]) -> (usize, usize) {
    let mut longest_at = 0;
    let mut longest_len = 0;
    let mut cur_at = 0;
    let mut cur_len = 0;

    for (i, &seg) in segments.iter().enumerate() {
        if seg == 0 {
            if cur_len == 0 {
                cur_at = i;
            }
            cur_len += 1;

            // Strictly greater: ties go to the first run.
            if cur_len > longest_len {
                longest_len = cur_len;
                longest_at = cur_at;
            }
        } else {
            cur_len = 0;
        }
    }

    (longest_at, longest_len)
}

fn fmt_groups(segments: &[u16], f: &mut fmt::Formatter) -> fmt::Result {
    let mut iter = segments.iter();
    if let Some(first) = iter.next() {
        write!(f, "{:x}", first)?;
        for seg in iter {
            write!(f, ":{:x}", seg)?;
        }
    }
    Ok(())
}

//--- From

impl From<Ipv6Addr> for Ipv6Text {
    fn from(addr: Ipv6Addr) -> Self {
        Self::new(addr)
    }
}

//--- Display

impl fmt::Display for Ipv6Text {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let segments = self.0.segments();
        let (zeros_at, zeros_len) = find_zero_run(&segments);

        if zeros_at == 0
            && (zeros_len == 6 || (zeros_len == 5 && segments[5] == 0xffff))
        {
            let [_, _, _, _, _, _, g, h] = segments;
            if zeros_len == 5 {
                f.write_str("::ffff:")?;
            } else {
                f.write_str("::")?;
            }
            return write!(
                f,
                "{}.{}.{}.{}",
                g >> 8,
                g & 0xff,
                h >> 8,
                h & 0xff
            );
        }

        if zeros_len > 1 {
            fmt_groups(&segments[..zeros_at], f)?;
            f.write_str("::")?;
            fmt_groups(&segments[zeros_at + zeros_len..], f)
        } else {
            fmt_groups(&segments, f)
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use std::string::ToString;

    fn text(s: &str) -> std::string::String {
        let addr: Ipv6Addr = s.parse().unwrap();
        Ipv6Text::new(addr).to_string()
    }

    #[test]
    fn compression() {
        assert_eq!(text("::"), "::");
        assert_eq!(text("::1"), "::1");
        assert_eq!(text("1::"), "1::");
        assert_eq!(
            text("2001:0db8:0000:0000:0000:0000:0000:0001"),
            "2001:db8::1"
        );
        assert_eq!(text("2001:db8:0:1:1:1:1:1"), "2001:db8:0:1:1:1:1:1");
        assert_eq!(text("2001:DB8::ABCD"), "2001:db8::abcd");
        assert_eq!(text("1:0:0:2:3:0:0:0"), "1:0:0:2:3::");
    }

    #[test]
    fn first_of_equal_runs() {
        assert_eq!(text("1:0:0:2:0:0:3:4"), "1::2:0:0:3:4");
        assert_eq!(text("2001:db8:0:0:1:0:0:1"), "2001:db8::1:0:0:1");
    }

    #[test]
    fn embedded_ipv4() {
        assert_eq!(text("::ffff:192.0.2.1"), "::ffff:192.0.2.1");
        assert_eq!(text("::ffff:c000:201"), "::ffff:192.0.2.1");
        assert_eq!(text("::192.0.2.1"), "::192.0.2.1");
        assert_eq!(text("::ffff:0:0"), "::ffff:0.0.0.0");
        assert_eq!(text("::0.0.0.2"), "::2");
        assert_eq!(text("::0.1.0.0"), "::0.1.0.0");
        assert_eq!(text("::0.0.1.0"), "::100");
        assert_eq!(text("::1:0:0"), "::1:0:0");
        assert_eq!(text("0:0:0:0:1:ffff:c000:201"), "::1:ffff:c000:201");
    }
}
