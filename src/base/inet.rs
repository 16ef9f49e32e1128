//! IP addresses with a prefix length.
//!
//! This is a private module. It’s content is re-exported by the parent.

use super::net::{IpAddr, Ipv4Addr, Ipv6Addr, Ipv6Text};
use super::wire::{Compose, FormError, Parse, ParseError};
use crate::utils::uint;
use core::fmt;
use core::str::FromStr;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;
#[cfg(feature = "std")]
use std::string::{String, ToString};

//------------ Family --------------------------------------------------------

/// The address family of an [`Inet`].
///
/// The family determines everything that differs between IPv4 and IPv6
/// values: the width of the address, its default and maximum prefix length,
/// and its textual form.
///
/// `Invalid` is only ever seen in a default value that hasn’t been filled
/// in yet. All constructors and the parser produce one of the two real
/// families.
///
/// The discriminant of each variant is the tag used in the storage form.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
#[repr(u8)]
pub enum Family {
    /// No address has been assigned.
    #[default]
    Invalid = 0,

    /// An IPv4 address.
    V4 = 1,

    /// An IPv6 address.
    V6 = 2,
}

impl Family {
    /// Returns the number of bits in an address of this family.
    #[must_use]
    pub const fn address_bits(self) -> u16 {
        match self {
            Family::Invalid => 0,
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// Returns the prefix length used when none is given.
    ///
    /// This is the full width of the address.
    #[must_use]
    pub const fn default_mask(self) -> u16 {
        self.address_bits()
    }

    /// Returns the largest acceptable prefix length.
    #[must_use]
    pub const fn max_mask(self) -> u16 {
        self.address_bits()
    }

    /// Returns the family of the given address.
    #[must_use]
    pub const fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }

    /// Returns the integer value used in the storage form.
    #[must_use]
    pub const fn to_int(self) -> u8 {
        self as u8
    }

    /// Returns the family for an integer value of the storage form.
    #[must_use]
    pub const fn from_int(value: u8) -> Option<Self> {
        match value {
            0 => Some(Family::Invalid),
            1 => Some(Family::V4),
            2 => Some(Family::V6),
            _ => None,
        }
    }
}

//--- Display

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Family::Invalid => "invalid",
            Family::V4 => "IPv4",
            Family::V6 => "IPv6",
        })
    }
}

//------------ Inet ----------------------------------------------------------

/// An IPv4 or IPv6 address with a prefix length.
///
/// The value consists of the address [`Family`], the address itself as a
/// 128 bit number, and the prefix length, called the mask, in bits. IPv4
/// addresses occupy the lower 32 bits of the number, so the address
/// `192.0.2.1` is stored as `0xc000_0201`.
///
/// The mask describes how many leading bits of the address form the
/// network part. It never alters the stored address: host bits are kept
/// as given. If no mask is given, the full width of the address is used.
///
/// The textual form is the usual CIDR notation. The address is written in
/// dotted-decimal for IPv4 and in the canonical compressed form described
/// at [`Ipv6Text`] for IPv6. If the mask differs from the full width of the
/// address, a slash and the mask in decimal are appended:
///
/// ```
/// use inet::base::Inet;
///
/// let inet: Inet = "2001:0db8:0000:0000:0000:0000:0000:0001/64"
///     .parse()
///     .unwrap();
/// assert_eq!(inet.to_string(), "2001:db8::1/64");
///
/// let inet: Inet = "192.0.2.1/32".parse().unwrap();
/// assert_eq!(inet.to_string(), "192.0.2.1");
/// ```
///
/// Values are ordered by family first, then address, then mask. Values are
/// never changed once created.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
pub struct Inet {
    family: Family,
    address: u128,
    mask: u16,
}

impl Inet {
    /// The prefix length of an IPv4 value if none is given.
    pub const IPV4_DEFAULT_MASK: u16 = Family::V4.default_mask();

    /// The prefix length of an IPv6 value if none is given.
    pub const IPV6_DEFAULT_MASK: u16 = Family::V6.default_mask();
}

/// # Creation
///
impl Inet {
    /// Creates an IPv4 value from the numeric address and a mask.
    ///
    /// The mask is not checked. The caller has to make sure it is at most
    /// [`Inet::IPV4_DEFAULT_MASK`].
    #[must_use]
    pub const fn from_v4(address: u32, mask: u16) -> Self {
        Inet {
            family: Family::V4,
            address: address as u128,
            mask,
        }
    }

    /// Creates an IPv6 value from the numeric address and a mask.
    ///
    /// The mask is not checked. The caller has to make sure it is at most
    /// [`Inet::IPV6_DEFAULT_MASK`].
    #[must_use]
    pub const fn from_v6(address: u128, mask: u16) -> Self {
        Inet {
            family: Family::V6,
            address,
            mask,
        }
    }

    /// Creates a value from an IP address and a mask.
    ///
    /// Returns an error if the mask is longer than the address.
    pub fn new(addr: IpAddr, mask: u16) -> Result<Self, MaskLenError> {
        if mask > Family::of(&addr).max_mask() {
            return Err(MaskLenError(()));
        }
        Ok(match addr {
            IpAddr::V4(addr) => Self::from_v4(u32::from(addr), mask),
            IpAddr::V6(addr) => Self::from_v6(u128::from(addr), mask),
        })
    }

    /// Creates a value from an IP address using the default mask.
    #[must_use]
    pub fn from_addr(addr: IpAddr) -> Self {
        let mask = Family::of(&addr).default_mask();
        match addr {
            IpAddr::V4(addr) => Self::from_v4(u32::from(addr), mask),
            IpAddr::V6(addr) => Self::from_v6(u128::from(addr), mask),
        }
    }

    /// Creates a value from its parts, checking that they fit together.
    fn from_parts(
        family: Family,
        address: u128,
        mask: u16,
    ) -> Result<Self, FormError> {
        match family {
            Family::Invalid => {
                return Err(FormError::new("invalid address family"))
            }
            Family::V4 if address > u128::from(u32::MAX) => {
                return Err(FormError::new("IPv4 address out of range"))
            }
            _ => {}
        }
        if mask > family.max_mask() {
            return Err(FormError::new("prefix length out of range"));
        }
        Ok(Inet {
            family,
            address,
            mask,
        })
    }
}

/// # Access to the parts
///
impl Inet {
    /// Returns the address family.
    #[must_use]
    pub fn family(&self) -> Family {
        self.family
    }

    /// Returns the address as a number.
    ///
    /// For IPv4 values, only the lower 32 bits are used.
    #[must_use]
    pub fn address(&self) -> u128 {
        self.address
    }

    /// Returns the prefix length in bits.
    #[must_use]
    pub fn mask(&self) -> u16 {
        self.mask
    }

    /// Returns the address as an IP address.
    ///
    /// Returns `None` for a value of the invalid family.
    #[must_use]
    pub fn addr(&self) -> Option<IpAddr> {
        match self.family {
            Family::Invalid => None,
            Family::V4 => Some(IpAddr::V4(self.ipv4())),
            Family::V6 => Some(IpAddr::V6(self.ipv6())),
        }
    }

    /// Returns whether the value holds an address.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.family != Family::Invalid
    }

    /// Returns whether the mask is the default for the family.
    ///
    /// Only values with a different mask show it in their textual form.
    #[must_use]
    pub fn has_default_mask(&self) -> bool {
        self.mask == self.family.default_mask()
    }

    fn ipv4(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.address as u32)
    }

    fn ipv6(&self) -> Ipv6Addr {
        Ipv6Addr::from(self.address)
    }
}

/// # Scanning
///
impl Inet {
    /// Scans a value from its textual form.
    ///
    /// The text has to be an IPv4 address in dotted-decimal notation or an
    /// IPv6 address in any of its standard forms, optionally followed by a
    /// slash and the prefix length as a plain decimal number. The address
    /// is the text before the first slash.
    ///
    /// The returned error only tells what went wrong. Use
    /// [`try_parse`][Self::try_parse] for an error that includes the input.
    pub fn scan_str(s: &str) -> Result<Self, ParseInetError> {
        let res = Self::scan_parts(s);
        #[cfg(feature = "tracing")]
        if let Err(err) = res {
            tracing::trace!(input = s, error = %err, "rejected inet text");
        }
        res
    }

    fn scan_parts(s: &str) -> Result<Self, ParseInetError> {
        let (addr, mask) = match s.split_once('/') {
            Some((addr, mask)) => (addr, Some(mask)),
            None => (s, None),
        };

        let res = if let Ok(addr) = Ipv4Addr::from_str(addr) {
            Self::from_v4(u32::from(addr), Self::IPV4_DEFAULT_MASK)
        } else if let Ok(addr) = Ipv6Addr::from_str(addr) {
            Self::from_v6(u128::from(addr), Self::IPV6_DEFAULT_MASK)
        } else {
            return Err(ParseInetError::InvalidFormat);
        };

        let mask = match mask {
            Some(mask) => mask,
            None => return Ok(res),
        };
        let mask = uint::parse_bounded::<u8>(mask)
            .map_err(|_| ParseInetError::InvalidMaskSyntax)?;
        let mask = u16::from(mask);
        if mask > res.family.max_mask() {
            return Err(ParseInetError::MaskOutOfRange);
        }
        Ok(Inet { mask, ..res })
    }

    /// Scans a value, returning an error that describes the input.
    ///
    /// This is the same as [`scan_str`][Self::scan_str] but the error
    /// carries the complete input and displays as a full diagnostic
    /// message:
    ///
    /// ```
    /// use inet::base::Inet;
    ///
    /// let err = Inet::try_parse("192.0.2.1/33").unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Failed to convert string \"192.0.2.1/33\" to inet: \
    ///      Expected a number between 0-32 for IPv4 and 0-128 for IPv6"
    /// );
    /// ```
    #[cfg(feature = "std")]
    pub fn try_parse(s: &str) -> Result<Self, ConversionError> {
        Self::scan_str(s).map_err(|err| err.with_input(s))
    }
}

/// # Storage Form
///
impl Inet {
    /// Parses a value from an octets slice holding exactly its storage form.
    pub fn from_storage_slice(slice: &[u8]) -> Result<Self, ParseError> {
        let mut parser = Parser::from_ref(slice);
        let res = Self::parse(&mut parser)?;
        if parser.remaining() != 0 {
            return Err(ParseError::form_error("trailing data"));
        }
        Ok(res)
    }
}

//--- From

impl From<IpAddr> for Inet {
    fn from(addr: IpAddr) -> Self {
        Self::from_addr(addr)
    }
}

impl From<Ipv4Addr> for Inet {
    fn from(addr: Ipv4Addr) -> Self {
        Self::from_v4(u32::from(addr), Self::IPV4_DEFAULT_MASK)
    }
}

impl From<Ipv6Addr> for Inet {
    fn from(addr: Ipv6Addr) -> Self {
        Self::from_v6(u128::from(addr), Self::IPV6_DEFAULT_MASK)
    }
}

//--- FromStr

#[cfg(feature = "std")]
impl FromStr for Inet {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

#[cfg(not(feature = "std"))]
impl FromStr for Inet {
    type Err = ParseInetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::scan_str(s)
    }
}

//--- Compose and Parse

impl Compose for Inet {
    const COMPOSE_LEN: u16 =
        u8::COMPOSE_LEN + u128::COMPOSE_LEN + u16::COMPOSE_LEN;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.family.to_int().compose(target)?;
        self.address.compose(target)?;
        self.mask.compose(target)
    }
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for Inet {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        let family = Family::from_int(u8::parse(parser)?).ok_or_else(|| {
            ParseError::form_error("unknown address family")
        })?;
        let address = u128::parse(parser)?;
        let mask = u16::parse(parser)?;
        Self::from_parts(family, address, mask).map_err(Into::into)
    }
}

//--- Display

impl fmt::Display for Inet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Anything not IPv4 is shown as IPv6, including invalid values.
        match self.family {
            Family::V4 => write!(f, "{}", self.ipv4())?,
            Family::V6 | Family::Invalid => {
                write!(f, "{}", Ipv6Text::new(self.ipv6()))?
            }
        }
        if self.is_valid() && !self.has_default_mask() {
            write!(f, "/{}", self.mask)?;
        }
        Ok(())
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for Inet {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            use serde::ser::Error;

            let mut buf = octseq::array::Array::<19>::new();
            self.compose(&mut buf).map_err(S::Error::custom)?;
            serializer.serialize_bytes(buf.as_ref())
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Inet {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = Inet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an IP address with optional prefix length")
            }

            fn visit_str<E: serde::de::Error>(
                self,
                v: &str,
            ) -> Result<Self::Value, E> {
                Inet::from_str(v).map_err(E::custom)
            }

            fn visit_bytes<E: serde::de::Error>(
                self,
                v: &[u8],
            ) -> Result<Self::Value, E> {
                Inet::from_storage_slice(v).map_err(E::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(Visitor)
        } else {
            deserializer.deserialize_bytes(Visitor)
        }
    }
}

//============ Error Types ===================================================

//------------ ParseInetError ------------------------------------------------

/// Text could not be scanned into an [`Inet`].
///
/// The `Display` implementation gives only the reason. The wording is kept
/// stable since users match on it, including the spelling of the message
/// for [`InvalidMaskSyntax`][Self::InvalidMaskSyntax].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ParseInetError {
    /// The text is neither an IPv4 nor an IPv6 address.
    InvalidFormat,

    /// The text after the slash is not a decimal number from 0 to 255.
    InvalidMaskSyntax,

    /// The prefix length is longer than the address.
    MaskOutOfRange,
}

impl ParseInetError {
    /// Returns the diagnostic message for this error.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ParseInetError::InvalidFormat => "Failed to parse IP address",
            ParseInetError::InvalidMaskSyntax => {
                "Faied to parse IP network mask"
            }
            ParseInetError::MaskOutOfRange => {
                "Expected a number between 0-32 for IPv4 and 0-128 for IPv6"
            }
        }
    }

    /// Converts the error into one that includes the rejected input.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn with_input(self, input: &str) -> ConversionError {
        ConversionError {
            input: input.to_string(),
            error: self,
        }
    }
}

//--- Display and Error

impl fmt::Display for ParseInetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseInetError {}

//------------ ConversionError -----------------------------------------------

/// Text could not be converted into an [`Inet`].
///
/// This is a [`ParseInetError`] together with the input it was raised for.
/// It displays as `Failed to convert string "<input>" to inet: <reason>`.
#[cfg(feature = "std")]
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ConversionError {
    input: String,
    error: ParseInetError,
}

#[cfg(feature = "std")]
impl ConversionError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns what went wrong.
    #[must_use]
    pub fn kind(&self) -> ParseInetError {
        self.error
    }
}

//--- From

#[cfg(feature = "std")]
impl From<ConversionError> for ParseInetError {
    fn from(err: ConversionError) -> Self {
        err.error
    }
}

//--- Display and Error

#[cfg(feature = "std")]
impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Failed to convert string \"{}\" to inet: {}",
            self.input, self.error
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

//------------ MaskLenError --------------------------------------------------

/// A prefix length was longer than the address.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MaskLenError(());

//--- Display and Error

impl fmt::Display for MaskLenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("prefix length out of range")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MaskLenError {}

//============ Testing =======================================================
