//! Basics.
//!
//! This module provides the address value type and everything it is built
//! from.
//!
//!
//! ## Addresses and Prefixes
//!
//! The central type is [`Inet`]: an IPv4 or IPv6 address together with a
//! prefix length, the number of leading bits that make up the network
//! part of the address. The address family is kept in a [`Family`] tag
//! and determines everything that differs between IPv4 and IPv6: the
//! width of the address, the default and maximum prefix length, and how
//! the address is rendered as text.
//!
//! The prefix length never changes the stored address. `192.0.2.1/24`
//! keeps its host bits and is different from `192.0.2.0/24`.
//!
//!
//! ## Scanning and Displaying
//!
//! We use the term *scanning* for turning text into a value and rely on
//! `Display` for the opposite direction. The textual form is the usual
//! CIDR notation, `<address>[/<prefix length>]`, where the suffix is only
//! written if the prefix length differs from the full width of the
//! address.
//!
//!
//! ## Parsing and Composing
//!
//! For storing values, there is a fixed-width binary form. In line with
//! the rest of the crate, we use the term *parsing* for extracting a value
//! from that binary form and *composing* for producing it. The traits and
//! error types for this live in the [wire] module.

#[cfg(feature = "std")]
pub use self::inet::ConversionError;
pub use self::inet::{Family, Inet, MaskLenError, ParseInetError};
pub use self::net::{IpAddr, Ipv4Addr, Ipv6Addr};

mod inet;
pub mod net;
pub mod wire;
