//! Networking-related types.
//!
//! This module re-exports the IP address types from core and adds the
//! canonical textual form of IPv6 addresses used throughout the crate.
//!
//! The `Display` implementation of [`Ipv6Addr`] in core renders
//! IPv4-compatible addresses such as `::192.0.2.1` in pure hex notation.
//! Since the textual form of an address is part of the contract of
//! [`Inet`][super::Inet], we don’t rely on it and use [`Ipv6Text`] instead,
//! which follows the rules of the classic `inet_ntop` function.

pub use core::net::{AddrParseError, IpAddr, Ipv4Addr, Ipv6Addr};

pub use self::text::Ipv6Text;

mod text;
