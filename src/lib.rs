//! Network addresses with an optional prefix length.
//!
//! This crate provides [`Inet`][base::Inet], a compact value holding an
//! IPv4 or IPv6 address together with the length of its network prefix,
//! i.e., what is usually written in CIDR notation as `192.0.2.1/24`. The
//! type is meant as a foundation for data stores that need a comparable,
//! fixed-size representation of addresses, for instance as a column type.
//!
//! Values can be created from their parts, scanned from text, and
//! displayed in their canonical textual form. Additionally, there is a
//! fixed-width binary encoding for storage.
//!
//! # Modules
//!
//! * [base] contains the address value itself, the IP address types it is
//!   built from, and the storage encoding, and
//! * [utils] contains helpers such as the bounded integer parser used for
//!   prefix lengths.
//!
//! # Reference of Feature Flags
//!
//! The following is the complete list of the feature flags available.
//!
//! * `serde`: Enables serde serialization for a number of basic types.
//!   Human-readable formats see the canonical text, compact formats see
//!   the 19 octet storage form as a byte string.
//! * `std`: support for the Rust std library. This feature is enabled by
//!   default. It adds error types that own the rejected input text and
//!   implementations of `std::error::Error`.
//! * `tracing`: Emits [tracing](https://github.com/tokio-rs/tracing)
//!   events whenever text is rejected by the parser.

#![no_std]
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(feature = "std"))]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

#[macro_use]
extern crate core;

pub mod base;
pub mod utils;
