//! Various utility modules.

pub mod uint;
