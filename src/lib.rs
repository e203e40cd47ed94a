//! A single-block DES (FIPS 46-3) cipher engine built on top of a
//! bit-string primitive layer. No cipher modes, no multi-block chaining, no
//! CLI — a library for callers that already own 64-bit blocks and keys in
//! bit-string form and compose their own protocol on top.

pub mod bitstring;
pub mod des;

pub use bitstring::BitString;
pub use des::{decrypt, encrypt, permute};
