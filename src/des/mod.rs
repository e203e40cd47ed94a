//! Single-block DES (FIPS 46-3): initial/final permutations, the 16-round
//! Feistel network, the PC-1/PC-2 key schedule and the round function f,
//! all expressed over the [`crate::bitstring::BitString`] primitives.

mod cipher;
mod permutation_tables;
mod s_boxes;

pub use cipher::{decrypt, encrypt, permute};
