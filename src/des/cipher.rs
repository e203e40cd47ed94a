use super::permutation_tables::{EXP, FINAL_PERMUTATION, INITIAL_PERMUTATION, KEY_ROTATIONS, P, PC_1, PC_2};
use super::s_boxes::S;
use crate::bitstring::BitString;

/// Which way the key schedule rotates each round. Encryption rotates both
/// schedule halves left for all 16 rounds; decryption rotates them right,
/// except round 1, which is a no-op (the first subkey under decryption is
/// the final encryption subkey, already in place after `key_init` + PC-2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Takes bits from `s` at the 1-based positions in `table`, producing a
/// fresh bit string of length `m`. Indices may repeat (the expansion table
/// draws 48 positions from 32 input bits). Fails if `s` is empty, `table`
/// is empty, `m` is zero, or any table entry exceeds `s.len()`.
///
/// Unlike some reference C implementations of DES's `permute`, which reject
/// only when `table[i] - 1 > len(s)` (admitting an out-of-range index equal
/// to `len(s) + 1`), this rejects whenever `table[i] > len(s)`. All FIPS
/// 46-3 tables stay within bounds either way, so this only matters for
/// caller-supplied permutations.
pub fn permute(s: &BitString, table: &[u8], m: usize) -> Option<BitString> {
    if s.is_empty() || table.len() < m || m == 0 {
        return None;
    }
    let mut out = Vec::with_capacity(m);
    for &pos in &table[..m] {
        if pos as usize > s.len() {
            return None;
        }
        out.push(s.raw()[(pos - 1) as usize]);
    }
    Some(BitString::from_raw(out))
}

/// Reduces the key to the 56-bit schedule state. Requires a non-empty key;
/// shorter keys are zero-padded to 64 bits, longer keys are truncated to
/// their first 64 bits (both via a single `pad(64)` call, since `pad`
/// already truncates when `n <= len(s)`).
fn key_init(key: &BitString) -> Option<BitString> {
    if key.is_empty() {
        return None;
    }
    let k64 = key.pad(64)?;
    permute(&k64, &PC_1, 56)
}

/// Rotates the 56-bit schedule state's two 28-bit halves (C at `[0, 28)`,
/// D at `[28, 56)`) independently, in place, for round `round` (1-based).
fn rotate_schedule(k56: &mut BitString, round: usize, dir: Direction) {
    if dir == Direction::Decrypt && round == 1 {
        return;
    }
    let amount = KEY_ROTATIONS[round - 1] as usize;
    let mut left = k56.sub(0, 28);
    let mut right = k56.sub(28, 56);
    match dir {
        Direction::Encrypt => {
            left.lrot(amount);
            right.lrot(amount);
        }
        Direction::Decrypt => {
            left.rrot(amount);
            right.rrot(amount);
        }
    }
    k56.splice(0, &left);
    k56.splice(28, &right);
}

/// The DES round function f: expands R to 48 bits, mixes in the round
/// subkey, substitutes through the eight S-boxes, and applies the final
/// P-permutation. `right` must be 32 bits, `subkey` 48 bits.
fn f(right: &BitString, subkey: &BitString) -> Option<BitString> {
    let mut expanded = permute(right, &EXP, 48)?;
    if !expanded.xor(subkey) {
        return None;
    }

    let expanded_bits = expanded.raw().to_vec();
    let mut substituted = Vec::with_capacity(32);
    for (i, sbox) in S.iter().enumerate() {
        let group = &expanded_bits[6 * i..6 * i + 6];
        let row = (group[0] << 1) | group[5];
        let col = (group[1] << 3) | (group[2] << 2) | (group[3] << 1) | group[4];
        let value = sbox[(16 * row + col) as usize];
        for shift in (0..4).rev() {
            substituted.push((value >> shift) & 1);
        }
    }

    permute(&BitString::from_raw(substituted), &P, 32)
}

/// Runs the 16-round Feistel network in the given direction. `msg` must be
/// exactly 64 bits; `key` any non-empty length (padded/truncated to 64 by
/// `key_init`). Returns `None` on any precondition violation.
fn des(msg: &BitString, key: &BitString, dir: Direction) -> Option<BitString> {
    if msg.len() != 64 {
        return None;
    }
    let mut k56 = key_init(key)?;
    let mut state = permute(msg, &INITIAL_PERMUTATION, 64)?;

    for round in 1..=16 {
        rotate_schedule(&mut k56, round, dir);
        let subkey = permute(&k56, &PC_2, 48)?;

        let right = state.sub(32, 64);
        let t = f(&right, &subkey)?;

        let mut left = state.sub(0, 32);
        left.xor(&t);
        state.splice(0, &left);

        state.swap();
    }
    state.swap();

    permute(&state, &FINAL_PERMUTATION, 64)
}

/// Encrypts a 64-bit plaintext block under `key`. Returns `None` if `msg`
/// is not exactly 64 bits, or `key` is empty.
pub fn encrypt(msg: &BitString, key: &BitString) -> Option<BitString> {
    des(msg, key, Direction::Encrypt)
}

/// Decrypts a 64-bit ciphertext block under `key`. Same contract as
/// [`encrypt`], inverse operation.
pub fn decrypt(msg: &BitString, key: &BitString) -> Option<BitString> {
    des(msg, key, Direction::Decrypt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn hex_to_bits(h: &str) -> BitString {
        let bytes = hex::decode(h).unwrap();
        BitString::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn fips_vector_all_zero() {
        let key = hex_to_bits("0000000000000000");
        let plain = hex_to_bits("0000000000000000");
        let cipher = encrypt(&plain, &key).unwrap();
        assert_eq!(cipher.to_bytes().unwrap(), hex::decode("8CA64DE9C1B123A7").unwrap());
        assert_eq!(decrypt(&cipher, &key).unwrap(), plain);
    }

    #[test]
    fn fips_vector_classic() {
        let key = hex_to_bits("133457799BBCDFF1");
        let plain = hex_to_bits("0123456789ABCDEF");
        let cipher = encrypt(&plain, &key).unwrap();
        assert_eq!(cipher.to_bytes().unwrap(), hex::decode("85E813540F0AB405").unwrap());
        assert_eq!(decrypt(&cipher, &key).unwrap(), plain);
    }

    #[test]
    fn fips_vector_collapses_to_zero() {
        let key = hex_to_bits("0E329232EA6D0D73");
        let plain = hex_to_bits("8787878787878787");
        let cipher = encrypt(&plain, &key).unwrap();
        assert_eq!(cipher.to_bytes().unwrap(), hex::decode("0000000000000000").unwrap());
        assert_eq!(decrypt(&cipher, &key).unwrap(), plain);
    }

    #[test]
    fn encrypt_rejects_wrong_length_message() {
        let key = hex_to_bits("0000000000000000");
        let short = BitString::from_bits(&"0".repeat(63)).unwrap();
        let long = BitString::from_bits(&"0".repeat(65)).unwrap();
        assert!(encrypt(&short, &key).is_none());
        assert!(encrypt(&long, &key).is_none());
    }

    #[test]
    fn encrypt_rejects_empty_key() {
        let plain = hex_to_bits("0123456789ABCDEF");
        let empty_key = BitString::from_raw(Vec::new());
        assert!(encrypt(&plain, &empty_key).is_none());
        assert!(decrypt(&plain, &empty_key).is_none());
    }

    #[test]
    fn permute_rejects_table_index_past_input_length() {
        let s = BitString::from_bits("1010").unwrap();
        let in_range = [1, 2, 4];
        let out_of_range = [1, 2, 5];
        assert!(permute(&s, &in_range, 3).is_some());
        assert!(permute(&s, &out_of_range, 3).is_none());
    }

    #[test]
    fn key_shorter_than_64_bits_is_zero_padded() {
        let plain = hex_to_bits("0123456789ABCDEF");
        let short_key = BitString::from_bits("1").unwrap();
        let padded_key = BitString::from_bits(&("1".to_string() + &"0".repeat(63))).unwrap();
        assert_eq!(encrypt(&plain, &short_key), encrypt(&plain, &padded_key));
    }

    #[test]
    fn key_longer_than_64_bits_is_truncated() {
        let plain = hex_to_bits("0123456789ABCDEF");
        let key64 = hex_to_bits("133457799BBCDFF1");
        let key_extra = BitString::from_bits(&(key64.as_bits() + "1111")).unwrap();
        assert_eq!(encrypt(&plain, &key64), encrypt(&plain, &key_extra));
    }

    #[quickcheck]
    fn roundtrip_is_identity(msg_bytes: (u32, u32), key_bytes: (u32, u32)) -> bool {
        let msg_raw = ((msg_bytes.0 as u64) << 32) | msg_bytes.1 as u64;
        let key_raw = ((key_bytes.0 as u64) << 32) | key_bytes.1 as u64;
        let msg = BitString::from_bytes(&msg_raw.to_be_bytes()).unwrap();
        let key = BitString::from_bytes(&key_raw.to_be_bytes()).unwrap();

        let cipher = encrypt(&msg, &key).unwrap();
        decrypt(&cipher, &key).unwrap() == msg
    }

    #[quickcheck]
    fn distinct_keys_usually_differ(msg_bytes: (u32, u32), key_bytes: (u32, u32)) -> bool {
        let msg_raw = ((msg_bytes.0 as u64) << 32) | msg_bytes.1 as u64;
        let key_raw = ((key_bytes.0 as u64) << 32) | key_bytes.1 as u64;
        let other_key_raw = key_raw ^ 1;

        let msg = BitString::from_bytes(&msg_raw.to_be_bytes()).unwrap();
        let key = BitString::from_bytes(&key_raw.to_be_bytes()).unwrap();
        let other_key = BitString::from_bytes(&other_key_raw.to_be_bytes()).unwrap();

        encrypt(&msg, &key).unwrap() != encrypt(&msg, &other_key).unwrap()
    }
}
