//! Fixed permutation tables defined by FIPS 46-3, reproduced verbatim from
//! the reference C implementation (1-based indices throughout).

/// This table specifies the input permutation on a 64-bit block.
///
/// The first bit of the output is taken from the 58th bit of the input;
/// the second bit from the 50th bit, and so on, with the last bit of the
/// output taken from the 7th bit of the input.
pub(super) const INITIAL_PERMUTATION: [u8; 64] = [
    58, 50, 42, 34, 26, 18, 10, 2, // 2, 4, ...
    60, 52, 44, 36, 28, 20, 12, 4, //
    62, 54, 46, 38, 30, 22, 14, 6, //
    64, 56, 48, 40, 32, 24, 16, 8, //
    // odds and even split
    57, 49, 41, 33, 25, 17, 9, 1, // 1, 3, ...
    59, 51, 43, 35, 27, 19, 11, 3, //
    61, 53, 45, 37, 29, 21, 13, 5, //
    63, 55, 47, 39, 31, 23, 15, 7, //
];

/// Inverse of the INITIAL_PERMUTATION.
pub(super) const FINAL_PERMUTATION: [u8; 64] = [
    40, 8, 48, 16, 56, 24, 64, 32, //
    39, 7, 47, 15, 55, 23, 63, 31, //
    38, 6, 46, 14, 54, 22, 62, 30, //
    37, 5, 45, 13, 53, 21, 61, 29, //
    36, 4, 44, 12, 52, 20, 60, 28, //
    35, 3, 43, 11, 51, 19, 59, 27, //
    34, 2, 42, 10, 50, 18, 58, 26, //
    33, 1, 41, 9, 49, 17, 57, 25, //
];

/* PC_1 Visualization
 *         Left                     Right    Parity Bits
 * row 1: 57  58  59  60     | 61  62  63 |  64
 * row 2: 49  50  51  52     | 53  54  55 |  56
 * row 3: 41  42  43  44     | 45  46  47 |  48
 * row 4: 33  34  35  36   __| 37  38  39 |  40
 * row 5: 25  26  27     | 28  29  30  31 |  32
 * row 6: 17  18  19     | 20  21  22  23 |  24
 * row 7:  9  10  11     | 12  13  14  15 |  16
 * row 8:  1   2   3     |  4   5   6   7 |   8
 */

/// Permutated Choice 1 — reduces the 64-bit key to the 56-bit schedule
/// state.
pub(super) const PC_1: [u8; 56] = [
    57, 49, 41, 33, 25, 17, 9, //
    1, 58, 50, 42, 34, 26, 18, //
    10, 2, 59, 51, 43, 35, 27, //
    19, 11, 3, 60, 52, 44, 36, //
    63, 55, 47, 39, 31, 23, 15, //
    7, 62, 54, 46, 38, 30, 22, //
    14, 6, 61, 53, 45, 37, 29, //
    21, 13, 5, 28, 20, 12, 4, //
];

/// Key Compression Table — selects the 48-bit subkey from the rotated
/// 56-bit schedule state each round.
pub(super) const PC_2: [u8; 48] = [
    14, 17, 11, 24, 1, 5, 3, 28, //
    15, 6, 21, 10, 23, 19, 12, 4, //
    26, 8, 16, 7, 27, 20, 13, 2, //
    41, 52, 31, 37, 47, 55, 30, 40, //
    51, 45, 33, 48, 44, 49, 39, 56, //
    34, 53, 46, 42, 50, 36, 29, 32,
];

/// Expansion permutation: inflates the 32-bit half-block to 48 bits for
/// XOR with the round subkey.
pub(super) const EXP: [u8; 48] = [
    32, 1, 2, 3, 4, 5, //
    4, 5, 6, 7, 8, 9, //
    8, 9, 10, 11, 12, 13, //
    12, 13, 14, 15, 16, 17, //
    16, 17, 18, 19, 20, 21, //
    20, 21, 22, 23, 24, 25, //
    24, 25, 26, 27, 28, 29, //
    28, 29, 30, 31, 32, 1, //
];

/// P-permutation applied to the concatenated S-box outputs.
pub(super) const P: [u8; 32] = [
    16, 7, 20, 21, 29, 12, 28, 17, //
    1, 15, 23, 26, 5, 18, 31, 10, //
    2, 8, 24, 14, 32, 27, 3, 9, //
    19, 13, 30, 6, 22, 11, 4, 25, //
];

/// Round-specific rotation amount for the key schedule (§4.2.3): rounds
/// 1, 2, 9, 16 rotate by 1, every other round rotates by 2. Indexed by
/// `round - 1`.
pub(super) const KEY_ROTATIONS: [u8; 16] = [1, 1, 2, 2, 2, 2, 2, 2, 1, 2, 2, 2, 2, 2, 2, 1];
