//! Multiplication in GF(2^128) with the LRW (IEEE P1619) bit ordering
//!
//! An element is the 16 bytes read as one big-endian integer: bit 0, the
//! least significant bit of the last byte, is the coefficient of x^0. The
//! field is reduced by x^128 + x^7 + x^2 + x + 1.

const R: u128 = 0x87;

/// Multiply two field elements in constant time
pub fn gf128_mul(x: &[u8; 16], y: &[u8; 16]) -> [u8; 16] {
    let x = u128::from_be_bytes(*x);
    let y = u128::from_be_bytes(*y);
    let mut z = 0u128;

    // Horner's rule from the top coefficient of x down
    for i in (0..128).rev() {
        let carry = z >> 127;
        z = (z << 1) ^ (R & 0u128.wrapping_sub(carry));
        let bit = (x >> i) & 1;
        z ^= y & 0u128.wrapping_sub(bit);
    }

    z.to_be_bytes()
}
