//! Constant-time operations to prevent timing attacks

use subtle::{ConstantTimeEq, ConstantTimeGreater};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// This function runs in constant time regardless of the input values.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// XOR `src` into `dst` element-wise over the common prefix
#[inline]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= *s;
    }
}

/// Check a PKCS#7 padded final block in constant time
///
/// Returns the pad length when every trailing byte equals the last byte and
/// the last byte lies in `1..=block.len()`. Every byte of the block is
/// inspected whatever its content, so the timing does not reveal where a
/// malformed pad was detected.
pub fn ct_pkcs7_pad_len(block: &[u8]) -> Option<usize> {
    let bs = block.len();
    if bs == 0 || bs > 255 {
        return None;
    }
    let pad = block[bs - 1];

    // 1 <= pad <= bs
    let mut valid = !pad.ct_eq(&0u8);
    valid &= !pad.ct_gt(&(bs as u8));

    for (i, &b) in block.iter().enumerate() {
        // Position i (counted from the end, 1-based) is inside the pad
        let from_end = (bs - i) as u8;
        let in_pad = !from_end.ct_gt(&pad);
        let matches = b.ct_eq(&pad);
        valid &= !in_pad | matches;
    }

    if bool::from(valid) {
        Some(pad as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ct_eq() {
        assert!(ct_eq([1u8, 2, 3], [1u8, 2, 3]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2, 4]));
        assert!(!ct_eq([1u8, 2], [1u8, 2, 3]));
    }

    #[test]
    fn test_xor_in_place() {
        let mut a = [0xffu8, 0x0f, 0x00];
        xor_in_place(&mut a, &[0x0f, 0x0f]);
        assert_eq!(a, [0xf0, 0x00, 0x00]);
    }

    #[test]
    fn test_pkcs7_pad_len() {
        let mut block = [0x41u8; 16];
        block[15] = 1;
        assert_eq!(ct_pkcs7_pad_len(&block), Some(1));

        assert_eq!(ct_pkcs7_pad_len(&[16u8; 16]), Some(16));

        let mut block = [0x41u8; 16];
        block[12..].copy_from_slice(&[4, 4, 4, 4]);
        assert_eq!(ct_pkcs7_pad_len(&block), Some(4));

        // one mismatching pad byte
        block[12] = 3;
        assert_eq!(ct_pkcs7_pad_len(&block), None);

        // zero and oversized pad values
        assert_eq!(ct_pkcs7_pad_len(&[0u8; 16]), None);
        assert_eq!(ct_pkcs7_pad_len(&[17u8; 16]), None);
        assert_eq!(ct_pkcs7_pad_len(&[]), None);
    }
}
