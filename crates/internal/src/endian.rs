//! Counter arithmetic over byte fields

/// Increment a big-endian counter held in `field`, wrapping on overflow
///
/// The carry propagates from the last byte towards the first.
pub fn increment_be(field: &mut [u8]) {
    for byte in field.iter_mut().rev() {
        let (next, overflow) = byte.overflowing_add(1);
        *byte = next;
        if !overflow {
            return;
        }
    }
}

/// Increment a little-endian counter held in `field`, wrapping on overflow
pub fn increment_le(field: &mut [u8]) {
    for byte in field.iter_mut() {
        let (next, overflow) = byte.overflowing_add(1);
        *byte = next;
        if !overflow {
            return;
        }
    }
}
