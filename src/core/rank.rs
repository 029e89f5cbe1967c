//! Length-prefixed binary ranking.
//!
//! Barcodes of length `n` occupy the block `[2^n - 2, 2^(n+1) - 3]`, so stacking
//! lengths 1..=15 fills `0..=65533` without gaps or collisions.

use crate::domain::model::{Barcode, Rank, MAX_BARCODE_LEN};

/// Value of the barcode read as a big-endian binary number (`l` = 1, `i` = 0).
pub fn binary_value(barcode: &Barcode) -> u32 {
    barcode
        .bits()
        .fold(0u32, |acc, bit| (acc << 1) | u32::from(bit))
}

/// First rank used by barcodes of `len` symbols; `len` must be a valid barcode length.
pub(crate) fn length_offset(len: usize) -> u32 {
    debug_assert!((1..=MAX_BARCODE_LEN).contains(&len));
    (1u32 << len) - 2
}

pub fn rank(barcode: &Barcode) -> Rank {
    let value = length_offset(barcode.len()) + binary_value(barcode);
    // 15 symbols at most: (2^15 - 2) + (2^15 - 1) < 2^16.
    Rank::new(value as u16)
}
