//! Bit-field helpers for packing and unpacking instruction words.

/// Returns a mask with the low `width` bits set.
#[inline]
pub const fn low_mask(width: u32) -> u32 {
    if width >= 32 { u32::MAX } else { (1 << width) - 1 }
}

/// Extracts `width` bits of `word` starting at bit `lo`.
#[inline]
pub const fn field(word: u32, lo: u32, width: u32) -> u32 {
    (word >> lo) & low_mask(width)
}

/// Places the low `width` bits of `value` at bit `lo`.
#[inline]
pub const fn place(value: u32, lo: u32, width: u32) -> u32 {
    (value & low_mask(width)) << lo
}

/// Sign-extends the low `bits` bits of `value` to 64 bits.
///
/// # Arguments
///
/// * `value` - Raw field value; bits above `bits` are ignored.
/// * `bits` - Width of the field, 1 to 32.
#[inline]
pub const fn sign_extend(value: u32, bits: u32) -> i64 {
    let shift = 32 - bits;
    ((value << shift) as i32 >> shift) as i64
}
