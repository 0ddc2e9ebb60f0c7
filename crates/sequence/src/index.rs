//! Offset normalization shared by every range-based operation.
//!
//! A raw offset counts from the front when non-negative and from the back
//! when negative; the result is always clamped into `[0, length]`.

#[inline]
pub fn relative_index(offset: i64, length: usize) -> usize {
    if offset < 0 {
        let back = usize::try_from(offset.unsigned_abs()).unwrap_or(usize::MAX);
        length.saturating_sub(back)
    } else {
        usize::try_from(offset).map_or(length, |offset| offset.min(length))
    }
}

#[inline]
pub fn resolve_start(offset: Option<i64>, length: usize) -> usize {
    offset.map_or(0, |offset| relative_index(offset, length))
}

#[inline]
pub fn resolve_end(offset: Option<i64>, length: usize) -> usize {
    offset.map_or(length, |offset| relative_index(offset, length))
}

/// Clamps a requested element count into `[0, available]`; a missing count
/// takes everything available.
#[inline]
pub fn clamp_count(count: Option<i64>, available: usize) -> usize {
    match count {
        None => available,
        Some(count) if count <= 0 => 0,
        Some(count) => usize::try_from(count).map_or(available, |count| count.min(available)),
    }
}

/// `ToIntegerOrInfinity` saturated into `i64`: NaN becomes 0, fractions
/// truncate toward zero and infinities pin to the ends of the range.
#[inline]
pub fn integer_from_f64(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    // `as` saturates at the i64 bounds.
    value.trunc() as i64
}
