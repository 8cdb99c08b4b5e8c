//! Fixed-width text for coordinates and integers.
//!
//! Output is `0` terminated. On failure nothing is written to the
//! destination.

use defmt::debug;
use tinyvec::{Array, ArrayVec};

use crate::Abs;

/// Smallest destination accepted by the `*_ddmm` formatters.
pub const DDMM_MIN_CAPACITY: usize = 16;

type DdmmText = ArrayVec<[u8; DDMM_MIN_CAPACITY]>;

/// Formats latitude as `NDD MM.MMMM` (or `S...`).
///
/// Fails if `dst` is shorter than [`DDMM_MIN_CAPACITY`] or `deg` is outside
/// `-90..=90`. Fractional minutes are truncated to four digits.
pub fn format_lat_ddmm(deg: f32, dst: &mut [u8]) -> bool {
    format_ddmm(deg, 90.0, 2, (b'N', b'S'), dst)
}

/// Formats longitude as `EDDD MM.MMMM` (or `W...`).
///
/// Fails if `dst` is shorter than [`DDMM_MIN_CAPACITY`] or `deg` is outside
/// `-180..=180`.
pub fn format_lon_ddmm(deg: f32, dst: &mut [u8]) -> bool {
    format_ddmm(deg, 180.0, 3, (b'E', b'W'), dst)
}

fn format_ddmm(deg: f32, limit: f32, width: u32, (pos, neg): (u8, u8), dst: &mut [u8]) -> bool {
    if dst.len() < DDMM_MIN_CAPACITY {
        debug!("ddmm: destination too small ({=usize})", dst.len());
        return false;
    }

    // Also rejects NaN
    if !(-limit..=limit).contains(&deg) {
        debug!("ddmm: {=f32} out of range", deg);
        return false;
    }

    let mut text = DdmmText::new();
    text.push(if deg < 0.0 { neg } else { pos });

    let abs_deg = Abs::abs(deg);
    let whole_deg = abs_deg as u32;
    push_digits(&mut text, whole_deg, width);
    text.push(b' ');

    let minutes = (abs_deg - whole_deg as f32) * 60.0;
    let whole_min = minutes as u32;
    push_digits(&mut text, whole_min, 2);
    text.push(b'.');
    push_digits(&mut text, ((minutes - whole_min as f32) * 10_000.0) as u32, 4);
    text.push(0);

    dst[..text.len()].copy_from_slice(&text);
    true
}

/// Pushes `value` in decimal, zero padded to at least `width` digits.
fn push_digits<A: Array<Item = u8>>(text: &mut ArrayVec<A>, value: u32, width: u32) {
    let mut places = 1;
    while places < 10 && value >= 10u32.pow(places) {
        places += 1;
    }

    for place in (0..places.max(width)).rev() {
        text.push(b'0' + (value / 10u32.pow(place) % 10) as u8);
    }
}

/// Writes `value` in decimal, with a leading `-` when negative.
///
/// Digits that do not fit in front of the terminator are dropped from the
/// end. Returns the number of characters written, terminator excluded, or 0
/// if `dst` is empty.
pub fn int_to_string(value: i32, dst: &mut [u8]) -> usize {
    let Some(room) = dst.len().checked_sub(1) else {
        return 0;
    };

    let mut text = ArrayVec::<[u8; 11]>::new();
    if value < 0 {
        text.push(b'-');
    }
    push_digits(&mut text, value.unsigned_abs(), 1);

    let len = text.len().min(room);
    dst[..len].copy_from_slice(&text[..len]);
    dst[len] = 0;
    len
}
