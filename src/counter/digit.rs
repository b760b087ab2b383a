// src/counter/digit.rs
// =============================================================================
// The math behind one rolling digit strip.
//
// Each slot stacks the digits 0-9 on top of each other and slides them up
// or down so the right one sits in the window. For a slot with weight `p`
// showing value `v`:
//
//   target = floor(normalize(v / p))      e.g. v=47, p=10 -> 4
//
// The target is NOT reduced mod 10 here. Keeping the cumulative value lets
// 9 -> 10 keep rolling forward instead of spinning back through 8, 7, ...
//
// Offsets wrap the short way round the 0-9 ring: a digit more than five
// rows ahead is drawn above the window instead of below it.
// =============================================================================

// Relative tolerance used to snap float noise to the nearest integer
const SNAP_TOLERANCE: f64 = 1e-9;

// Snaps x to the nearest integer if it is within float noise of it
//
// 2.9999999999 is really 3 that lost a few bits along the way; flooring it
// directly would show the wrong digit.
pub fn normalize_near_integer(x: f64) -> f64 {
    let nearest = x.round();
    let tolerance = SNAP_TOLERANCE * x.abs().max(1.0);
    if (x - nearest).abs() < tolerance {
        nearest
    } else {
        x
    }
}

/// The value at a place's resolution: `floor(normalize(value / place))`
pub fn value_rounded_to_place(value: f64, place: f64) -> f64 {
    normalize_near_integer(value / place).floor()
}

// Vertical offset of digit `n` when the strip's animated value is `latest`
//
// Positive offsets are below the window, negative ones above it.
// `latest` may be fractional while the spring is moving.
pub fn digit_offset(latest: f64, n: u8, row_height: f64) -> f64 {
    let place_value = latest % 10.0;
    let offset = (10.0 + f64::from(n) - place_value) % 10.0;

    let mut memo = offset * row_height;
    if offset > 5.0 {
        memo -= 10.0 * row_height;
    }
    memo
}

/// All ten offsets of a strip, indexed by digit
pub fn strip_offsets(latest: f64, row_height: f64) -> [f64; 10] {
    let mut offsets = [0.0; 10];
    for (n, slot) in offsets.iter_mut().enumerate() {
        *slot = digit_offset(latest, n as u8, row_height);
    }
    offsets
}

/// The digit closest to the window for an animated value
pub fn visible_digit(latest: f64) -> u8 {
    latest.round().rem_euclid(10.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_rounded_to_place() {
        assert_eq!(value_rounded_to_place(47.0, 10.0), 4.0);
        assert_eq!(value_rounded_to_place(47.0, 1.0), 47.0);
        assert_eq!(value_rounded_to_place(1234.5, 0.1), 12345.0);
        assert_eq!(value_rounded_to_place(1234.5, 1000.0), 1.0);
    }

    #[test]
    fn test_snaps_float_noise() {
        assert_eq!(normalize_near_integer(2.9999999999), 3.0);
        assert_eq!(value_rounded_to_place(2.9999999999, 1.0), 3.0);
        // 0.3 / 0.1 is 2.9999999999999996 in f64
        assert_eq!(value_rounded_to_place(0.3, 0.1), 3.0);
    }

    #[test]
    fn test_real_fractions_are_not_snapped() {
        assert_eq!(normalize_near_integer(2.5), 2.5);
        assert_eq!(value_rounded_to_place(2.999, 1.0), 2.0);
    }

    #[test]
    fn test_tolerance_scales_with_magnitude() {
        let big = 1e12 - 1e-4;
        assert_eq!(normalize_near_integer(big), 1e12);
    }

    #[test]
    fn test_target_digit_sits_in_window() {
        // v=47, p=10 -> target 4, digit 4 is at offset 0
        let target = value_rounded_to_place(47.0, 10.0);
        assert_eq!(visible_digit(target), 4);
        assert_eq!(digit_offset(target, 4, 100.0), 0.0);
        assert_eq!(digit_offset(target, 5, 100.0), 100.0);
        assert_eq!(digit_offset(target, 3, 100.0), -100.0);
    }

    #[test]
    fn test_wraps_forward_from_nine() {
        // Just before 9 -> 10, digit 0 is one row below, not nine above
        assert_eq!(digit_offset(9.0, 0, 50.0), 50.0);
        // After the carry, 0 is in the window
        assert_eq!(digit_offset(10.0, 0, 50.0), 0.0);
        assert_eq!(visible_digit(10.0), 0);
    }

    #[test]
    fn test_offsets_stay_within_half_ring() {
        let offsets = strip_offsets(3.0, 10.0);
        assert!(offsets.iter().all(|o| *o > -50.0 && *o <= 50.0));
        assert_eq!(offsets[8], 50.0);
        assert_eq!(offsets[9], -40.0);
    }

    #[test]
    fn test_fractional_latest() {
        // Halfway between 4 and 5 both digits are half a row off
        assert_eq!(digit_offset(4.5, 5, 10.0), 5.0);
        assert_eq!(digit_offset(4.5, 4, 10.0), -5.0);
    }
}
