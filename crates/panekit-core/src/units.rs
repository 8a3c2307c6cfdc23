//! Pixel/percent conversion relative to the container extent.
//!
//! All conversions are pure functions of the extent passed in (width or
//! height depending on the split axis) and preserve sign so negative drag
//! deltas survive the round trip.
//!
//! # Degenerate geometry
//!
//! A container measured before layout can report a zero extent, and
//! dividing by it would leak `Infinity`/`NaN` into every downstream
//! computation. Conversions against a zero or non-finite extent therefore
//! yield `0.0`, and [`sanitize`] is the single coercion point for
//! non-finite intermediates. Call sites that care (the drag controller)
//! log when the fallback fires; the conversion itself stays silent and
//! total.

/// Coerce a non-finite value to zero.
///
/// This is the engine's only `Infinity`/`NaN` escape hatch; keeping it as
/// a named function lets call sites observe and log the coercion instead
/// of scattering `is_finite` checks.
#[must_use]
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Convert a pixel distance to a percentage of `extent`.
///
/// Returns `0.0` when `extent` is zero, negative, or non-finite.
#[must_use]
pub fn to_percent(pixels: f64, extent: f64) -> f64 {
    if !extent.is_finite() || extent <= 0.0 {
        return 0.0;
    }
    sanitize(pixels / extent * 100.0)
}

/// Convert a percentage of `extent` to pixels.
///
/// Returns `0.0` when `extent` is zero, negative, or non-finite.
#[must_use]
pub fn to_pixels(percent: f64, extent: f64) -> f64 {
    if !extent.is_finite() || extent <= 0.0 {
        return 0.0;
    }
    sanitize(percent / 100.0 * extent)
}
