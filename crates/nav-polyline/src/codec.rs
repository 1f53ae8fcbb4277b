//! Encoded polyline codec.
//!
//! Each coordinate is written latitude first, then longitude:
//!
//! ```text
//! scaled = round(value · 10^precision)
//! delta  = scaled - previous scaled value of the same axis
//! zz     = (delta << 1) ^ (delta >> 63)
//! emit zz in 5-bit groups, low group first, 0x20 set on all but the last,
//! each group + 63 as an ASCII byte
//! ```

use nav_core::GeoPoint;

use crate::{PolylineError, PolylineResult};

/// Decimal places used by [`encode`] and [`decode`].
pub const DEFAULT_PRECISION: u32 = 5;

const MAX_PRECISION: u32 = 10;

/// Encode `points` at five decimal places.  An empty slice encodes to `""`.
///
/// Coordinates are expected to be finite and within `i64` range once scaled.
/// Out-of-range values saturate and NaN encodes as zero; encoding never
/// panics, but such output will not decode back to the input.
pub fn encode(points: &[GeoPoint]) -> String {
    encode_scaled(points, scale(DEFAULT_PRECISION))
}

/// Encode `points` at `precision` decimal places (0..=10).
pub fn encode_with_precision(points: &[GeoPoint], precision: u32) -> PolylineResult<String> {
    Ok(encode_scaled(points, checked_scale(precision)?))
}

/// Decode a five-decimal polyline.
pub fn decode(polyline: &str) -> PolylineResult<Vec<GeoPoint>> {
    decode_scaled(polyline, scale(DEFAULT_PRECISION))
}

/// Decode a polyline written at `precision` decimal places (0..=10).
pub fn decode_with_precision(polyline: &str, precision: u32) -> PolylineResult<Vec<GeoPoint>> {
    decode_scaled(polyline, checked_scale(precision)?)
}

// ── Internals ─────────────────────────────────────────────────────────────────

#[inline]
fn scale(precision: u32) -> f64 {
    10f64.powi(precision as i32)
}

fn checked_scale(precision: u32) -> PolylineResult<f64> {
    if precision > MAX_PRECISION {
        return Err(PolylineError::InvalidPrecision(precision));
    }
    Ok(scale(precision))
}

fn encode_scaled(points: &[GeoPoint], factor: f64) -> String {
    // Typical output is a handful of bytes per coordinate.
    let mut out = String::with_capacity(points.len() * 8);
    let (mut prev_lat, mut prev_lon) = (0i64, 0i64);
    for p in points {
        let lat = (p.lat * factor).round() as i64;
        let lon = (p.lon * factor).round() as i64;
        // Deltas wrap for saturated inputs; decode reports those as Overflow.
        push_value(&mut out, lat.wrapping_sub(prev_lat));
        push_value(&mut out, lon.wrapping_sub(prev_lon));
        prev_lat = lat;
        prev_lon = lon;
    }
    out
}

fn push_value(out: &mut String, delta: i64) {
    let mut zz = ((delta << 1) ^ (delta >> 63)) as u64;
    while zz >= 0x20 {
        out.push(char::from((((zz & 0x1f) | 0x20) + 63) as u8));
        zz >>= 5;
    }
    out.push(char::from((zz + 63) as u8));
}

fn decode_scaled(polyline: &str, factor: f64) -> PolylineResult<Vec<GeoPoint>> {
    let mut chars = polyline.char_indices();
    let mut points = Vec::new();
    let (mut lat, mut lon) = (0i64, 0i64);

    loop {
        let lat_at = chars.offset();
        let Some(d_lat) = next_value(&mut chars)? else { break };
        let lon_at = chars.offset();
        let d_lon = next_value(&mut chars)?.ok_or(PolylineError::UnpairedCoordinate)?;
        lat = lat.checked_add(d_lat).ok_or(PolylineError::Overflow { index: lat_at })?;
        lon = lon.checked_add(d_lon).ok_or(PolylineError::Overflow { index: lon_at })?;
        points.push(GeoPoint::new(lat as f64 / factor, lon as f64 / factor));
    }
    Ok(points)
}

/// Read one zigzag value.  `Ok(None)` at a clean end of input.
fn next_value(chars: &mut std::str::CharIndices<'_>) -> PolylineResult<Option<i64>> {
    let mut acc: u64 = 0;
    let mut shift = 0u32;
    let mut started = false;

    for (index, ch) in chars.by_ref() {
        if !('?'..='~').contains(&ch) {
            return Err(PolylineError::InvalidCharacter { index, ch });
        }
        if shift >= 64 {
            return Err(PolylineError::Overflow { index });
        }
        started = true;
        let group = ch as u64 - 63;
        // Only four bits of a 64-bit value remain for the thirteenth group.
        if shift == 60 && (group & 0x1f) > 0xf {
            return Err(PolylineError::Overflow { index });
        }
        acc |= (group & 0x1f) << shift;
        shift += 5;
        if group < 0x20 {
            let value = ((acc >> 1) as i64) ^ -((acc & 1) as i64);
            return Ok(Some(value));
        }
    }

    if started { Err(PolylineError::Truncated) } else { Ok(None) }
}
