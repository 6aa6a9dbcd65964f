//! Heat-index computation.
//!
//! Implements the NOAA Rothfusz regression: an empirical "feels like"
//! temperature combining air temperature and relative humidity. The
//! regression is defined in Fahrenheit, so input is converted, the
//! polynomial applied, and the result converted back to Celsius.
//!
//! Inputs are deliberately not validated. The regression was fitted for
//! roughly 27 °C+ and 40 %+ humidity; outside that range it still
//! produces a number, and callers get exactly what the formula says —
//! no rejection, no clamping.

/// Computes the heat index in °C from a temperature in °C and relative
/// humidity in percent.
///
/// Pure and deterministic: identical inputs always produce identical
/// output, bit for bit.
pub fn compute_heat_index(temp_c: f64, relative_humidity: f64) -> f64 {
    let t = temp_c * 9.0 / 5.0 + 32.0;
    let rh = relative_humidity;

    // NOAA Rothfusz regression, Fahrenheit domain. Coefficients must not
    // be rounded or reordered.
    let hi = -42.379
        + 2.04901523 * t
        + 10.14333127 * rh
        - 0.22475541 * t * rh
        - 0.00683783 * t * t
        - 0.05481717 * rh * rh
        + 0.00122874 * t * t * rh
        + 0.00085282 * t * rh * rh
        - 0.00000199 * t * t * rh * rh;

    (hi - 32.0) * 5.0 / 9.0
}
