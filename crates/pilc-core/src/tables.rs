//! Fixed Bessel (Thomson) coefficient tables.
//!
//! Bessel element values have no simple closed form, so synthesis and
//! response evaluation both read from static per-order tables. Lookups fail
//! closed: an order outside [`BESSEL_MIN_ORDER`]..=[`BESSEL_MAX_ORDER`]
//! returns `None`, never a neighbouring row.

/// Lowest tabulated Bessel order.
pub const BESSEL_MIN_ORDER: usize = 2;

/// Highest tabulated Bessel order.
pub const BESSEL_MAX_ORDER: usize = 9;

/// Normalized ladder element values (g1..gn) for equally terminated Bessel
/// low-pass prototypes, scaled so the -3 dB point sits at 1 rad/s.
///
/// Source: Williams & Taylor, "Electronic Filter Design Handbook", Bessel LC
/// element value table. Equal terminations make the ladder response
/// invariant under reversal and L/C duality, so the row can be read as a
/// shunt-first Pi ladder directly.
const BESSEL_G: [&[f64]; 8] = [
    &[0.5755, 2.1478],
    &[0.3374, 0.9705, 2.2034],
    &[0.2334, 0.6725, 1.0815, 2.2404],
    &[0.1743, 0.5072, 0.8040, 1.1110, 2.2582],
    &[0.1365, 0.4002, 0.6392, 0.8538, 1.1126, 2.2645],
    &[0.1106, 0.3259, 0.5249, 0.7020, 0.8690, 1.1052, 2.2659],
    &[0.0919, 0.2719, 0.4409, 0.5936, 0.7303, 0.8695, 1.0956, 2.2656],
    &[0.0780, 0.2313, 0.3770, 0.5108, 0.6306, 0.7407, 0.8639, 1.0863, 2.2649],
];

/// Frequency (in units of the unit-delay normalization) at which each order
/// reaches -3 dB. Multiplying f/fc by this moves the -3 dB point to cutoff.
///
/// Source: Williams & Taylor, "Electronic Filter Design Handbook" (4th ed.).
const BESSEL_SCALE: [f64; 8] = [
    1.3617, 1.7557, 2.1139, 2.4274, 2.7034, 2.9517, 3.1796, 3.3917,
];

/// Reverse Bessel polynomial coefficients `[a0, a1, .., an]` for s^0..s^n,
/// normalized to unit group delay at DC.
///
/// a_k = (2n-k)! / (2^(n-k) k! (n-k)!). Source: Zverev, "Handbook of
/// Filter Synthesis" (1967).
const BESSEL_POLY: [&[f64]; 8] = [
    &[3.0, 3.0, 1.0],
    &[15.0, 15.0, 6.0, 1.0],
    &[105.0, 105.0, 45.0, 10.0, 1.0],
    &[945.0, 945.0, 420.0, 105.0, 15.0, 1.0],
    &[10395.0, 10395.0, 4725.0, 1260.0, 210.0, 21.0, 1.0],
    &[135135.0, 135135.0, 62370.0, 17325.0, 3150.0, 378.0, 28.0, 1.0],
    &[
        2027025.0, 2027025.0, 945945.0, 270270.0, 51975.0, 6930.0, 630.0, 36.0, 1.0,
    ],
    &[
        34459425.0, 34459425.0, 16216200.0, 4729725.0, 945945.0, 135135.0, 13860.0, 990.0,
        45.0, 1.0,
    ],
];

fn row(order: usize) -> Option<usize> {
    (BESSEL_MIN_ORDER..=BESSEL_MAX_ORDER)
        .contains(&order)
        .then(|| order - BESSEL_MIN_ORDER)
}

/// Normalized g-values for a Bessel ladder of the given order.
pub fn bessel_g_values(order: usize) -> Option<&'static [f64]> {
    row(order).map(|i| BESSEL_G[i])
}

/// -3 dB scale factor for the given order.
pub fn bessel_scale(order: usize) -> Option<f64> {
    row(order).map(|i| BESSEL_SCALE[i])
}

/// Denominator polynomial coefficients for the given order.
pub fn bessel_polynomial(order: usize) -> Option<&'static [f64]> {
    row(order).map(|i| BESSEL_POLY[i])
}
