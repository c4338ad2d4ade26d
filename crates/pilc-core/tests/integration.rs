//! Integration tests for pilc-core.
//!
//! Cross-checks synthesized ladders against the closed-form responses and
//! walks the full design flow: synthesize, sample the response, then map
//! every element onto standard parts.

use core::f64::consts::PI;
use pilc_core::{
    ComponentKind, ESeries, EvenOrderPolicy, FilterError, FilterFamily, FilterSpec,
    DEFAULT_POINTS, magnitude_db, match_standard, synthesize, synthesize_with_policy,
};

/// Evaluate |H(jω)| of a doubly terminated Pi ladder by ABCD chain multiplication.
///
/// The source and load both equal the design impedance; the result is
/// normalized so a lossless pass-through reads 0 dB.
fn ladder_response_db(spec: &FilterSpec, values: &[(ComponentKind, f64)], freq_hz: f64) -> f64 {
    #[derive(Clone, Copy)]
    struct C(f64, f64);
    impl C {
        fn mul(self, o: C) -> C {
            C(self.0 * o.0 - self.1 * o.1, self.0 * o.1 + self.1 * o.0)
        }
        fn add(self, o: C) -> C {
            C(self.0 + o.0, self.1 + o.1)
        }
        fn abs(self) -> f64 {
            (self.0 * self.0 + self.1 * self.1).sqrt()
        }
    }

    let w = 2.0 * PI * freq_hz;
    let (mut a, mut b, mut c, mut d) = (C(1.0, 0.0), C(0.0, 0.0), C(0.0, 0.0), C(1.0, 0.0));
    for &(kind, value) in values {
        // shunt admittance or series impedance
        let (ea, eb, ec, ed) = match kind {
            ComponentKind::Capacitor => (C(1.0, 0.0), C(0.0, 0.0), C(0.0, w * value), C(1.0, 0.0)),
            ComponentKind::Inductor => (C(1.0, 0.0), C(0.0, w * value), C(0.0, 0.0), C(1.0, 0.0)),
        };
        let na = a.mul(ea).add(b.mul(ec));
        let nb = a.mul(eb).add(b.mul(ed));
        let nc = c.mul(ea).add(d.mul(ec));
        let nd = c.mul(eb).add(d.mul(ed));
        a = na;
        b = nb;
        c = nc;
        d = nd;
    }
    let z = spec.impedance_ohm;
    // Vout/Vs = Z / (A·Z + B + Z·(C·Z + D)) for Rs = RL = Z
    let denom = a.mul(C(z, 0.0)).add(b).add(c.mul(C(z * z, 0.0))).add(d.mul(C(z, 0.0)));
    let h = 2.0 * z / denom.abs();
    20.0 * h.log10()
}

fn ladder_values(spec: &FilterSpec) -> Vec<(ComponentKind, f64)> {
    synthesize_with_policy(spec, EvenOrderPolicy::Accept)
        .unwrap()
        .components()
        .iter()
        .map(|c| (c.kind, c.value))
        .collect()
}

#[test]
fn butterworth_ladder_matches_closed_form() {
    for order in 1..=9 {
        let spec = FilterSpec::butterworth(order, 10e6, 50.0);
        let values = ladder_values(&spec);
        for ratio in [0.1, 0.5, 0.9, 1.0, 1.5, 3.0] {
            let f = ratio * spec.cutoff_hz;
            let ladder = ladder_response_db(&spec, &values, f);
            let closed = spec.magnitude_db(f).unwrap();
            assert!(
                (ladder - closed).abs() < 0.01,
                "order {order} at {ratio}fc: ladder {ladder:.4} dB, closed form {closed:.4} dB"
            );
        }
    }
}

#[test]
fn odd_chebyshev_ladder_matches_closed_form() {
    for order in [3, 5, 7, 9] {
        let spec = FilterSpec::chebyshev(order, 7.2e6, 50.0, 0.5);
        let values = ladder_values(&spec);
        for ratio in [0.3, 0.7, 1.0, 1.3, 2.0] {
            let f = ratio * spec.cutoff_hz;
            let ladder = ladder_response_db(&spec, &values, f);
            let closed = spec.magnitude_db(f).unwrap();
            assert!(
                (ladder - closed).abs() < 0.05,
                "order {order} at {ratio}fc: ladder {ladder:.4} dB, closed form {closed:.4} dB"
            );
        }
    }
}

#[test]
fn bessel_ladder_is_half_power_near_cutoff() {
    for order in 2..=9 {
        let spec = FilterSpec::bessel(order, 1e6, 50.0);
        let values = ladder_values(&spec);
        let ladder = ladder_response_db(&spec, &values, spec.cutoff_hz);
        assert!((ladder + 3.01).abs() < 0.1, "order {order}: {ladder:.4} dB");
    }
}

#[test]
fn full_design_flow() {
    let spec = FilterSpec::chebyshev(5, 14.35e6, 50.0, 0.1);
    let ladder = synthesize(&spec).unwrap();
    assert_eq!(ladder.order(), 5);

    let curve = ladder.spec().sweep(DEFAULT_POINTS).unwrap();
    assert_eq!(curve.len(), DEFAULT_POINTS);
    assert!(curve.magnitudes_db().iter().all(|&db| db <= 0.0));

    for component in ladder.components() {
        let result = match_standard(component.value, ESeries::E12).unwrap();
        assert!(result.error_percent.abs() < 12.0);
        if let Some(pair) = result.parallel {
            assert!(pair.error_percent.abs() < result.error_percent.abs());
        }
    }
}

#[test]
fn adjusted_order_flows_into_response() {
    let ladder = synthesize(&FilterSpec::chebyshev(4, 1e6, 50.0, 1.0)).unwrap();
    assert_eq!(ladder.spec().order, 5);
    // odd order: 0 dB at DC
    let dc = magnitude_db(FilterFamily::Chebyshev, 0.0, 1e6, ladder.order(), Some(1.0)).unwrap();
    assert!(dc.abs() < 1e-12);
}

#[test]
fn errors_surface_unchanged() {
    assert_eq!(
        synthesize(&FilterSpec::bessel(10, 1e6, 50.0)),
        Err(FilterError::UnsupportedOrder {
            family: FilterFamily::Bessel,
            order: 10
        })
    );
    assert_eq!(
        match_standard(0.0, ESeries::E24),
        Err(FilterError::InvalidValue(0.0))
    );
}
