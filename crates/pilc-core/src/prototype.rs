//! Prototype synthesis: filter family + order → denormalized Pi-ladder values.
//!
//! Every family first produces normalized prototype values g1..gn
//! (1 Ω terminations, 1 rad/s cutoff), which are then scaled to the target
//! impedance Z0 and angular cutoff ω = 2π·fc:
//!
//! ```text
//! C = g / (Z0·ω)        (odd positions, shunt)
//! L = g·Z0 / ω          (even positions, series)
//! ```
//!
//! The resulting ladder always starts with a shunt capacitor:
//!
//! ```text
//!   IN ───┬───┤ L1 ├───┬─── ··· ─── OUT
//!         │            │
//!        ===C1        ===C2
//!         │            │
//!        GND          GND
//! ```

use core::f64::consts::PI;
use libm::{exp, log, sin, sinh};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::{FilterError, Result};
use crate::family::{EvenOrderPolicy, FilterFamily, FilterSpec, check_ripple};
use crate::tables::bessel_g_values;

/// Divisor turning a ripple in dB into the exponent used by the Chebyshev
/// g-value recurrence (40 / ln 10 ≈ 17.37).
const RIPPLE_DB_DIVISOR: f64 = 17.37;

/// Role of an element in the Pi ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Shunt capacitor to ground, value in farads.
    Capacitor,
    /// Series inductor, value in henries.
    Inductor,
}

impl ComponentKind {
    /// Kind of the element at 1-based ladder position `position`.
    pub fn at_position(position: usize) -> Self {
        if position % 2 == 1 {
            Self::Capacitor
        } else {
            Self::Inductor
        }
    }

    /// Reference designator prefix ("C" or "L").
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Capacitor => "C",
            Self::Inductor => "L",
        }
    }

    /// SI unit symbol ("F" or "H").
    pub fn unit(self) -> &'static str {
        match self {
            Self::Capacitor => "F",
            Self::Inductor => "H",
        }
    }
}

/// One element of a synthesized ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    /// Capacitor or inductor.
    pub kind: ComponentKind,
    /// 1-based position along the ladder.
    pub position: usize,
    /// 1-based index among components of the same kind (C1, C2, L1, ..).
    pub index: usize,
    /// Normalized prototype value.
    pub g: f64,
    /// Denormalized value in farads or henries.
    pub value: f64,
}

/// Record of an order change applied by an [`EvenOrderPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderAdjustment {
    /// Order the caller asked for.
    pub requested: usize,
    /// Order that was synthesized.
    pub effective: usize,
}

/// Ordered Pi-ladder element values.
///
/// Odd positions are capacitors and even positions are inductors, so a
/// sequence of order n holds ceil(n/2) capacitors and floor(n/2) inductors.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSequence {
    spec: FilterSpec,
    components: Vec<Component>,
    adjustment: Option<OrderAdjustment>,
}

impl ComponentSequence {
    fn from_g_values(spec: FilterSpec, g: &[f64], adjustment: Option<OrderAdjustment>) -> Result<Self> {
        let omega = 2.0 * PI * spec.cutoff_hz;
        let z0 = spec.impedance_ohm;

        let mut components = Vec::with_capacity(g.len());
        for (i, &gi) in g.iter().enumerate() {
            let position = i + 1;
            let kind = ComponentKind::at_position(position);
            let value = match kind {
                ComponentKind::Capacitor => gi / (z0 * omega),
                ComponentKind::Inductor => gi * z0 / omega,
            };
            if !(value.is_finite() && value > 0.0) {
                return Err(FilterError::Degenerate("synthesized element is not positive and finite"));
            }
            components.push(Component {
                kind,
                position,
                index: i / 2 + 1,
                g: gi,
                value,
            });
        }

        Ok(Self {
            spec: spec.with_order(g.len()),
            components,
            adjustment,
        })
    }

    /// Spec that was synthesized (its order is the effective order).
    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Number of elements, equal to the effective filter order.
    pub fn order(&self) -> usize {
        self.components.len()
    }

    /// Order the caller requested, before any policy adjustment.
    pub fn requested_order(&self) -> usize {
        self.adjustment.map_or(self.order(), |a| a.requested)
    }

    /// Order change applied during synthesis, if any.
    pub fn adjustment(&self) -> Option<OrderAdjustment> {
        self.adjustment
    }

    /// All elements in ladder order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Normalized prototype values in ladder order.
    pub fn g_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.components.iter().map(|c| c.g)
    }

    /// Shunt capacitors in ladder order.
    pub fn capacitors(&self) -> impl Iterator<Item = &Component> {
        self.components
            .iter()
            .filter(|c| c.kind == ComponentKind::Capacitor)
    }

    /// Series inductors in ladder order.
    pub fn inductors(&self) -> impl Iterator<Item = &Component> {
        self.components
            .iter()
            .filter(|c| c.kind == ComponentKind::Inductor)
    }

    /// Capacitor values in farads.
    pub fn capacitor_values(&self) -> Vec<f64> {
        self.capacitors().map(|c| c.value).collect()
    }

    /// Inductor values in henries.
    pub fn inductor_values(&self) -> Vec<f64> {
        self.inductors().map(|c| c.value).collect()
    }
}

/// Normalized Butterworth prototype values: g_i = 2·sin((2i−1)π / 2n).
pub fn butterworth_g_values(order: usize) -> Result<Vec<f64>> {
    FilterFamily::Butterworth.check_order(order)?;
    let n = order as f64;
    Ok((1..=order)
        .map(|i| 2.0 * sin((2 * i - 1) as f64 * PI / (2.0 * n)))
        .collect())
}

/// Normalized Chebyshev Type I prototype values for the given ripple.
///
/// No odd-order requirement is applied here; see [`EvenOrderPolicy`].
pub fn chebyshev_g_values(order: usize, ripple_db: f64) -> Result<Vec<f64>> {
    FilterFamily::Chebyshev.check_order(order)?;
    let ripple_db = check_ripple(Some(ripple_db))?;
    let n = order as f64;

    let rr = ripple_db / RIPPLE_DB_DIVISOR;
    let e2x = exp(2.0 * rr);
    let coth = (e2x + 1.0) / (e2x - 1.0);
    let bt = log(coth);
    let gn = sinh(bt / (2.0 * n));

    // a[i], b[i] for i = 1..=n, index 0 unused
    let mut a = Vec::with_capacity(order + 1);
    let mut b = Vec::with_capacity(order + 1);
    a.push(0.0);
    b.push(0.0);
    for i in 1..=order {
        a.push(sin((2 * i - 1) as f64 * PI / (2.0 * n)));
        let s = sin(i as f64 * PI / n);
        b.push(gn * gn + s * s);
    }

    let mut g = Vec::with_capacity(order);
    g.push(2.0 * a[1] / gn);
    for i in 2..=order {
        let prev = g[i - 2];
        g.push(4.0 * a[i - 1] * a[i] / (b[i - 1] * prev));
    }
    Ok(g)
}

/// Synthesize a Pi ladder using the default [`EvenOrderPolicy`].
pub fn synthesize(spec: &FilterSpec) -> Result<ComponentSequence> {
    synthesize_with_policy(spec, EvenOrderPolicy::default())
}

/// Synthesize a Pi ladder, applying `policy` to even Chebyshev orders.
///
/// The policy is ignored for Butterworth and Bessel, which realize any
/// supported order directly.
pub fn synthesize_with_policy(
    spec: &FilterSpec,
    policy: EvenOrderPolicy,
) -> Result<ComponentSequence> {
    spec.validate()?;

    match spec.family {
        FilterFamily::Butterworth => {
            let g = butterworth_g_values(spec.order)?;
            ComponentSequence::from_g_values(*spec, &g, None)
        }
        FilterFamily::Chebyshev => {
            let effective = policy.resolve(spec.order)?;
            let adjustment = (effective != spec.order).then_some(OrderAdjustment {
                requested: spec.order,
                effective,
            });
            #[cfg(feature = "tracing")]
            if let Some(adj) = adjustment {
                tracing::debug!(
                    requested = adj.requested,
                    effective = adj.effective,
                    "chebyshev order adjusted to odd"
                );
            }
            let ripple = check_ripple(spec.ripple_db)?;
            let g = chebyshev_g_values(effective, ripple)?;
            ComponentSequence::from_g_values(*spec, &g, adjustment)
        }
        FilterFamily::Bessel => {
            let g = bessel_g_values(spec.order).ok_or(FilterError::UnsupportedOrder {
                family: FilterFamily::Bessel,
                order: spec.order,
            })?;
            ComponentSequence::from_g_values(*spec, g, None)
        }
    }
}
