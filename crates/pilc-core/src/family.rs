//! Filter families and the immutable design description.
//!
//! [`FilterSpec`] fully determines both the synthesized component values and
//! the frequency response. It is validated once by [`FilterSpec::validate`];
//! the free functions in [`prototype`](crate::prototype) and
//! [`response`](crate::response) re-check their own inputs so they can be
//! called without a spec.

use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

use crate::error::{FilterError, Result};
use crate::tables::{BESSEL_MAX_ORDER, BESSEL_MIN_ORDER};

/// Low-pass approximation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterFamily {
    /// Maximally flat passband, -3 dB at cutoff.
    Butterworth,
    /// Type I: equiripple passband, response at cutoff equals the ripple depth.
    Chebyshev,
    /// Thomson: maximally flat group delay, normalized to -3 dB at cutoff.
    Bessel,
}

impl FilterFamily {
    /// All families, in display order.
    pub const ALL: [FilterFamily; 3] = [Self::Butterworth, Self::Chebyshev, Self::Bessel];

    /// Lowercase canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Butterworth => "butterworth",
            Self::Chebyshev => "chebyshev",
            Self::Bessel => "bessel",
        }
    }

    /// Whether this family takes a passband ripple parameter.
    pub fn uses_ripple(self) -> bool {
        matches!(self, Self::Chebyshev)
    }

    /// Check that `order` is realizable for this family.
    ///
    /// Butterworth and Chebyshev accept any order of at least 1. Bessel is
    /// limited to the orders present in the coefficient tables.
    pub fn check_order(self, order: usize) -> Result<()> {
        let supported = match self {
            Self::Butterworth | Self::Chebyshev => order >= 1,
            Self::Bessel => (BESSEL_MIN_ORDER..=BESSEL_MAX_ORDER).contains(&order),
        };
        if supported {
            Ok(())
        } else {
            Err(FilterError::UnsupportedOrder {
                family: self,
                order,
            })
        }
    }
}

impl fmt::Display for FilterFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a family name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFamily(pub String);

impl fmt::Display for UnknownFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown filter type: {} (expected butterworth, chebyshev or bessel)",
            self.0
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownFamily {}

impl FromStr for FilterFamily {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("butterworth") || name.eq_ignore_ascii_case("bw") {
            Ok(Self::Butterworth)
        } else if name.eq_ignore_ascii_case("chebyshev")
            || name.eq_ignore_ascii_case("cheby")
            || name.eq_ignore_ascii_case("ch")
        {
            Ok(Self::Chebyshev)
        } else if name.eq_ignore_ascii_case("bessel") || name.eq_ignore_ascii_case("bs") {
            Ok(Self::Bessel)
        } else {
            Err(UnknownFamily(s.to_string()))
        }
    }
}

/// What to do when an even order is requested for a Chebyshev Pi ladder.
///
/// The equal-termination Pi realization of a Chebyshev prototype needs an odd
/// order. Every policy is explicit: an adjustment is recorded on the
/// resulting [`ComponentSequence`](crate::ComponentSequence), never applied silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvenOrderPolicy {
    /// Fail with [`FilterError::EvenOrderRejected`].
    Reject,
    /// Synthesize order `n + 1` and report the adjustment.
    #[default]
    Increment,
    /// Synthesize the even order as requested.
    Accept,
}

impl EvenOrderPolicy {
    /// Lowercase canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Increment => "increment",
            Self::Accept => "accept",
        }
    }

    /// Resolve the order actually synthesized for a Chebyshev request.
    pub fn resolve(self, order: usize) -> Result<usize> {
        if order % 2 == 1 {
            return Ok(order);
        }
        match self {
            Self::Reject => Err(FilterError::EvenOrderRejected(order)),
            Self::Increment => Ok(order + 1),
            Self::Accept => Ok(order),
        }
    }
}

impl fmt::Display for EvenOrderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EvenOrderPolicy {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "increment" | "round-up" => Ok(Self::Increment),
            "accept" => Ok(Self::Accept),
            other => Err(String::from(other)),
        }
    }
}

/// Complete description of a Pi-ladder low-pass design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSpec {
    /// Approximation family.
    pub family: FilterFamily,
    /// Number of reactive elements (poles).
    pub order: usize,
    /// Cutoff frequency in Hz.
    pub cutoff_hz: f64,
    /// Source/load impedance in ohms.
    pub impedance_ohm: f64,
    /// Passband ripple in dB; only read for Chebyshev.
    pub ripple_db: Option<f64>,
}

impl FilterSpec {
    /// Butterworth design.
    pub fn butterworth(order: usize, cutoff_hz: f64, impedance_ohm: f64) -> Self {
        Self {
            family: FilterFamily::Butterworth,
            order,
            cutoff_hz,
            impedance_ohm,
            ripple_db: None,
        }
    }

    /// Chebyshev Type I design.
    pub fn chebyshev(order: usize, cutoff_hz: f64, impedance_ohm: f64, ripple_db: f64) -> Self {
        Self {
            family: FilterFamily::Chebyshev,
            order,
            cutoff_hz,
            impedance_ohm,
            ripple_db: Some(ripple_db),
        }
    }

    /// Bessel (Thomson) design.
    pub fn bessel(order: usize, cutoff_hz: f64, impedance_ohm: f64) -> Self {
        Self {
            family: FilterFamily::Bessel,
            order,
            cutoff_hz,
            impedance_ohm,
            ripple_db: None,
        }
    }

    /// Copy of this spec with a different order.
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Ripple value if this family uses one.
    pub fn effective_ripple(&self) -> Option<f64> {
        if self.family.uses_ripple() {
            self.ripple_db
        } else {
            None
        }
    }

    /// Validate every field against the family's domain.
    ///
    /// Chebyshev even-order handling is not checked here; that is the
    /// business of the [`EvenOrderPolicy`] passed to synthesis.
    pub fn validate(&self) -> Result<()> {
        check_cutoff(self.cutoff_hz)?;
        check_impedance(self.impedance_ohm)?;
        self.family.check_order(self.order)?;
        if self.family.uses_ripple() {
            check_ripple(self.ripple_db)?;
        }
        Ok(())
    }
}

pub(crate) fn check_cutoff(cutoff_hz: f64) -> Result<()> {
    if cutoff_hz.is_finite() && cutoff_hz > 0.0 {
        Ok(())
    } else {
        Err(FilterError::InvalidCutoff(cutoff_hz))
    }
}

pub(crate) fn check_impedance(impedance_ohm: f64) -> Result<()> {
    if impedance_ohm.is_finite() && impedance_ohm > 0.0 {
        Ok(())
    } else {
        Err(FilterError::InvalidImpedance(impedance_ohm))
    }
}

pub(crate) fn check_ripple(ripple_db: Option<f64>) -> Result<f64> {
    match ripple_db {
        Some(r) if r.is_finite() && r > 0.0 => Ok(r),
        other => Err(FilterError::InvalidRipple(other)),
    }
}
