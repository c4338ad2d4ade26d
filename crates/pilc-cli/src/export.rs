//! JSON and CSV output for designs and response curves.

use pilc_core::{Component, ComponentSequence, ESeries, FilterSpec, MatchResult, ResponseCurve, match_standard};
use serde::Serialize;

use crate::units::format_g;

/// Filter identification shared by every JSON document.
#[derive(Debug, Serialize)]
struct FilterInfo {
    filter_type: &'static str,
    cutoff_hz: f64,
    order: usize,
}

impl From<&FilterSpec> for FilterInfo {
    fn from(spec: &FilterSpec) -> Self {
        Self {
            filter_type: spec.family.name(),
            cutoff_hz: spec.cutoff_hz,
            order: spec.order,
        }
    }
}

#[derive(Debug, Serialize)]
struct ResponsePoint {
    frequency_hz: f64,
    magnitude_db: f64,
}

#[derive(Debug, Serialize)]
struct ResponseDocument {
    #[serde(flatten)]
    info: FilterInfo,
    data: Vec<ResponsePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ripple_db: Option<f64>,
}

#[derive(Debug, Serialize)]
struct PartPair {
    first: f64,
    second: f64,
    combined: f64,
    error_percent: f64,
}

#[derive(Debug, Serialize)]
struct StandardPart {
    series: &'static str,
    value: f64,
    error_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    combination: Option<PartPair>,
}

impl From<MatchResult> for StandardPart {
    fn from(m: MatchResult) -> Self {
        Self {
            series: m.series.name(),
            value: m.matched_value(),
            error_percent: round2(m.error_percent),
            combination: m.parallel.map(|p| PartPair {
                first: p.first,
                second: p.second,
                combined: p.combined(),
                error_percent: round2(p.error_percent),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct ComponentEntry {
    name: String,
    kind: &'static str,
    position: usize,
    value: f64,
    unit: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    standard: Option<StandardPart>,
}

#[derive(Debug, Serialize)]
struct DesignDocument {
    #[serde(flatten)]
    info: FilterInfo,
    impedance_ohm: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    requested_order: Option<usize>,
    components: Vec<ComponentEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ripple_db: Option<f64>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reference designator such as `C1` or `L2`.
pub fn designator(component: &Component) -> String {
    format!("{}{}", component.kind.prefix(), component.index)
}

fn kind_name(component: &Component) -> &'static str {
    match component.kind {
        pilc_core::ComponentKind::Capacitor => "capacitor",
        pilc_core::ComponentKind::Inductor => "inductor",
    }
}

/// Response curve as pretty-printed JSON, dB rounded to two decimals.
pub fn response_json(spec: &FilterSpec, curve: &ResponseCurve) -> serde_json::Result<String> {
    let doc = ResponseDocument {
        info: spec.into(),
        data: curve
            .points()
            .map(|(frequency_hz, db)| ResponsePoint {
                frequency_hz,
                magnitude_db: round2(db),
            })
            .collect(),
        ripple_db: spec.effective_ripple(),
    };
    serde_json::to_string_pretty(&doc)
}

/// Response curve as `frequency_hz,magnitude_db` CSV.
pub fn response_csv(curve: &ResponseCurve) -> String {
    let mut out = String::from("frequency_hz,magnitude_db");
    for (f, db) in curve.points() {
        out.push_str(&format!("\n{},{db:.2}", format_g(f, 6)));
    }
    out
}

/// Synthesized ladder as pretty-printed JSON, optionally with standard parts.
pub fn design_json(ladder: &ComponentSequence, series: Option<ESeries>) -> anyhow::Result<String> {
    let spec = ladder.spec();
    let components = ladder
        .components()
        .iter()
        .map(|c| {
            let standard = series
                .map(|s| match_standard(c.value, s).map(StandardPart::from))
                .transpose()?;
            Ok(ComponentEntry {
                name: designator(c),
                kind: kind_name(c),
                position: c.position,
                value: c.value,
                unit: c.kind.unit(),
                standard,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let doc = DesignDocument {
        info: spec.into(),
        impedance_ohm: spec.impedance_ohm,
        requested_order: ladder.adjustment().map(|a| a.requested),
        components,
        ripple_db: spec.effective_ripple(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Synthesized ladder as `component,kind,value,unit` CSV.
pub fn design_csv(ladder: &ComponentSequence) -> String {
    let mut out = String::from("component,kind,value,unit");
    for c in ladder.components() {
        out.push_str(&format!(
            "\n{},{},{},{}",
            designator(c),
            kind_name(c),
            format_g(c.value, 6),
            c.kind.unit()
        ));
    }
    out
}
