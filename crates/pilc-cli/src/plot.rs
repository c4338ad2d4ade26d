//! ASCII magnitude-response plot.

use pilc_core::ResponseCurve;

use crate::units::format_frequency_compact;

/// Lowest level the vertical axis is allowed to reach, in dB.
const FLOOR_DB: f64 = -60.0;
/// Headroom below the deepest sample, in dB.
const MARGIN_DB: f64 = 5.0;
/// Level of the dotted reference line.
const REFERENCE_DB: f64 = -3.0;
/// Columns taken by the dB labels and axis.
const LABEL_COLS: usize = 8;
/// Relative distance from cutoff beyond which the -3 dB crossing is marked.
const MARKER_THRESHOLD: f64 = 0.01;

/// Maps sample coordinates onto grid cells.
struct Axes {
    log_min: f64,
    log_range: f64,
    db_min: f64,
    db_range: f64,
    cols: usize,
    rows: usize,
}

impl Axes {
    fn col(&self, freq_hz: f64) -> usize {
        let c = ((freq_hz.log10() - self.log_min) / self.log_range * (self.cols - 1) as f64) as i64;
        c.clamp(0, self.cols as i64 - 1) as usize
    }

    fn row(&self, db: f64) -> usize {
        let r = ((0.0 - db) / self.db_range * (self.rows - 1) as f64) as i64;
        r.clamp(0, self.rows as i64 - 1) as usize
    }
}

/// Render `curve` as a filled plot `width` by `height` characters.
///
/// The vertical axis runs from 0 dB down to the deeper of -60 dB and 5 dB
/// below the curve's minimum. The frequency axis is logarithmic with ticks at
/// 1, 2 and 5 times each decade of the cutoff. When the interpolated -3 dB
/// point sits more than 1% from `cutoff_hz` it is marked on the curve and
/// labeled below the axis.
pub fn render(curve: &ResponseCurve, cutoff_hz: f64, width: usize, height: usize) -> String {
    let width = width.max(40);
    let height = height.max(6);
    let cols = width - LABEL_COLS;
    let rows = height - 2;

    let db_min = FLOOR_DB.max(curve.min_db().unwrap_or(0.0) - MARGIN_DB);
    let db_range = 0.0 - db_min;
    let freq_min = curve.frequencies().first().copied().unwrap_or(cutoff_hz);
    let freq_max = curve.frequencies().last().copied().unwrap_or(cutoff_hz);
    let log_range = freq_max.log10() - freq_min.log10();

    let axes = Axes {
        log_min: freq_min.log10(),
        log_range: if log_range > 0.0 { log_range } else { 1.0 },
        db_min,
        db_range: if db_range > 0.0 { db_range } else { 1.0 },
        cols,
        rows,
    };

    let mut grid = vec![vec![' '; cols]; rows];

    let ref_row = axes.row(REFERENCE_DB);
    for (c, cell) in grid[ref_row].iter_mut().enumerate() {
        if c % 2 == 0 {
            *cell = '·';
        }
    }

    for (f, db) in curve.points().filter(|&(f, _)| f > 0.0) {
        let c = axes.col(f);
        for row in grid.iter_mut().skip(axes.row(db)) {
            row[c] = '█';
        }
    }

    let marker = curve
        .minus_3db_frequency()
        .filter(|&f| f > 0.0 && (f - cutoff_hz).abs() / cutoff_hz > MARKER_THRESHOLD)
        .map(|f| (f, axes.col(f)));
    if let Some((_, c)) = marker {
        grid[ref_row][c] = '●';
    }

    let mut lines = vec!["Frequency Response (dB)".to_string(), String::new()];

    for (r, cells) in grid.iter().enumerate() {
        let label = if r == ref_row {
            "   -3 │".to_string()
        } else if r == 0 {
            format!("{:5.0} │", 0.0)
        } else if r == rows - 1 {
            format!("{:5.0} │", axes.db_min)
        } else if r == rows / 2 && r.abs_diff(ref_row) > 1 {
            format!("{:5.0} │", axes.db_min / 2.0)
        } else {
            "      │".to_string()
        };
        lines.push(format!("{label}{}", cells.iter().collect::<String>()));
    }

    let mut x_axis = vec!['─'; cols];
    for decade in [0.1, 1.0, 10.0] {
        for mult in [1.0, 2.0, 5.0] {
            let tick = cutoff_hz * mult * decade;
            if (freq_min..=freq_max).contains(&tick) {
                x_axis[axes.col(tick)] = '┼';
            }
        }
    }
    if let Some((_, c)) = marker {
        x_axis[c] = '▲';
    }
    lines.push(format!("      +{}", x_axis.iter().collect::<String>()));

    let low = format_frequency_compact(freq_min);
    let high = format_frequency_compact(freq_max);
    let fc = format!("{}(fc)", format_frequency_compact(cutoff_hz));
    let fc_col = ((cutoff_hz.log10() - axes.log_min) / axes.log_range * cols as f64) as usize;
    let (low_w, high_w, fc_w) = (low.chars().count(), high.chars().count(), fc.chars().count());
    lines.push(format!(
        "       {low}{}{fc}{}{high}",
        " ".repeat(fc_col.saturating_sub(low_w + fc_w / 2)),
        " ".repeat(cols.saturating_sub(fc_col + fc_w / 2 + high_w)),
    ));

    if let Some((f, c)) = marker {
        lines.push(format!(
            "       {}▲{}(-3dB)",
            " ".repeat(c),
            format_frequency_compact(f)
        ));
    }

    lines.join("\n")
}
