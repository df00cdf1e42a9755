//! Side-by-side comparison of both tangent approximations

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithms::{cfrac_tan, taylor_tan};
use crate::core::{Angle, DepthRange};

/// One depth of the comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub depth: u32,
    /// `tan` from the standard library
    pub reference: f64,
    pub taylor: f64,
    pub taylor_error: f64,
    pub cfrac: f64,
    pub cfrac_error: f64,
}

impl ReportRow {
    pub fn compute(alpha: f64, depth: u32) -> Self {
        let reference = alpha.tan();
        let taylor = taylor_tan(alpha, depth);
        let cfrac = cfrac_tan(alpha, depth);
        Self {
            depth,
            reference,
            taylor,
            taylor_error: (reference - taylor).abs(),
            cfrac,
            cfrac_error: (reference - cfrac).abs(),
        }
    }
}

/// Rows for every depth in `[from, to]`, ascending.
///
/// `from` must be at least 1 and not larger than `to`.
pub fn comparison_report(alpha: f64, from: u32, to: u32) -> Vec<ReportRow> {
    (from..=to).map(|depth| ReportRow::compute(alpha, depth)).collect()
}

/// Comparison over a validated angle and depth range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub angle: f64,
    pub rows: Vec<ReportRow>,
}

impl ComparisonReport {
    pub fn generate(alpha: Angle, depths: DepthRange) -> Self {
        debug!(
            angle = alpha.radians(),
            from = depths.from(),
            to = depths.to(),
            "generating comparison report"
        );
        Self {
            angle: alpha.radians(),
            rows: depths
                .iter()
                .map(|depth| ReportRow::compute(alpha.radians(), depth))
                .collect(),
        }
    }
}
