//! Console report sections.
//!
//! Each view borrows computed results and renders one section through
//! `Display`; nothing here touches the search itself.

use std::fmt;

use crate::compute::ObjectiveField;
use crate::schema::{Cell, Coverage, FrontPoint, NeighborTopology, SummaryStats, TrialSummary};

fn banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "========== {} ==========", title)
}

/// The whole field, one grid row per line.
pub struct FieldView<'a> {
    pub field: &'a ObjectiveField,
    pub decimals: usize,
}

impl fmt::Display for FieldView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "Objective field")?;
        let p = self.decimals;
        let width = p + 4;
        for row in 0..self.field.rows() {
            for col in 0..self.field.cols() {
                let o = self.field.objectives(Cell::new(row, col));
                write!(f, "[{:w$.p$}, {:w$.p$}]  ", o.a, o.b, w = width, p = p)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A titled list of front points.
pub struct FrontView<'a> {
    pub title: &'a str,
    pub points: &'a [FrontPoint],
    pub decimals: usize,
}

impl fmt::Display for FrontView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, self.title)?;
        let p = self.decimals;
        let width = p + 5;
        for point in self.points {
            writeln!(
                f,
                "{} -> a={:w$.p$}, b={:w$.p$}",
                point.cell,
                point.objectives.a,
                point.objectives.b,
                w = width,
                p = p
            )?;
        }
        Ok(())
    }
}

/// Single-run coverage of one topology.
pub struct CoverageView {
    pub topology: NeighborTopology,
    pub archive_size: usize,
    pub coverage: Coverage,
}

impl fmt::Display for CoverageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.topology.label();
        writeln!(f, "{} archive size = {}", label, self.archive_size)?;
        writeln!(
            f,
            "{} reference front hits = {} / {}",
            label, self.coverage.hit, self.coverage.total
        )?;
        writeln!(
            f,
            "{} coverage = {:.4} ({:.2}%)",
            label,
            self.coverage.rate,
            self.coverage.rate * 100.0
        )
    }
}

/// Aggregate statistics over many runs of one topology.
pub struct SummaryView<'a> {
    pub summary: &'a TrialSummary,
}

impl fmt::Display for SummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.summary.topology.label();
        banner(f, &format!("{} results over {} runs", label, self.summary.runs))?;

        let SummaryStats { mean, std_dev, .. } = self.summary.coverage;
        writeln!(f, "mean coverage: {:.4} ({:.2}%)", mean, mean * 100.0)?;
        writeln!(f, "coverage std dev: {:.4} ({:.2}%)", std_dev, std_dev * 100.0)?;

        if let Some(steps) = &self.summary.stagnation {
            writeln!(f, "min stagnation steps: {}", steps.min)?;
            writeln!(f, "max stagnation steps: {}", steps.max)?;
            writeln!(f, "mean stagnation steps: {:.2}", steps.mean)?;
            writeln!(f, "stagnation steps std dev: {:.2}", steps.std_dev)?;
        }
        Ok(())
    }
}
