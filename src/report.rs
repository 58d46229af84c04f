use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::bounds::BoundingBox;
use crate::obj::ObjStats;
use crate::Result;

/// Which lines of the report are written for each model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStyle {
    /// Model header, bounds, face breakdown and vertex counts.
    #[default]
    Full,
    /// The three bounding box lines only.
    Bounds,
}

/// Formats bounds as `x = <low> - <high>` lines with six decimals.
#[derive(Debug, Clone, Copy)]
pub struct BoundsDisplay<'a>(pub &'a BoundingBox);

impl fmt::Display for BoundsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, low, high) in self.0.axes() {
            writeln!(f, "{label} = {low:.6} - {high:.6}")?;
        }
        Ok(())
    }
}

/// Everything after the model header of a full report.
#[derive(Debug, Clone, Copy)]
pub struct StatsDisplay<'a>(pub &'a ObjStats);

impl fmt::Display for StatsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.0;

        write!(f, "{}", BoundsDisplay(&stats.bounds))?;
        writeln!(f)?;
        writeln!(
            f,
            "{} faces of up to {} vertices",
            stats.faces, stats.biggest_face
        )?;
        writeln!(f, "- {} triangular faces", stats.triangular_faces)?;
        writeln!(f, "- {} quad faces", stats.quad_faces)?;
        writeln!(f, "- {} other (general polygon) faces", stats.polygon_faces)?;
        writeln!(f)?;
        writeln!(f, "{} vertexes", stats.vertices)?;
        writeln!(f, "{} texture vertexes", stats.texture_vertices)?;
        writeln!(f, "{} parameter vertexes", stats.parameter_vertices)?;
        writeln!(f, "{} normals", stats.normals)
    }
}

/// Scans `path` and writes its report to `out`.
///
/// In the full style the `--` / path header is written before the file is
/// opened, so a failing model still shows which path it was.
pub fn write_report(out: &mut impl Write, path: &Path, style: ReportStyle) -> Result<ObjStats> {
    if style == ReportStyle::Full {
        writeln!(out, "--")?;
        writeln!(out, "{}", path.display())?;
    }

    let stats = ObjStats::from_path(path)?;

    match style {
        ReportStyle::Full => write!(out, "{}", StatsDisplay(&stats))?,
        ReportStyle::Bounds => write!(out, "{}", BoundsDisplay(&stats.bounds))?,
    }
    Ok(stats)
}

/// Writes one report per path, in order. Stops at the first failing model.
pub fn write_reports<P: AsRef<Path>>(
    out: &mut impl Write,
    paths: &[P],
    style: ReportStyle,
) -> Result<Vec<ObjStats>> {
    paths
        .iter()
        .map(|path| write_report(&mut *out, path.as_ref(), style))
        .collect()
}
