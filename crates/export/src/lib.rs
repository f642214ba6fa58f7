//! Export helpers for maneuver reports.

pub mod report {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Propellant drawn (or owed) for one kind.
    #[derive(Debug, Clone, Serialize)]
    pub struct PropellantLine {
        pub kind: String,
        pub required_units: f64,
        pub drawn_units: f64,
        pub missing_units: f64,
    }

    /// Orbit after the burn.
    #[derive(Debug, Clone, Serialize)]
    pub struct OrbitLine {
        pub body: String,
        pub semi_major_axis_m: f64,
        pub position_m: [f64; 3],
        pub velocity_m_s: [f64; 3],
        pub epoch_s: f64,
    }

    /// Result of one maneuver attempt, applied or rejected.
    #[derive(Debug, Clone, Serialize)]
    pub struct ManeuverReport {
        pub vessel: String,
        pub requested_sma_m: f64,
        pub applied: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub rejection: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub delta_v_m_s: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub fuel_mass_kg: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub engine: Option<String>,
        pub propellants: Vec<PropellantLine>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub orbit: Option<OrbitLine>,
        pub notices: Vec<String>,
    }

    /// Serialize the report as pretty JSON followed by a newline.
    pub fn write_report(writer: &mut dyn Write, report: &ManeuverReport) -> io::Result<()> {
        to_writer_pretty(&mut *writer, report).map_err(io::Error::other)?;
        writeln!(writer)?;
        writer.flush()
    }

    /// Write the report to `path` (`-` for stdout).
    pub fn write_report_to_path(path: &Path, report: &ManeuverReport) -> io::Result<()> {
        let mut writer = writer_for_path(path)?;
        write_report(writer.as_mut(), report)
    }
}
