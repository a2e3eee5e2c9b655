use crate::error::{WorkoutError, WorkoutResult};
use crate::packages::Package;
use crate::training::Workout;
use crate::types::OutputFormat;
use anyhow::Result;
use serde_json::json;
use std::io::Write;

/// Render the summary line for one workout.
///
/// `None` stands for a package that never produced a workout.
pub fn report(training: Option<&dyn Workout>) -> WorkoutResult<String> {
    let training = training.ok_or(WorkoutError::InvalidActivity)?;
    Ok(training.show_training_info()?.get_message())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub ok: usize,
    pub failed: usize,
}

/// Process packages in order, one output line each.
///
/// A failing package gets an error line and the run moves on; only write
/// errors on `out` abort.
pub fn run_packages<W: Write>(
    packages: &[Package],
    format: OutputFormat,
    out: &mut W,
) -> Result<RunStats> {
    let mut stats = RunStats::default();

    for (i, pkg) in packages.iter().enumerate() {
        let line = match pkg.build().and_then(|w| render(Some(&*w), format)) {
            Ok(line) => {
                stats.ok += 1;
                line
            }
            Err(e) => {
                tracing::warn!(package = i + 1, code = %pkg.code, err = %e, "skipping package");
                stats.failed += 1;
                render_error(&e, pkg, format)
            }
        };
        writeln!(out, "{line}")?;
    }

    tracing::debug!(ok = stats.ok, failed = stats.failed, "run done");
    Ok(stats)
}

fn render(training: Option<&dyn Workout>, format: OutputFormat) -> WorkoutResult<String> {
    match format {
        OutputFormat::Text => report(training),
        OutputFormat::Json => {
            let training = training.ok_or(WorkoutError::InvalidActivity)?;
            Ok(training.show_training_info()?.to_json().to_string())
        }
    }
}

fn render_error(e: &WorkoutError, pkg: &Package, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Error: {e}"),
        OutputFormat::Json => json!({ "code": pkg.code, "error": e.to_string() }).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packages::read_package;
    use crate::training::Training;

    #[test]
    fn test_report_running() {
        let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(
            report(Some(&*run)).unwrap(),
            "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories: 699.750."
        );
    }

    #[test]
    fn test_report_none() {
        assert_eq!(report(None), Err(WorkoutError::InvalidActivity));
    }

    #[test]
    fn test_report_base_training() {
        let t = Training::new(100, 1.0, 60.0).unwrap();
        assert_eq!(
            report(Some(&t)),
            Err(WorkoutError::UnimplementedFormula("Training"))
        );
    }

    #[test]
    fn test_run_continues_after_failure() {
        let packages = vec![
            Package::new("XYZ", &[1.0, 1.0, 1.0]),
            Package::new("RUN", &[15000.0, 1.0]),
            Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        ];
        let mut out = Vec::new();
        let stats = run_packages(&packages, OutputFormat::Text, &mut out).unwrap();
        assert_eq!(stats, RunStats { ok: 1, failed: 2 });

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Error: Invalid workout code"));
        assert!(lines[1].starts_with("Error: Invalid arguments for RUN"));
        assert!(lines[2].starts_with("Workout type: Swimming;"));
    }

    #[test]
    fn test_run_json_lines() {
        let packages = vec![
            Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
            Package::new("XYZ", &[1.0]),
        ];
        let mut out = Vec::new();
        run_packages(&packages, OutputFormat::Json, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        let first: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert_eq!(first["training_type"], "SportsWalking");
        assert_eq!(first["calories"].as_f64(), Some(157.5));
        let second: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert_eq!(second["code"], "XYZ");
        assert!(second["error"].as_str().unwrap().contains("XYZ"));
    }

    #[test]
    fn test_run_json_keeps_build_error() {
        let packages = vec![Package::new("RUN", &[15000.0, 0.0, 75.0])];
        let mut out = Vec::new();
        let stats = run_packages(&packages, OutputFormat::Json, &mut out).unwrap();
        assert_eq!(stats, RunStats { ok: 0, failed: 1 });

        let text = String::from_utf8(out).unwrap();
        let line: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        let err = line["error"].as_str().unwrap();
        assert!(err.starts_with("Invalid arguments for RUN"), "{err}");
        assert!(err.contains("duration must be a positive number"), "{err}");
        assert!(!err.contains("Invalid activity"), "{err}");
    }
}
