use crate::dlog;
use crate::error::{WorkoutError, WorkoutResult};
use crate::training::{Running, SportsWalking, Swimming, Workout};
use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Workout codes sent by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Run,
    Walk,
    Swim,
}

impl WorkoutCode {
    pub const ALL: [Self; 3] = [Self::Run, Self::Walk, Self::Swim];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Run => "RUN",
            Self::Walk => "WLK",
            Self::Swim => "SWM",
        }
    }

    /// Number of values the package data must carry.
    pub const fn arity(self) -> usize {
        match self {
            Self::Run => 3,
            Self::Walk => 4,
            Self::Swim => 5,
        }
    }

    /// Build the workout from positional data, in constructor order.
    pub fn build(self, data: &[f64]) -> WorkoutResult<Box<dyn Workout>> {
        let code = self.as_str();
        if data.len() != self.arity() {
            return Err(WorkoutError::invalid_args(
                code,
                format!("expected {} values, got {}", self.arity(), data.len()),
            ));
        }

        let action = whole(code, "action", data[0])?;
        let (duration, weight) = (data[1], data[2]);

        Ok(match self {
            Self::Run => Box::new(Running::new(action, duration, weight)?),
            Self::Walk => Box::new(SportsWalking::new(action, duration, weight, data[3])?),
            Self::Swim => {
                let count_pool = whole(code, "pool count", data[4])?;
                Box::new(Swimming::new(action, duration, weight, data[3], count_pool)?)
            }
        })
    }
}

impl FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| WorkoutError::InvalidWorkoutCode(s.to_string()))
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read a sensor package and return the matching workout.
pub fn read_package(workout_type: &str, data: &[f64]) -> WorkoutResult<Box<dyn Workout>> {
    let code: WorkoutCode = workout_type.parse()?;
    dlog!("read_package code={code} values={}", data.len());
    code.build(data)
}

/// One (code, data) pair as it arrives from the tracker.
///
/// Data is kept as raw JSON so a bad value fails only its own package.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub code: String,
    pub data: Vec<JsonValue>,
}

impl Package {
    pub fn new(code: &str, data: &[f64]) -> Self {
        Self {
            code: code.to_string(),
            data: data.iter().map(|&v| JsonValue::from(v)).collect(),
        }
    }

    /// Numeric view of `data`.
    pub fn values(&self) -> WorkoutResult<Vec<f64>> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| {
                v.as_f64().ok_or_else(|| {
                    WorkoutError::invalid_args(
                        self.code.as_str(),
                        format!("value #{} is not a number: {v}", i + 1),
                    )
                })
            })
            .collect()
    }

    pub fn build(&self) -> WorkoutResult<Box<dyn Workout>> {
        read_package(&self.code, &self.values()?)
    }
}

/// The three packages the tracker sends in the reference run.
pub fn reference_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Load packages from a JSON file shaped like `[["RUN", [15000, 1, 75]], ...]`.
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let shown = path.display();
    let text = fs::read_to_string(path).with_context(|| format!("reading packages: {shown}"))?;
    let json: JsonValue =
        serde_json::from_str(&text).with_context(|| format!("parsing packages JSON: {shown}"))?;

    let Some(items) = json.as_array() else {
        bail!("packages file must contain a JSON array: {shown}");
    };

    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let Some([code, data]) = item.as_array().map(Vec::as_slice) else {
            bail!("package #{} must be a [code, data] pair: {item}", i + 1);
        };
        let Some(code) = code.as_str() else {
            bail!("package #{} code must be a string: {code}", i + 1);
        };
        let Some(data) = data.as_array() else {
            bail!("package #{} data must be an array: {data}", i + 1);
        };
        out.push(Package {
            code: code.to_string(),
            data: data.clone(),
        });
    }

    tracing::info!(path = %shown, packages = out.len(), "loaded packages");
    Ok(out)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(code: &str, field: &str, v: f64) -> WorkoutResult<u32> {
    if v.is_finite() && v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&v) {
        Ok(v as u32)
    } else {
        Err(WorkoutError::invalid_args(
            code,
            format!("{field} must be a whole non-negative number, got {v}"),
        ))
    }
}
