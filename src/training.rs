//! Workout formulas.
//!
//! Every workout kind shares a [`Training`] record (action count, duration,
//! weight) and the distance and speed computations built on it. Calorie
//! formulas are per kind and must be supplied by each [`Workout`] impl.

use crate::error::{WorkoutError, WorkoutResult};
use crate::types::InfoMessage;
use std::fmt;

/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// A workout kind that can summarise itself.
///
/// `distance` and `mean_speed` have shared defaults; `spent_calories` has
/// none and every kind writes its own.
pub trait Workout: fmt::Debug {
    /// Name shown in the summary line.
    fn kind(&self) -> &'static str;

    /// Shared action/duration/weight record.
    fn record(&self) -> &Training;

    /// Distance covered by one action, in metres.
    fn step_length(&self) -> f64 {
        Training::LEN_STEP
    }

    /// Distance in kilometres.
    fn distance(&self) -> f64 {
        f64::from(self.record().action) * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h. Duration is checked to be positive at construction.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.record().duration
    }

    fn spent_calories(&self) -> WorkoutResult<f64>;

    fn show_training_info(&self) -> WorkoutResult<InfoMessage> {
        Ok(InfoMessage {
            training_type: self.kind(),
            duration: self.record().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories()?,
        })
    }
}

/// Base workout record. Has no calorie formula of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Training {
    action: u32,
    duration: f64,
    weight: f64,
}

impl Training {
    pub const LEN_STEP: f64 = 0.65;

    pub fn new(action: u32, duration: f64, weight: f64) -> WorkoutResult<Self> {
        Self::checked("Training", action, duration, weight)
    }

    fn checked(code: &str, action: u32, duration: f64, weight: f64) -> WorkoutResult<Self> {
        ensure_positive(code, "duration", duration)?;
        ensure_non_negative(code, "weight", weight)?;
        Ok(Self {
            action,
            duration,
            weight,
        })
    }

    pub const fn action(&self) -> u32 {
        self.action
    }

    /// Hours.
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Kilograms.
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    fn duration_minutes(&self) -> f64 {
        self.duration * MIN_IN_H
    }
}

impl Workout for Training {
    fn kind(&self) -> &'static str {
        "Training"
    }

    fn record(&self) -> &Training {
        self
    }

    fn spent_calories(&self) -> WorkoutResult<f64> {
        Err(WorkoutError::UnimplementedFormula(self.kind()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    base: Training,
}

impl Running {
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: u32, duration: f64, weight: f64) -> WorkoutResult<Self> {
        Ok(Self {
            base: Training::checked("RUN", action, duration, weight)?,
        })
    }
}

impl Workout for Running {
    fn kind(&self) -> &'static str {
        "Running"
    }

    fn record(&self) -> &Training {
        &self.base
    }

    fn spent_calories(&self) -> WorkoutResult<f64> {
        let speed_term = Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed()
            - Self::CALORIES_MEAN_SPEED_SHIFT;
        Ok(speed_term * self.base.weight / M_IN_KM * self.base.duration_minutes())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    base: Training,
    /// Centimetres.
    height: f64,
}

impl SportsWalking {
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> WorkoutResult<Self> {
        let base = Training::checked("WLK", action, duration, weight)?;
        ensure_positive("WLK", "height", height)?;
        Ok(Self { base, height })
    }

    pub const fn height(&self) -> f64 {
        self.height
    }
}

impl Workout for SportsWalking {
    fn kind(&self) -> &'static str {
        "SportsWalking"
    }

    fn record(&self) -> &Training {
        &self.base
    }

    fn spent_calories(&self) -> WorkoutResult<f64> {
        let speed = self.mean_speed();
        let weight = self.base.weight;
        // Floor division: the fractional part of speed^2 / height is dropped.
        let ratio = (speed * speed).div_euclid(self.height);
        let speed_term = ratio * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight;
        let weight_term = Self::CALORIES_WEIGHT_MULTIPLIER * weight;
        Ok((speed_term + weight_term) * self.base.duration_minutes())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    base: Training,
    /// Metres.
    length_pool: f64,
    count_pool: u32,
}

impl Swimming {
    pub const LEN_STEP: f64 = 1.38;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> WorkoutResult<Self> {
        let base = Training::checked("SWM", action, duration, weight)?;
        ensure_non_negative("SWM", "pool length", length_pool)?;
        Ok(Self {
            base,
            length_pool,
            count_pool,
        })
    }

    pub const fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub const fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Workout for Swimming {
    fn kind(&self) -> &'static str {
        "Swimming"
    }

    fn record(&self) -> &Training {
        &self.base
    }

    fn step_length(&self) -> f64 {
        Self::LEN_STEP
    }

    /// Speed from the pool laps, not from the stroke count.
    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.base.duration
    }

    fn spent_calories(&self) -> WorkoutResult<f64> {
        Ok((self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight)
    }
}

fn ensure_positive(code: &str, field: &str, v: f64) -> WorkoutResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(WorkoutError::invalid_args(
            code,
            format!("{field} must be a positive number, got {v}"),
        ))
    }
}

fn ensure_non_negative(code: &str, field: &str, v: f64) -> WorkoutResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(WorkoutError::invalid_args(
            code,
            format!("{field} must be a non-negative number, got {v}"),
        ))
    }
}
