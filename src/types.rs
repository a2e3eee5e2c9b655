use crate::utils::round3;
use clap::ValueEnum;
use serde_json::{Value as JsonValue, json};
use std::fmt;

/// Read-only summary of one finished workout.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    pub training_type: &'static str,
    /// Hours.
    pub duration: f64,
    /// Kilometres.
    pub distance: f64,
    /// km/h.
    pub speed: f64,
    /// kcal.
    pub calories: f64,
}

impl InfoMessage {
    /// The one-line text summary printed for a workout. Same text as `Display`.
    pub fn get_message(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> JsonValue {
        json!({
            "training_type": self.training_type,
            "duration": round3(self.duration),
            "distance": round3(self.distance),
            "speed": round3(self.speed),
            "calories": round3(self.calories),
        })
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

/// How the driver renders each package result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InfoMessage {
        InfoMessage {
            training_type: "Swimming",
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        }
    }

    #[test]
    fn test_message_uses_three_decimals() {
        assert_eq!(
            sample().get_message(),
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories: 336.000."
        );
        assert_eq!(sample().get_message(), sample().to_string());
    }

    #[test]
    fn test_json_is_rounded() {
        let v = sample().to_json();
        assert_eq!(v["training_type"], "Swimming");
        assert_eq!(v["distance"].as_f64(), Some(0.994));
        assert_eq!(v["calories"].as_f64(), Some(336.0));
    }
}
