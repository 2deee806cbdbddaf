//! Workout summary record and rendering

use serde::Serialize;
use std::fmt;

/// Immutable summary of one computed workout
///
/// Built once from a session snapshot; rendering never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingSummary {
    pub workout_label: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl TrainingSummary {
    /// Render the fixed report line, every numeric field to exactly
    /// three decimals
    pub fn render(&self) -> String {
        format!(
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.workout_label,
            self.duration_h,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories
        )
    }
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_template() {
        let summary = TrainingSummary {
            workout_label: "Running".to_string(),
            duration_h: 1.0,
            distance_km: 9.75,
            mean_speed_kmh: 9.75,
            calories: 699.75,
        };
        assert_eq!(
            summary.render(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; \
             Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; \
             Потрачено ккал: 699.750."
        );
    }

    #[test]
    fn test_render_rounds_to_three_decimals() {
        let summary = TrainingSummary {
            workout_label: "Swimming".to_string(),
            duration_h: 1.0,
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories: 336.0,
        };
        let line = summary.render();
        assert!(line.contains("Дистанция: 0.994 км"));
        assert!(line.contains("Потрачено ккал: 336.000."));
    }

    #[test]
    fn test_display_matches_render() {
        let summary = TrainingSummary {
            workout_label: "SportsWalking".to_string(),
            duration_h: 1.0,
            distance_km: 5.85,
            mean_speed_kmh: 5.85,
            calories: 157.5,
        };
        assert_eq!(summary.to_string(), summary.render());
    }
}
