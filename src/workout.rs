//! Workout session calculations
//!
//! Derives distance, mean speed and calorie expenditure from raw sensor
//! counts for the supported workout kinds, and dispatches sensor packets
//! to the matching kind.

use tracing::debug;

use crate::error::{FitTrackError, PacketError, Result};
use crate::packet::SensorPacket;
use crate::summary::TrainingSummary;

/// Stride length in meters (running, sports walking)
const LEN_STEP_M: f64 = 0.65;
/// Stroke length in meters (swimming)
const LEN_STROKE_M: f64 = 1.38;

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;

/// Running calorie ratios
const RUN_SPEED_FACTOR: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

/// Sports walking calorie ratios
const WLK_WEIGHT_FACTOR: f64 = 0.035;
const WLK_SPEED_FACTOR: f64 = 0.029;

/// Swimming calorie ratios
const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_FACTOR: f64 = 2.0;

/// Workout kind with its kind-specific sensor payload
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutKind {
    Running,
    SportsWalking {
        /// Height in centimeters; must be positive, carried for the
        /// walking calorie profile
        height_cm: f64,
    },
    Swimming {
        /// Pool length in meters
        pool_length_m: f64,
        /// Completed pool laps
        pool_lap_count: u32,
    },
}

impl WorkoutKind {
    /// Label used in the rendered summary line
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking { .. } => "SportsWalking",
            WorkoutKind::Swimming { .. } => "Swimming",
        }
    }

    /// Distance covered by one action (stride or stroke) in meters
    fn action_len_m(&self) -> f64 {
        match self {
            WorkoutKind::Running | WorkoutKind::SportsWalking { .. } => LEN_STEP_M,
            WorkoutKind::Swimming { .. } => LEN_STROKE_M,
        }
    }
}

/// One recorded workout session
///
/// Immutable snapshot of the raw sensor reading; all derived metrics are
/// pure functions of these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSession {
    /// Number of strides or strokes
    pub action_count: u32,
    /// Duration in hours; must be positive (divided by)
    pub duration_h: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
    /// Workout kind with its payload
    pub kind: WorkoutKind,
}

impl TrainingSession {
    pub fn new(action_count: u32, duration_h: f64, weight_kg: f64, kind: WorkoutKind) -> Self {
        Self {
            action_count,
            duration_h,
            weight_kg,
            kind,
        }
    }

    /// Build a session from a raw sensor packet.
    ///
    /// Recognized codes: RUN (action, duration, weight), WLK (+ height),
    /// SWM (+ pool length, lap count). Payload length and value ranges
    /// are validated here so a malformed packet fails fast instead of
    /// producing a plausible-looking summary.
    pub fn from_packet(packet: &SensorPacket) -> Result<Self> {
        let expected = match packet.code.as_str() {
            "RUN" => 3,
            "WLK" => 4,
            "SWM" => 5,
            _ => {
                return Err(FitTrackError::UnknownWorkoutCode {
                    code: packet.code.clone(),
                })
            }
        };
        if packet.values.len() != expected {
            return Err(PacketError::PayloadLength {
                code: packet.code.clone(),
                expected,
                actual: packet.values.len(),
            }
            .into());
        }

        let action_count = count_value("action_count", packet.values[0])?;
        let duration_h = positive_value("duration_h", packet.values[1])?;
        let weight_kg = positive_value("weight_kg", packet.values[2])?;

        let kind = match packet.code.as_str() {
            "WLK" => WorkoutKind::SportsWalking {
                height_cm: positive_value("height_cm", packet.values[3])?,
            },
            "SWM" => WorkoutKind::Swimming {
                pool_length_m: positive_value("pool_length_m", packet.values[3])?,
                pool_lap_count: count_value("pool_lap_count", packet.values[4])?,
            },
            _ => WorkoutKind::Running,
        };

        Ok(Self::new(action_count, duration_h, weight_kg, kind))
    }

    /// Distance covered in kilometers
    pub fn distance_km(&self) -> f64 {
        f64::from(self.action_count) * self.kind.action_len_m() / M_IN_KM
    }

    /// Mean speed in km/h
    ///
    /// Swimming derives speed from pool geometry rather than stroke
    /// count.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self.kind {
            WorkoutKind::Swimming {
                pool_length_m,
                pool_lap_count,
            } => pool_length_m * f64::from(pool_lap_count) / M_IN_KM / self.duration_h,
            _ => self.distance_km() / self.duration_h,
        }
    }

    /// Calories burned over the session
    pub fn spent_calories(&self) -> f64 {
        match self.kind {
            WorkoutKind::Running => {
                (RUN_SPEED_FACTOR * self.mean_speed_kmh() - RUN_SPEED_SHIFT) * self.weight_kg
                    / M_IN_KM
                    * self.duration_min()
            }
            WorkoutKind::SportsWalking { .. } => {
                // The inner division is floor division, and the divisor
                // is weight, not height.
                let speed = self.mean_speed_kmh();
                (WLK_WEIGHT_FACTOR * self.weight_kg
                    + (speed.powi(2) / self.weight_kg).floor()
                        * WLK_SPEED_FACTOR
                        * self.weight_kg)
                    * self.duration_min()
            }
            WorkoutKind::Swimming { .. } => {
                (self.mean_speed_kmh() + SWM_SPEED_SHIFT) * SWM_WEIGHT_FACTOR * self.weight_kg
            }
        }
    }

    /// Assemble the immutable summary record for this session
    pub fn summary(&self) -> TrainingSummary {
        let summary = TrainingSummary {
            workout_label: self.kind.label().to_string(),
            duration_h: self.duration_h,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        };
        debug!(
            workout = summary.workout_label.as_str(),
            distance_km = summary.distance_km,
            mean_speed_kmh = summary.mean_speed_kmh,
            calories = summary.calories,
            "computed workout metrics"
        );
        summary
    }

    fn duration_min(&self) -> f64 {
        self.duration_h * MIN_IN_H
    }
}

fn positive_value(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PacketError::InvalidValue {
            field: field.to_string(),
            reason: format!("must be a positive number, got {}", value),
        }
        .into())
    }
}

fn count_value(field: &str, value: f64) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(PacketError::InvalidValue {
            field: field.to_string(),
            reason: format!("must be a non-negative integer, got {}", value),
        }
        .into())
    }
}
