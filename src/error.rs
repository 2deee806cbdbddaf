//! Unified error hierarchy for FitTrack
//!
//! Provides structured error information for packet decoding, workout
//! dispatch, and configuration handling.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all FitTrack operations
#[derive(Debug, Error)]
pub enum FitTrackError {
    /// Workout code not recognized by the dispatcher
    #[error("unknown workout code: {code}")]
    UnknownWorkoutCode { code: String },

    /// Sensor packet errors
    #[error("packet error: {0}")]
    Packet(#[from] PacketError),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Sensor packet specific errors
#[derive(Debug, Error)]
pub enum PacketError {
    /// Batch file could not be decoded
    #[error("cannot decode packet batch {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    /// Payload has the wrong number of values for the workout code
    #[error("payload for {code} must have {expected} values, got {actual}")]
    PayloadLength {
        code: String,
        expected: usize,
        actual: usize,
    },

    /// Payload value outside the accepted range
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Result type alias for FitTrack operations
pub type Result<T> = std::result::Result<T, FitTrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_display() {
        let err = FitTrackError::UnknownWorkoutCode {
            code: "XYZ".to_string(),
        };
        assert_eq!(err.to_string(), "unknown workout code: XYZ");
    }

    #[test]
    fn test_packet_error_display() {
        let err = FitTrackError::from(PacketError::PayloadLength {
            code: "RUN".to_string(),
            expected: 3,
            actual: 2,
        });
        assert_eq!(
            err.to_string(),
            "packet error: payload for RUN must have 3 values, got 2"
        );
    }

    #[test]
    fn test_decode_error_names_path() {
        let err = PacketError::Decode {
            path: PathBuf::from("batch.json"),
            reason: "expected value".to_string(),
        };
        assert!(err.to_string().contains("batch.json"));
    }
}
