// Library interface for FitTrack modules
// This allows integration tests to access the core functionality

pub mod config;
pub mod error;
pub mod logging;
pub mod packet;
pub mod summary;
pub mod workout;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::{FitTrackError, PacketError, Result};
pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
pub use packet::{load_packets, reference_packets, SensorPacket};
pub use summary::TrainingSummary;
pub use workout::{TrainingSession, WorkoutKind};
