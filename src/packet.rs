//! Sensor packet model and batch loading
//!
//! A packet is one (workout code, ordered numeric payload) pair as
//! delivered by the sensor unit. Batches are JSON arrays of packets.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{PacketError, Result};

/// One raw reading from the sensor unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPacket {
    /// Three-letter workout code (RUN, WLK, SWM)
    pub code: String,

    /// Ordered raw values; meaning depends on the workout code
    pub values: Vec<f64>,
}

impl SensorPacket {
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            values,
        }
    }
}

/// Load a packet batch from a JSON file
pub fn load_packets(path: &Path) -> Result<Vec<SensorPacket>> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| {
        PacketError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// The fixed reference batch shipped with the sensor unit
pub fn reference_packets() -> Vec<SensorPacket> {
    vec![
        SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPacket::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitTrackError;
    use std::io::Write;

    #[test]
    fn test_decode_batch() {
        let raw = r#"[
            {"code": "RUN", "values": [15000, 1, 75]},
            {"code": "SWM", "values": [720, 1, 80, 25, 40]}
        ]"#;
        let packets: Vec<SensorPacket> = serde_json::from_str(raw).unwrap();
        assert_eq!(packets.len(), 2);
        assert_eq!(packets[0], SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]));
    }

    #[test]
    fn test_load_packets_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = load_packets(file.path()).unwrap_err();
        assert!(matches!(
            err,
            FitTrackError::Packet(PacketError::Decode { .. })
        ));
    }

    #[test]
    fn test_load_packets_missing_file() {
        let err = load_packets(Path::new("/nonexistent/batch.json")).unwrap_err();
        assert!(matches!(err, FitTrackError::Io(_)));
    }

    #[test]
    fn test_reference_batch_order() {
        let codes: Vec<_> = reference_packets()
            .iter()
            .map(|p| p.code.clone())
            .collect();
        assert_eq!(codes, vec!["SWM", "RUN", "WLK"]);
    }
}
