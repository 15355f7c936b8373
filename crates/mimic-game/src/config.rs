use crate::GameError;
use mimic_pose::ANGLE_DECAY;
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

/// Which overlays `analyze_pose` fills in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    pub show_skeleton: bool,
    pub show_points: bool,
    pub show_bounding_box: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            show_skeleton: true,
            show_points: true,
            show_bounding_box: false,
        }
    }
}

/// Configuration for a pose-matching session.
///
/// Missing fields in a JSON file fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    min_pose_confidence: f32,
    min_part_confidence: f32,
    session_seconds: u64,
    frame_rate: u32,
    angle_decay: f32,
    starting_total: f32,
    output: OutputOptions,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_pose_confidence: 0.1,
            min_part_confidence: 0.5,
            session_seconds: 60,
            frame_rate: 30,
            angle_decay: ANGLE_DECAY,
            starting_total: 0.0,
            output: OutputOptions::default(),
        }
    }
}

impl MatchConfig {
    /// Load and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| GameError::Io(format!("Failed to read config: {}", e)))?;
        Self::from_json_str(&json)
    }

    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        let config: MatchConfig = serde_json::from_str(json)
            .map_err(|e| GameError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the game loop cannot run with.
    ///
    /// Confidence thresholds above 1.0 are allowed; they simply filter everything out.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.min_pose_confidence.is_nan() || self.min_pose_confidence < 0.0 {
            return Err(GameError::Config(format!(
                "min_pose_confidence must be >= 0, got {}",
                self.min_pose_confidence
            )));
        }
        if self.min_part_confidence.is_nan() || self.min_part_confidence < 0.0 {
            return Err(GameError::Config(format!(
                "min_part_confidence must be >= 0, got {}",
                self.min_part_confidence
            )));
        }
        if self.session_seconds == 0 {
            return Err(GameError::Config("session_seconds must be > 0".to_string()));
        }
        if self.frame_rate == 0 {
            return Err(GameError::Config("frame_rate must be > 0".to_string()));
        }
        if self.angle_decay.is_nan() || self.angle_decay <= 0.0 {
            return Err(GameError::Config(format!(
                "angle_decay must be > 0, got {}",
                self.angle_decay
            )));
        }
        Ok(())
    }

    /// Minimum overall pose score for a pose to be analyzed at all.
    pub fn with_min_pose_confidence(mut self, min_pose_confidence: f32) -> Self {
        self.min_pose_confidence = min_pose_confidence;
        self
    }

    /// Minimum keypoint score for skeleton edges and joint angles.
    pub fn with_min_part_confidence(mut self, min_part_confidence: f32) -> Self {
        self.min_part_confidence = min_part_confidence;
        self
    }

    /// Set the countdown length in seconds.
    pub fn with_session_seconds(mut self, session_seconds: u64) -> Self {
        self.session_seconds = session_seconds;
        self
    }

    /// Set the number of frames scored per second.
    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn with_angle_decay(mut self, angle_decay: f32) -> Self {
        self.angle_decay = angle_decay;
        self
    }

    /// Total the score board starts from.
    pub fn with_starting_total(mut self, starting_total: f32) -> Self {
        self.starting_total = starting_total;
        self
    }

    pub fn with_output(mut self, output: OutputOptions) -> Self {
        self.output = output;
        self
    }

    // Getters
    pub fn min_pose_confidence(&self) -> f32 {
        self.min_pose_confidence
    }

    pub fn min_part_confidence(&self) -> f32 {
        self.min_part_confidence
    }

    pub fn session_seconds(&self) -> u64 {
        self.session_seconds
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    pub fn angle_decay(&self) -> f32 {
        self.angle_decay
    }

    pub fn starting_total(&self) -> f32 {
        self.starting_total
    }

    pub fn output(&self) -> OutputOptions {
        self.output
    }

    pub fn session_duration(&self) -> Duration {
        Duration::from_secs(self.session_seconds)
    }

    /// Time between two scored frames. Zero frame rates are rejected by `validate`.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.frame_rate.max(1)))
    }
}
