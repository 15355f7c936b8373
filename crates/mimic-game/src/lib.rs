//! Timed "match the pose" sessions built on `mimic-pose`.
//!
//! A `Session` owns the configuration, the countdown and the running score.
//! `play` drives it from two `PoseSource`s, one frame per tick.

pub mod config;
pub mod error;
pub mod frame;
pub mod game;
pub mod scoreboard;
pub mod session;
pub mod source;

pub use config::{MatchConfig, OutputOptions};
pub use error::GameError;
pub use frame::{analyze_pose, FrameAnalysis};
pub use game::{play, FrameReport, GameSummary};
pub use scoreboard::ScoreBoard;
pub use session::{Session, SessionState};
pub use source::{JsonLinesSource, PoseSource};
