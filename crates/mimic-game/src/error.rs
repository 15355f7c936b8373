use mimic_pose::PoseError;
use std::fmt;

#[derive(Debug)]
pub enum GameError {
    Pose(PoseError),
    InvalidState(String),
    Source(String),
    Config(String),
    Io(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Pose(err) => write!(f, "pose error: {err}"),
            GameError::InvalidState(msg) => write!(f, "invalid session state: {msg}"),
            GameError::Source(msg) => write!(f, "pose source error: {msg}"),
            GameError::Config(msg) => write!(f, "config error: {msg}"),
            GameError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<PoseError> for GameError {
    fn from(err: PoseError) -> Self {
        GameError::Pose(err)
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err.to_string())
    }
}
