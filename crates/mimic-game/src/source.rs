use crate::GameError;
use mimic_pose::Pose;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

/// Async supplier of one pose per frame for a single video stream.
///
/// The pose estimator behind it is opaque to the game.
#[allow(async_fn_in_trait)]
pub trait PoseSource {
    /// Next frame's pose, or `None` when the stream has ended.
    async fn next_pose(&mut self) -> Result<Option<Pose>, GameError>;
}

/// Replays poses recorded as JSON lines, one `Pose` per line.
///
/// A malformed line is reported as an error for that frame; the next call
/// continues with the following line.
pub struct JsonLinesSource<R> {
    lines: Lines<BufReader<R>>,
    line_number: usize,
}

impl<R: AsyncRead + Unpin> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            line_number: 0,
        }
    }
}

impl JsonLinesSource<tokio::fs::File> {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|e| GameError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
        Ok(Self::new(file))
    }
}

impl<R: AsyncRead + Unpin> PoseSource for JsonLinesSource<R> {
    async fn next_pose(&mut self) -> Result<Option<Pose>, GameError> {
        while let Some(line) = self.lines.next_line().await? {
            self.line_number += 1;
            if line.trim().is_empty() {
                continue;
            }
            let pose: Pose = serde_json::from_str(&line)
                .map_err(|e| GameError::Source(format!("line {}: {}", self.line_number, e)))?;
            pose.validate()?;
            return Ok(Some(pose));
        }
        Ok(None)
    }
}
