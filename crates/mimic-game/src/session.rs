use crate::{GameError, MatchConfig, ScoreBoard};
use mimic_pose::{score_frame_with, AngleMeasurement};
use std::{fmt, time::Duration};

/// Session lifecycle. Frames are only scored while `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Loading,
    Ready,
    Running,
    Finished,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::Loading => write!(f, "loading"),
            SessionState::Ready => write!(f, "ready"),
            SessionState::Running => write!(f, "running"),
            SessionState::Finished => write!(f, "finished"),
        }
    }
}

/// One timed round of the game: countdown plus score board.
pub struct Session {
    config: MatchConfig,
    state: SessionState,
    remaining: Duration,
    scoreboard: ScoreBoard,
}

impl Session {
    /// Fails with `GameError::Config` when `config` does not pass `MatchConfig::validate`.
    pub fn new(config: MatchConfig) -> Result<Self, GameError> {
        config.validate()?;
        let remaining = config.session_duration();
        let scoreboard = ScoreBoard::with_starting_total(config.starting_total());
        Ok(Self {
            config,
            state: SessionState::Idle,
            remaining,
            scoreboard,
        })
    }

    fn transition(&mut self, from: SessionState, to: SessionState) -> Result<(), GameError> {
        if self.state != from {
            return Err(GameError::InvalidState(format!(
                "cannot move to {} from {} (expected {})",
                to, self.state, from
            )));
        }
        log::debug!("session {} -> {}", self.state, to);
        self.state = to;
        Ok(())
    }

    /// Idle -> Loading, while the pose estimator is being prepared.
    pub fn begin_loading(&mut self) -> Result<(), GameError> {
        self.transition(SessionState::Idle, SessionState::Loading)
    }

    /// Loading -> Ready
    pub fn mark_ready(&mut self) -> Result<(), GameError> {
        self.transition(SessionState::Loading, SessionState::Ready)
    }

    /// Ready -> Running; the countdown starts from the full session length.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.transition(SessionState::Ready, SessionState::Running)?;
        self.remaining = self.config.session_duration();
        log::info!("session started, {}s on the clock", self.config.session_seconds());
        Ok(())
    }

    /// Run the countdown by `elapsed`. Reaching zero finishes the session.
    ///
    /// Has no effect outside `Running`.
    pub fn advance(&mut self, elapsed: Duration) -> SessionState {
        if self.state == SessionState::Running {
            self.remaining = self.remaining.saturating_sub(elapsed);
            if self.remaining.is_zero() {
                self.state = SessionState::Finished;
                log::info!(
                    "session finished after {} frames, score {}",
                    self.scoreboard.frames(),
                    self.scoreboard.display_total()
                );
            }
        }
        self.state
    }

    /// Running -> Finished before the countdown ends, e.g. when a pose stream runs dry.
    pub fn finish(&mut self) -> Result<(), GameError> {
        self.transition(SessionState::Running, SessionState::Finished)?;
        log::info!(
            "session ended early with {}s left, score {}",
            self.seconds_remaining(),
            self.scoreboard.display_total()
        );
        Ok(())
    }

    /// Score one frame and add it to the running total.
    pub fn record_frame(
        &mut self,
        reference: &[AngleMeasurement],
        candidate: &[AngleMeasurement],
    ) -> Result<f32, GameError> {
        if self.state != SessionState::Running {
            return Err(GameError::InvalidState(format!(
                "cannot score a frame while {}",
                self.state
            )));
        }
        let score = score_frame_with(reference, candidate, self.config.angle_decay());
        self.scoreboard.record(score);
        Ok(score)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Whole seconds left on the clock, rounded up.
    pub fn seconds_remaining(&self) -> u64 {
        let secs = self.remaining.as_secs();
        if self.remaining.subsec_nanos() > 0 {
            secs + 1
        } else {
            secs
        }
    }

    /// Elapsed share of the session in percent, 0 to 100.
    pub fn progress(&self) -> f32 {
        let total = self.config.session_duration().as_secs_f32();
        let elapsed = total - self.remaining.as_secs_f32();
        (elapsed / total * 100.0).clamp(0.0, 100.0)
    }

    pub fn scoreboard(&self) -> &ScoreBoard {
        &self.scoreboard
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}
