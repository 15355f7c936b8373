use crate::{analyze_pose, FrameAnalysis, GameError, MatchConfig, PoseSource, Session, SessionState};
use tokio::time::{self, Instant, MissedTickBehavior};

/// Result of one scored frame, handed to the caller for display.
#[derive(Debug, Clone)]
pub struct FrameReport {
    /// 1-based index of the scored frame
    pub frame: u64,
    pub score: f32,
    pub total: f32,
    pub seconds_remaining: u64,
    pub reference: FrameAnalysis,
    pub candidate: FrameAnalysis,
}

/// How a call to `play` ended.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub total: f32,
    pub frames: u64,
    pub dropped_frames: u64,
    /// True when the countdown ran out, false when a pose source ended first.
    /// The session is `Finished` either way.
    pub finished: bool,
}

async fn next_analysis<S: PoseSource>(
    source: &mut S,
    config: &MatchConfig,
) -> Result<Option<FrameAnalysis>, GameError> {
    let Some(pose) = source.next_pose().await? else {
        return Ok(None);
    };
    Ok(Some(analyze_pose(&pose, config)))
}

/// Drive a running session until its countdown ends or a source runs dry.
///
/// One frame per tick at the configured frame rate. Both sources are polled
/// together and both poses are analyzed before the frame is scored. A frame
/// where either source fails is dropped and the game carries on. When a
/// source ends the session is finished early.
pub async fn play<R, C, F>(
    session: &mut Session,
    reference: &mut R,
    candidate: &mut C,
    mut on_frame: F,
) -> Result<GameSummary, GameError>
where
    R: PoseSource,
    C: PoseSource,
    F: FnMut(&FrameReport),
{
    if session.state() != SessionState::Running {
        return Err(GameError::InvalidState(format!(
            "play needs a running session, not {}",
            session.state()
        )));
    }

    let config = session.config().clone();
    let mut ticker = time::interval(config.frame_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut last_tick = Instant::now();
    let mut dropped_frames = 0;

    while !session.is_finished() {
        ticker.tick().await;
        let now = Instant::now();
        if session.advance(now - last_tick) == SessionState::Finished {
            break;
        }
        last_tick = now;

        let (reference_frame, candidate_frame) = tokio::join!(
            next_analysis(reference, &config),
            next_analysis(candidate, &config)
        );

        match (reference_frame, candidate_frame) {
            (Ok(Some(reference)), Ok(Some(candidate))) => {
                let score = session.record_frame(&reference.angles, &candidate.angles)?;
                let report = FrameReport {
                    frame: session.scoreboard().frames(),
                    score,
                    total: session.scoreboard().total(),
                    seconds_remaining: session.seconds_remaining(),
                    reference,
                    candidate,
                };
                log::debug!(
                    "frame {}: score {:.3}, total {:.2}, {} vs {} angles",
                    report.frame,
                    report.score,
                    report.total,
                    report.reference.angles.len(),
                    report.candidate.angles.len()
                );
                on_frame(&report);
            }
            (Ok(None), _) | (_, Ok(None)) => {
                log::info!("pose source ended with {}s left", session.seconds_remaining());
                session.finish()?;
                break;
            }
            (Err(e), _) | (_, Err(e)) => {
                dropped_frames += 1;
                log::warn!("dropping frame: {}", e);
            }
        }
    }

    let scoreboard = session.scoreboard();
    Ok(GameSummary {
        total: scoreboard.total(),
        frames: scoreboard.frames(),
        dropped_frames,
        finished: session.remaining().is_zero(),
    })
}
