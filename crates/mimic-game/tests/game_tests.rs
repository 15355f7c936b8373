use mimic_base::Vec2;
use mimic_game::{play, FrameReport, GameError, MatchConfig, PoseSource, Session, SessionState};
use mimic_pose::{extract_angles, BodyPart, Keypoint, Pose};
use std::{collections::VecDeque, time::Duration};

// Upright figure; `elbow_drop` bends the left elbow downwards
fn figure(elbow_drop: f32) -> Pose {
    let positions = [
        (100.0, 20.0),
        (105.0, 15.0),
        (95.0, 15.0),
        (110.0, 18.0),
        (90.0, 18.0),
        (120.0, 50.0),
        (80.0, 50.0),
        (150.0, 50.0),
        (50.0, 50.0),
        (180.0, 50.0 + elbow_drop),
        (20.0, 50.0),
        (120.0, 120.0),
        (80.0, 120.0),
        (120.0, 170.0),
        (80.0, 170.0),
        (120.0, 220.0),
        (80.0, 220.0),
    ];
    let keypoints = BodyPart::ALL
        .iter()
        .zip(positions)
        .map(|(&part, (x, y))| Keypoint::new(part, Vec2::new(x, y), 0.9))
        .collect();
    Pose::new(0.9, keypoints)
}

struct MockSource {
    frames: VecDeque<Result<Pose, GameError>>,
    repeat: Option<Pose>,
    calls: usize,
}

impl MockSource {
    fn repeating(pose: Pose) -> Self {
        Self {
            frames: VecDeque::new(),
            repeat: Some(pose),
            calls: 0,
        }
    }

    fn scripted(frames: Vec<Result<Pose, GameError>>) -> Self {
        Self {
            frames: frames.into(),
            repeat: None,
            calls: 0,
        }
    }
}

impl PoseSource for MockSource {
    async fn next_pose(&mut self) -> Result<Option<Pose>, GameError> {
        self.calls += 1;
        match self.frames.pop_front() {
            Some(frame) => frame.map(Some),
            None => Ok(self.repeat.clone()),
        }
    }
}

fn running(config: MatchConfig) -> Session {
    let mut session = Session::new(config).unwrap();
    session.begin_loading().unwrap();
    session.mark_ready().unwrap();
    session.start().unwrap();
    session
}

#[tokio::test(start_paused = true)]
async fn test_plays_until_countdown_ends() {
    let mut session = running(MatchConfig::default().with_session_seconds(1).with_frame_rate(10));
    let mut reference = MockSource::repeating(figure(0.0));
    let mut candidate = MockSource::repeating(figure(0.0));

    let mut reports = Vec::new();
    let summary = play(&mut session, &mut reference, &mut candidate, |r: &FrameReport| {
        reports.push((r.frame, r.score, r.total))
    })
    .await
    .unwrap();

    assert!(summary.finished);
    assert!(session.is_finished());
    assert_eq!(summary.frames, 10);
    assert_eq!(summary.dropped_frames, 0);
    assert_eq!(summary.total, 10.0);
    assert_eq!(reports.len(), 10);
    assert_eq!(reports[0], (1, 1.0, 1.0));
    assert_eq!(reports[9], (10, 1.0, 10.0));
}

#[tokio::test(start_paused = true)]
async fn test_total_is_sum_of_reported_scores() {
    let mut session = running(MatchConfig::default().with_session_seconds(2).with_frame_rate(5));
    let mut reference = MockSource::repeating(figure(0.0));
    let mut candidate = MockSource::scripted(
        (0..4).map(|i| Ok(figure(i as f32 * 2.0))).collect(),
    );
    candidate.repeat = Some(figure(1.0));

    let mut sum = 0.0_f32;
    let summary = play(&mut session, &mut reference, &mut candidate, |r: &FrameReport| {
        sum += r.score
    })
    .await
    .unwrap();

    assert_eq!(summary.frames, 10);
    assert_eq!(summary.total, sum);
    assert!(summary.total < 10.0);
    assert!(summary.total > 0.0);
}

#[tokio::test(start_paused = true)]
async fn test_source_error_drops_frame() {
    let mut session = running(MatchConfig::default().with_session_seconds(1).with_frame_rate(4));
    let mut reference = MockSource::repeating(figure(0.0));
    let mut candidate = MockSource::scripted(vec![
        Ok(figure(0.0)),
        Err(GameError::Source("camera hiccup".to_string())),
    ]);
    candidate.repeat = Some(figure(0.0));

    let summary = play(&mut session, &mut reference, &mut candidate, |_: &FrameReport| {})
        .await
        .unwrap();

    assert!(summary.finished);
    assert_eq!(summary.dropped_frames, 1);
    assert_eq!(summary.frames, 3);
    assert_eq!(summary.total, 3.0);
}

#[tokio::test(start_paused = true)]
async fn test_stops_when_source_ends() {
    let mut session = running(MatchConfig::default().with_session_seconds(60));
    let mut reference = MockSource::scripted(vec![Ok(figure(0.0)), Ok(figure(0.0))]);
    let mut candidate = MockSource::repeating(figure(0.0));

    let summary = play(&mut session, &mut reference, &mut candidate, |_: &FrameReport| {})
        .await
        .unwrap();

    assert!(!summary.finished);
    assert_eq!(summary.frames, 2);
    assert_eq!(reference.calls, 3);
    assert_eq!(candidate.calls, 3);

    assert_eq!(session.state(), SessionState::Finished);
    assert!(session.remaining() > Duration::ZERO);
    let angles = extract_angles(&figure(0.0), 0.5);
    assert!(matches!(
        session.record_frame(&angles, &angles),
        Err(GameError::InvalidState(_))
    ));
}

#[tokio::test(start_paused = true)]
async fn test_low_confidence_candidate_scores_zero() {
    let mut weak = figure(0.0);
    weak.score = 0.01;
    let mut session = running(MatchConfig::default().with_session_seconds(1).with_frame_rate(2));
    let mut reference = MockSource::repeating(figure(0.0));
    let mut candidate = MockSource::repeating(weak);

    let summary = play(&mut session, &mut reference, &mut candidate, |r: &FrameReport| {
        assert!(!r.candidate.confident);
        assert_eq!(r.score, 0.0);
    })
    .await
    .unwrap();

    assert_eq!(summary.frames, 2);
    assert_eq!(summary.total, 0.0);
}

#[tokio::test]
async fn test_requires_running_session() {
    let mut session = Session::new(MatchConfig::default()).unwrap();
    let mut reference = MockSource::repeating(figure(0.0));
    let mut candidate = MockSource::repeating(figure(0.0));

    let result = play(&mut session, &mut reference, &mut candidate, |_: &FrameReport| {}).await;
    assert!(matches!(result, Err(GameError::InvalidState(_))));
    assert_eq!(reference.calls, 0);
}
