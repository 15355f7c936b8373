use mimic_game::{GameError, JsonLinesSource, PoseSource};
use mimic_pose::BodyPart;

const RECORDING: &str = concat!(
    r#"{"score":0.9,"keypoints":[{"part":"nose","position":{"x":1.0,"y":2.0},"score":0.8}]}"#,
    "\n\n",
    r#"{"score":0.4,"keypoints":[]}"#,
    "\n",
);

#[tokio::test]
async fn test_reads_poses_and_skips_blank_lines() {
    let mut source = JsonLinesSource::new(RECORDING.as_bytes());

    let first = source.next_pose().await.unwrap().unwrap();
    assert_eq!(first.score, 0.9);
    assert_eq!(first.keypoints[0].part, BodyPart::Nose);

    let second = source.next_pose().await.unwrap().unwrap();
    assert_eq!(second.score, 0.4);
    assert!(second.keypoints.is_empty());

    assert!(source.next_pose().await.unwrap().is_none());
}

#[tokio::test]
async fn test_bad_line_is_an_error_then_continues() {
    let data = "not json\n{\"score\":0.5,\"keypoints\":[]}\n";
    let mut source = JsonLinesSource::new(data.as_bytes());

    match source.next_pose().await {
        Err(GameError::Source(msg)) => assert!(msg.contains("line 1")),
        other => panic!("expected source error, got {:?}", other),
    }
    let pose = source.next_pose().await.unwrap().unwrap();
    assert_eq!(pose.score, 0.5);
}

#[tokio::test]
async fn test_misordered_keypoints_are_rejected() {
    let data = concat!(
        r#"{"score":0.5,"keypoints":["#,
        r#"{"part":"leftEye","position":{"x":0.0,"y":0.0},"score":1.0}]}"#,
    );
    let mut source = JsonLinesSource::new(data.as_bytes());
    assert!(matches!(source.next_pose().await, Err(GameError::Pose(_))));
}

#[tokio::test]
async fn test_open_missing_file() {
    let result = JsonLinesSource::open("/nonexistent/mimic/poses.jsonl").await;
    assert!(matches!(result, Err(GameError::Io(_))));
}
