use mimic_game::{FrameReport, GameError, GameSummary, MatchConfig};
use std::path::PathBuf;

/// Command line of the `pose-match` binary.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub reference: PathBuf,
    pub candidate: PathBuf,
    pub config: Option<PathBuf>,
}

/// Parse `<reference.jsonl> <candidate.jsonl> [config.json]`, program name first.
pub fn parse_args(args: &[String]) -> Result<Args, String> {
    let program = args.first().map(String::as_str).unwrap_or("pose-match");
    match args.len() {
        3 | 4 => Ok(Args {
            reference: PathBuf::from(&args[1]),
            candidate: PathBuf::from(&args[2]),
            config: args.get(3).map(PathBuf::from),
        }),
        _ => Err(format!(
            "Usage: {} <reference.jsonl> <candidate.jsonl> [config.json]",
            program
        )),
    }
}

pub fn load_config(args: &Args) -> Result<MatchConfig, GameError> {
    match &args.config {
        Some(path) => MatchConfig::from_json_file(path),
        None => Ok(MatchConfig::default()),
    }
}

pub fn format_frame(report: &FrameReport) -> String {
    format!(
        "frame {:>5}  score {:.3}  total {:.2}  {:>3}s left  {}/{} angles",
        report.frame,
        report.score,
        report.total,
        report.seconds_remaining,
        report.candidate.angles.iter().filter(|a| a.angle.is_some()).count(),
        report.reference.angles.iter().filter(|a| a.angle.is_some()).count(),
    )
}

pub fn format_summary(summary: &GameSummary) -> String {
    let ending = if summary.finished {
        "time up"
    } else {
        "recording ended"
    };
    format!(
        "{}: score {:.2} over {} frames ({} dropped)",
        ending, summary.total, summary.frames, summary.dropped_frames
    )
}
