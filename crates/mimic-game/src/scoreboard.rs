/// Running total of per-frame scores for one session.
///
/// There is no reset; a new session gets a new board.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBoard {
    total: f32,
    frames: u64,
    last_score: Option<f32>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_starting_total(total: f32) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Add one frame's score and return the new total.
    pub fn record(&mut self, score: f32) -> f32 {
        self.total += score;
        self.frames += 1;
        self.last_score = Some(score);
        self.total
    }

    pub fn total(&self) -> f32 {
        self.total
    }

    /// Number of frames recorded so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_score(&self) -> Option<f32> {
        self.last_score
    }

    /// Total as shown on screen, two decimals.
    pub fn display_total(&self) -> String {
        format!("{:.2}", self.total)
    }
}
