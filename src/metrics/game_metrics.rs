use std::time::{Duration, Instant};

/// Counters that survive game resets within one process run.
pub struct GameMetrics {
    started_at: Instant,
    elapsed: Duration,
    high_score: u32,
    games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            elapsed: Duration::ZERO,
            high_score: 0,
            games_played: 0,
        }
    }

    /// Refresh the elapsed clock; called once per frame.
    pub fn update(&mut self) {
        self.elapsed = self.started_at.elapsed();
    }

    /// A new game began; the clock starts over.
    pub fn on_game_start(&mut self) {
        self.started_at = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    /// A game ended. Returns true when `final_score` set a new high.
    pub fn on_game_over(&mut self, final_score: u32) -> bool {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
            return true;
        }
        false
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// The current game's wall clock as MM:SS.
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
