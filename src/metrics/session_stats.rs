/// Score tracking for the lifetime of the process. Nothing is persisted.
pub struct SessionStats {
    pub high_score: u32,
    pub games_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            high_score: 0,
            games_played: 0,
        }
    }

    /// Record a finished run. Returns true when it set a new high score.
    pub fn on_game_over(&mut self, final_score: u32) -> bool {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
            return true;
        }
        false
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
