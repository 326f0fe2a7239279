use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seconds between logic ticks
    pub tick_interval: f64,
    /// Playback volume for the sound effects, 0.0 to 1.0
    pub sound_volume: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval: 0.1,
            sound_volume: 1.0,
        }
    }
}
