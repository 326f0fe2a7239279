use anyhow::Result;
use macroquad::prelude::*;

use crate::audio::SoundBank;
use crate::config::GameConfig;
use crate::game::{Collision, GameState, TickOutcome};
use crate::input::{Command, InputHandler};
use crate::metrics::SessionStats;
use crate::render::Renderer;
use crate::ticker::Ticker;

/// The assembled game: simulation state, tick pacing and the window,
/// audio and input collaborators.
pub struct App {
    state: GameState,
    ticker: Ticker,
    input: InputHandler,
    renderer: Renderer,
    sounds: SoundBank,
    stats: SessionStats,
    should_quit: bool,
}

impl App {
    /// Load the collaborators and assemble a ready-to-run game
    pub async fn new(config: GameConfig) -> Result<Self> {
        let sounds = SoundBank::load(config.sound_volume).await?;

        Ok(Self {
            state: GameState::new(),
            ticker: Ticker::new(config.tick_interval),
            input: InputHandler::new(),
            renderer: Renderer::new(),
            sounds,
            stats: SessionStats::new(),
            should_quit: false,
        })
    }

    /// Run frames until Escape is pressed or the window closes.
    ///
    /// Input is polled once per frame, the simulation ticks when the
    /// interval elapses, and every frame is redrawn either way.
    pub async fn run(&mut self) {
        loop {
            self.handle_input();
            if self.should_quit {
                break;
            }

            if self.ticker.should_tick(get_time()) {
                self.update_game();
            }

            self.renderer.draw(&self.state, &self.stats);
            next_frame().await;
        }
    }

    fn handle_input(&mut self) {
        for command in self.input.poll() {
            match command {
                Command::Steer(direction) => {
                    self.state.steer(direction);
                }
                Command::Quit => {
                    self.should_quit = true;
                }
            }
        }
    }

    fn update_game(&mut self) {
        match self.state.tick() {
            TickOutcome::Idle => {}
            TickOutcome::Moved { ate } => {
                if ate {
                    self.sounds.play_eat();
                }
            }
            TickOutcome::GameOver {
                collision,
                final_score,
            } => {
                self.sounds.play_wall();

                let cause = match collision {
                    Collision::Edge => "hit the edge",
                    Collision::Tail => "ran into itself",
                };
                if self.stats.on_game_over(final_score) {
                    info!("game over ({}): score {} is a new session best", cause, final_score);
                } else {
                    info!(
                        "game over ({}): score {}, best {}",
                        cause, final_score, self.stats.high_score
                    );
                }
            }
        }
    }
}
