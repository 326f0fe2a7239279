use rand::rngs::StdRng;
use rand::SeedableRng;

use super::direction::Direction;
use super::food::Food;
use super::grid::CELL_COUNT;
use super::rules;
use super::snake::Snake;

/// Kind of collision that ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// The head left the grid
    Edge,
    /// The head ran into the body
    Tail,
}

/// What a single logic tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is stopped; nothing moved
    Idle,
    /// The snake advanced one cell
    Moved { ate: bool },
    /// The advance ended the run; the state is reset and stopped
    GameOver {
        collision: Collision,
        final_score: u32,
    },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub running: bool,
    rng: StdRng,
}

impl GameState {
    /// Create a running game with the snake at the start and fresh food
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a deterministic game for tests and reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let snake = Snake::new();
        let food = Food::spawn(&mut rng, snake.body());

        Self {
            snake,
            food,
            score: 0,
            running: true,
            rng,
        }
    }

    /// Advance the simulation by one logic tick
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        // The cell the head is about to enter decides the food hit;
        // growth requested before the advance keeps the tail this tick.
        let next_head = self
            .snake
            .head()
            .moved_in_direction(self.snake.direction());
        let ate = rules::head_hits_food(next_head, self.food.position);
        if ate {
            self.snake.request_growth();
        }

        self.snake.advance();

        if ate {
            self.score += 1;
            self.food.respawn(&mut self.rng, self.snake.body());
        }

        // Food is handled before the edge and tail rules each tick
        if rules::head_hits_edge(self.snake.head(), CELL_COUNT) {
            return self.game_over(Collision::Edge);
        }
        if rules::head_hits_tail(self.snake.body()) {
            return self.game_over(Collision::Tail);
        }

        TickOutcome::Moved { ate }
    }

    /// Apply a directional input.
    ///
    /// The direction opposite to the current heading is rejected. An
    /// accepted steer restarts a stopped game. Returns acceptance.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.snake.direction().is_opposite(direction) {
            return false;
        }

        self.snake.set_direction(direction);
        self.running = true;
        true
    }

    /// Put everything back at the start and stop until the next steer
    fn game_over(&mut self, collision: Collision) -> TickOutcome {
        let final_score = self.score;

        self.snake.reset();
        self.food.respawn(&mut self.rng, self.snake.body());
        self.running = false;
        self.score = 0;

        TickOutcome::GameOver {
            collision,
            final_score,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::Position;
    use std::collections::VecDeque;

    /// Run a fresh game rightward into the wall, leaving it stopped.
    fn stopped_game(seed: u64) -> GameState {
        let mut state = GameState::with_seed(seed);
        state.food = Food::at(Position::new(0, 0));
        while state.running {
            state.tick();
        }
        state
    }

    #[test]
    fn test_new_game() {
        let state = GameState::with_seed(1);

        assert!(state.running);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Position::new(6, 9));
        assert!(!state.snake.body().contains(&state.food.position));
    }

    #[test]
    fn test_food_spawns_off_body() {
        for seed in 0..50 {
            let state = GameState::with_seed(seed);
            assert!(!state.snake.body().contains(&state.food.position));
            assert!(state.food.position.x >= 0 && state.food.position.x < CELL_COUNT);
            assert!(state.food.position.y >= 0 && state.food.position.y < CELL_COUNT);
        }
    }

    #[test]
    fn test_tick_moves_snake() {
        let mut state = GameState::with_seed(2);
        state.food = Food::at(Position::new(0, 0));

        let outcome = state.tick();

        assert_eq!(outcome, TickOutcome::Moved { ate: false });
        assert_eq!(state.snake.head(), Position::new(7, 9));
        assert_eq!(state.snake.len(), 3);
    }

    #[test]
    fn test_eating_grows_on_the_same_tick() {
        let mut state = GameState::with_seed(3);
        state.food = Food::at(Position::new(7, 9));

        let outcome = state.tick();

        assert_eq!(outcome, TickOutcome::Moved { ate: true });
        assert_eq!(state.score, 1);
        let expected = VecDeque::from([
            Position::new(7, 9),
            Position::new(6, 9),
            Position::new(5, 9),
            Position::new(4, 9),
        ]);
        assert_eq!(*state.snake.body(), expected);
        // The respawn excludes the grown body, eaten tail included
        assert!(!expected.contains(&state.food.position));
    }

    #[test]
    fn test_length_is_start_plus_growth_events() {
        let mut state = GameState::with_seed(4);

        for step in 1..=3 {
            let ahead = state
                .snake
                .head()
                .moved_in_direction(state.snake.direction());
            state.food = Food::at(ahead);
            state.tick();

            assert_eq!(state.score, step);
            assert_eq!(state.snake.len(), 3 + step as usize);
        }
    }

    #[test]
    fn test_wall_hit_resets_and_stops() {
        let mut state = GameState::with_seed(5);
        state.food = Food::at(Position::new(0, 0));

        // 18 ticks bring the head to the last legal column
        for _ in 0..18 {
            assert!(matches!(state.tick(), TickOutcome::Moved { .. }));
        }
        assert_eq!(state.snake.head(), Position::new(24, 9));

        let outcome = state.tick();

        assert_eq!(
            outcome,
            TickOutcome::GameOver {
                collision: Collision::Edge,
                final_score: 0,
            }
        );
        assert!(!state.running);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Position::new(6, 9));
        assert!(!state.snake.body().contains(&state.food.position));
    }

    #[test]
    fn test_game_over_reports_final_score() {
        let mut state = GameState::with_seed(6);

        // Two eats on the way to the right wall
        state.food = Food::at(Position::new(7, 9));
        state.tick();
        state.food = Food::at(Position::new(8, 9));
        state.tick();
        assert_eq!(state.score, 2);

        state.food = Food::at(Position::new(0, 0));
        let mut last = TickOutcome::Idle;
        while state.running {
            last = state.tick();
        }

        assert_eq!(
            last,
            TickOutcome::GameOver {
                collision: Collision::Edge,
                final_score: 2,
            }
        );
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_stopped_game_ignores_ticks() {
        let mut state = stopped_game(7);
        let before = state.snake.clone();

        assert_eq!(state.tick(), TickOutcome::Idle);
        assert_eq!(state.tick(), TickOutcome::Idle);
        assert_eq!(state.snake, before);
    }

    #[test]
    fn test_steer_resumes_stopped_game() {
        let mut state = stopped_game(8);
        state.food = Food::at(Position::new(0, 0));

        assert!(state.steer(Direction::Up));
        assert!(state.running);

        let outcome = state.tick();
        assert_eq!(outcome, TickOutcome::Moved { ate: false });
        assert_eq!(state.snake.head(), Position::new(6, 8));
    }

    #[test]
    fn test_rejected_steer_does_not_resume() {
        let mut state = stopped_game(9);

        // The reset heading is rightward; leftward is the reversal
        assert!(!state.steer(Direction::Left));
        assert!(!state.running);
        assert_eq!(state.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_reversal_guard() {
        let mut state = GameState::with_seed(10);
        state.food = Food::at(Position::new(0, 0));

        assert!(!state.steer(Direction::Left));
        assert_eq!(state.snake.direction(), Direction::Right);

        assert!(state.steer(Direction::Right)); // same heading is fine
        assert!(state.steer(Direction::Up));
        assert_eq!(state.snake.direction(), Direction::Up);

        assert!(!state.steer(Direction::Down));
        assert_eq!(state.snake.direction(), Direction::Up);
    }

    #[test]
    fn test_tail_chase_is_legal_without_growth() {
        let mut state = GameState::with_seed(11);
        state.food = Food::at(Position::new(0, 0));
        // Square body about to step onto the cell its tail vacates
        state.snake = Snake::from_segments(
            vec![
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 6),
                Position::new(5, 6),
            ],
            Direction::Down,
        );

        let outcome = state.tick();

        assert_eq!(outcome, TickOutcome::Moved { ate: false });
        assert_eq!(state.snake.head(), Position::new(5, 6));
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn test_tail_chase_is_fatal_when_growing() {
        let mut state = GameState::with_seed(12);
        state.food = Food::at(Position::new(0, 0));
        state.snake = Snake::from_segments(
            vec![
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 6),
                Position::new(5, 6),
            ],
            Direction::Down,
        );
        // Pending growth keeps the tail in place this tick
        state.snake.request_growth();

        let outcome = state.tick();

        assert_eq!(
            outcome,
            TickOutcome::GameOver {
                collision: Collision::Tail,
                final_score: 0,
            }
        );
        assert!(!state.running);
        assert_eq!(state.snake.len(), 3);
    }
}
