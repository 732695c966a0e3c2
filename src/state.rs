use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::config::GameConfig;
use crate::food::place_food;
use crate::grid::{Grid, Tile};
use crate::input::KeyState;
use crate::snake::{Snake, Direction};
use crate::Coords;

const START_DIRECTION: Direction = Direction::Up;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    Restart,
}

impl Phase {
    pub fn next(self, outcome: StepOutcome) -> Phase {
        match (self, outcome) {
            (Phase::Running, StepOutcome::Crashed) => Phase::Restart,
            (Phase::Running, _) => Phase::Running,
            (Phase::Restart, _) => Phase::Running,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Frame without movement.
    Idle,
    Moved { new_head: Coords, old_tail: Option<Coords> },
    Ate { new_head: Coords, fruit: Option<Coords> },
    Crashed,
}

/// Everything a run needs: board, snake, score and the frame counter.
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    score: u64,
    frames: u64,
    phase: Phase,
    rng: StdRng,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (x, y) = config.start_position();
        let mut state = GameState {
            grid: Grid::new(Tile::Empty, config.width, config.height),
            snake: Snake::new(START_DIRECTION, x, y),
            score: 0,
            frames: 0,
            phase: Phase::Running,
            rng,
            config,
        };
        state.reset();
        state
    }

    /// Fresh board, single cell snake at the start position, new fruit.
    pub fn reset(&mut self) {
        let (x, y) = self.config.start_position();
        self.grid.init(Tile::Empty, self.config.width, self.config.height);
        self.score = 0;
        self.snake.init(START_DIRECTION, x, y);
        self.grid.set(Tile::Snake, x, y);
        place_food(&mut self.grid, &mut self.rng);
    }

    /// Advances one frame. The snake only moves every `frames_per_step`
    /// frames; the held keys are consumed by that move.
    pub fn update(&mut self, keys: &mut KeyState) -> StepOutcome {
        self.frames += 1;
        if self.frames % self.config.frames_per_step != 0 {
            return StepOutcome::Idle;
        }

        let direction = keys.steer(self.snake.direction());
        keys.clear();
        self.snake.set_direction(direction);

        let outcome = self.step();
        self.phase = self.phase.next(outcome);

        if self.phase == Phase::Restart {
            info!("run over after {} fruit, length {}", self.score, self.snake.len());
            self.reset();
            self.phase = self.phase.next(outcome);
        }

        outcome
    }

    fn step(&mut self) -> StepOutcome {
        let (cx, cy) = self.snake.next_head();
        let (x, y) = match self.grid.contains(cx, cy) {
            Some(pos) => pos,
            None => return StepOutcome::Crashed,
        };

        match self.grid.get(x, y) {
            Tile::Snake => StepOutcome::Crashed,
            Tile::Fruit => {
                self.score += 1;
                self.grid.set(Tile::Snake, x, y);
                self.snake.insert(x, y);
                let fruit = place_food(&mut self.grid, &mut self.rng);
                debug!("fruit eaten at ({}, {}), score {}", x, y, self.score);
                StepOutcome::Ate { new_head: (x, y), fruit }
            },
            Tile::Empty => {
                let old_tail = self.snake.remove();
                if let Some((tx, ty)) = old_tail {
                    self.grid.set(Tile::Empty, tx, ty);
                }
                self.grid.set(Tile::Snake, x, y);
                self.snake.insert(x, y);
                StepOutcome::Moved { new_head: (x, y), old_tail }
            },
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn score(&self) -> u64 {
        self.score
    }
}
