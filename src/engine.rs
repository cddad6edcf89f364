use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::food::FoodPlacer;
use crate::grid::{Cell, Grid};
use crate::input::Key;
use crate::render::{self, Scene, Surface, COLOR_TRANSITION_SPEED, SCORE_ROWS};
use crate::snake::{Direction, MoveResult, Snake};
use crate::state::{GamePhase, Transition};

/// What happened during a single call to `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Not playing, nothing simulated
    Idle,
    Moved,
    Ate,
    Crashed,
}

/// Owns the whole game: phase, snake, food and score.
///
/// Driven from outside by a fixed-rate timer (`tick`), a key source
/// (`handle_input`) and a redraw (`render`).
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    phase: GamePhase,
    snake: Snake,
    food: Cell,
    score: u32,
    color_progress: f32,
    placer: FoodPlacer<StdRng>,
}

impl GameEngine {
    pub fn new(config: GameConfig, surface_size: (u16, u16)) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = play_area(surface_size.0, surface_size.1, config.cell_size);
        let snake = Snake::new(grid.center(), Direction::Right);
        let mut placer = FoodPlacer::new(rng);
        let food = placer.place(&grid, &snake);

        GameEngine { config, grid, phase: GamePhase::NotStarted, snake, food, score: 0, color_progress: 0.0, placer }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tick(&mut self) -> TickEvent {
        if !self.phase.is_simulating() {
            return TickEvent::Idle;
        }

        self.snake.apply_pending_direction();
        let event = match self.snake.move_step(&self.grid, self.food) {
            MoveResult::Moved { .. } => TickEvent::Moved,
            MoveResult::Grew { .. } => {
                self.score += 1;
                self.food = self.placer.place(&self.grid, &self.snake);
                TickEvent::Ate
            }
            MoveResult::Crashed { new_head } => {
                self.phase = self.phase.on_collision();
                info!(
                    "Game over at ({}, {}), final score {}, length {}",
                    new_head.x,
                    new_head.y,
                    self.score,
                    self.snake.len()
                );
                return TickEvent::Crashed;
            }
        };

        self.color_progress = (self.color_progress + COLOR_TRANSITION_SPEED) % 1.0;
        event
    }

    pub fn handle_input(&mut self, key: Key) {
        let transition = self.phase.on_key(key);
        match transition {
            Transition::Start => self.start_game(),
            Transition::Steer(direction) => {
                if !self.snake.request_direction(direction) {
                    debug!("Ignoring reverse turn to {:?}", direction);
                }
            }
            Transition::Pause | Transition::Resume => debug!("{:?} from {:?}", transition, self.phase),
            Transition::Ignore => {}
        }
        self.phase = self.phase.next(transition);
    }

    /// Recomputes the grid after the surface changed size. Food that ended
    /// up outside the new bounds is placed again; a stranded head re-enters
    /// at the opposite edge on its next move.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.grid = play_area(width, height, self.config.cell_size);
        info!("Surface resized to {}x{}, grid is now {}x{}", width, height, self.grid.cols(), self.grid.rows());

        if self.phase != GamePhase::NotStarted && !self.grid.contains(self.food) {
            self.food = self.placer.place(&self.grid, &self.snake);
        }
    }

    pub fn render<S: Surface>(&self, surface: &mut S) {
        let scene = Scene {
            snake: &self.snake,
            food: self.food,
            score: self.score,
            color_progress: self.color_progress,
            cell_size: self.config.cell_size,
            debug_overlay: self.config.debug_overlay,
        };

        match self.phase {
            GamePhase::NotStarted => render::draw_start_screen(surface),
            GamePhase::Playing => render::draw_scene(surface, &scene),
            GamePhase::Paused => render::draw_paused_screen(surface, &scene),
            GamePhase::GameOver => render::draw_game_over_screen(surface, self.score),
        }
    }

    fn start_game(&mut self) {
        let restart = self.phase == GamePhase::GameOver;
        self.snake = Snake::new(self.grid.center(), Direction::Right);
        self.food = self.placer.place(&self.grid, &self.snake);
        self.score = 0;
        self.color_progress = 0.0;

        if restart {
            info!("Restarting on a {}x{} grid", self.grid.cols(), self.grid.rows());
        } else {
            info!("Starting on a {}x{} grid", self.grid.cols(), self.grid.rows());
        }
    }
}

/// The grid fills the surface except for the score line at the bottom.
fn play_area(width: u16, height: u16, cell_size: u16) -> Grid {
    Grid::from_surface(width, height.saturating_sub(SCORE_ROWS), cell_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::{Drawn, RecordingSurface};

    fn engine(cols: u16, rows: u16) -> GameEngine {
        let config = GameConfig { seed: Some(3), ..Default::default() };
        GameEngine::new(config, (cols, rows + SCORE_ROWS))
    }

    fn started(cols: u16, rows: u16) -> GameEngine {
        let mut engine = engine(cols, rows);
        engine.handle_input(Key::Other);
        engine
    }

    #[test]
    fn test_starts_not_started() {
        let mut engine = engine(10, 10);
        assert_eq!(engine.phase(), GamePhase::NotStarted);
        assert_eq!(engine.tick(), TickEvent::Idle);

        engine.handle_input(Key::ArrowUp);
        assert_eq!(engine.phase(), GamePhase::Playing);
        assert_eq!(engine.snake.head(), Cell::new(5, 5));
        assert_eq!(engine.snake.direction(), Direction::Right);
    }

    #[test]
    fn test_eating_food() {
        let mut engine = started(10, 10);
        engine.snake = Snake::new(Cell::new(5, 5), Direction::Right);
        engine.food = Cell::new(6, 5);

        assert_eq!(engine.tick(), TickEvent::Ate);
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.snake.len(), 2);
        assert_eq!(engine.snake.head(), Cell::new(6, 5));
        assert!(!engine.snake.occupies(engine.food));
        assert!(engine.grid().contains(engine.food));
    }

    #[test]
    fn test_length_never_shrinks() {
        let mut engine = started(12, 9);
        let turns = [Key::ArrowDown, Key::ArrowLeft, Key::ArrowUp, Key::ArrowRight];

        for i in 0..300 {
            if engine.phase() != GamePhase::Playing {
                break;
            }
            if i % 7 == 0 {
                engine.handle_input(turns[(i / 7) % turns.len()]);
            }
            let (len, score) = (engine.snake.len(), engine.score());
            let event = engine.tick();
            let grown = engine.snake.len() - len;
            match event {
                TickEvent::Ate => assert_eq!((grown, engine.score()), (1, score + 1)),
                _ => assert_eq!((grown, engine.score()), (0, score)),
            }
            assert!(!engine.snake.occupies(engine.food) || event == TickEvent::Crashed);
        }
    }

    #[test]
    fn test_reverse_never_applied() {
        let mut engine = started(10, 10);
        engine.handle_input(Key::ArrowLeft);
        engine.tick();

        assert_eq!(engine.snake.direction(), Direction::Right);
        assert_eq!(engine.snake.head(), Cell::new(6, 5));
    }

    #[test]
    fn test_turn_waits_for_tick() {
        let mut engine = started(10, 10);
        engine.food = Cell::new(0, 0);
        engine.handle_input(Key::ArrowUp);
        assert_eq!(engine.snake.direction(), Direction::Right);

        engine.tick();
        assert_eq!(engine.snake.head(), Cell::new(5, 4));
    }

    #[test]
    fn test_wraps_right_edge() {
        let mut engine = started(10, 10);
        engine.snake = Snake::new(Cell::new(9, 3), Direction::Right);
        engine.food = Cell::new(0, 0);

        assert_eq!(engine.tick(), TickEvent::Moved);
        assert_eq!(engine.snake.head(), Cell::new(0, 3));
        assert_eq!(engine.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut engine = started(10, 10);
        engine.snake = Snake::from_cells(
            &[Cell::new(5, 5), Cell::new(6, 5), Cell::new(6, 6), Cell::new(5, 6), Cell::new(4, 6)],
            Direction::Down,
        );
        engine.food = Cell::new(0, 0);
        engine.score = 4;

        assert_eq!(engine.tick(), TickEvent::Crashed);
        assert_eq!(engine.phase(), GamePhase::GameOver);
        assert_eq!(engine.score(), 4);

        // Frozen until restart
        let head = engine.snake.head();
        assert_eq!(engine.tick(), TickEvent::Idle);
        assert_eq!(engine.snake.head(), head);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut engine = started(10, 10);
        engine.snake = Snake::from_cells(&[Cell::new(1, 1), Cell::new(1, 2)], Direction::Up);
        engine.score = 9;
        engine.phase = GamePhase::GameOver;

        engine.handle_input(Key::Escape);

        assert_eq!(engine.phase(), GamePhase::Playing);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.snake.len(), 1);
        assert_eq!(engine.snake.head(), Cell::new(5, 5));
        assert_eq!(engine.snake.direction(), Direction::Right);
        assert!(!engine.snake.occupies(engine.food));
    }

    #[test]
    fn test_escape_pauses_without_touching_state() {
        let mut engine = started(10, 10);
        engine.score = 2;
        let (food, head) = (engine.food, engine.snake.head());

        engine.handle_input(Key::Escape);
        assert_eq!(engine.phase(), GamePhase::Paused);
        assert_eq!(engine.tick(), TickEvent::Idle);

        // Steering is ignored while paused
        engine.handle_input(Key::ArrowUp);
        assert_eq!(engine.snake.pending_direction(), Direction::Right);

        engine.handle_input(Key::Escape);
        assert_eq!(engine.phase(), GamePhase::Playing);
        assert_eq!((engine.food, engine.snake.head(), engine.score()), (food, head, 2));
    }

    #[test]
    fn test_resize_moves_food_out_of_bounds() {
        let mut engine = started(20, 20);
        engine.food = Cell::new(15, 15);

        engine.resize(10, 10 + SCORE_ROWS);
        assert_eq!((engine.grid().cols(), engine.grid().rows()), (10, 10));
        assert!(engine.grid().contains(engine.food));

        engine.food = Cell::new(3, 3);
        engine.resize(8, 8 + SCORE_ROWS);
        assert_eq!(engine.food, Cell::new(3, 3));
    }

    #[test]
    fn test_shrink_then_tick_enters_opposite_edge() {
        let mut engine = started(20, 20);
        engine.snake = Snake::from_cells(&[Cell::new(15, 5), Cell::new(14, 5)], Direction::Right);
        engine.food = Cell::new(9, 9);

        engine.resize(10, 10 + SCORE_ROWS);
        assert_eq!(engine.tick(), TickEvent::Moved);
        assert_eq!(engine.snake.head(), Cell::new(0, 5));

        // Same when the head was stranded past the left edge of a wider grid
        engine.resize(20, 20 + SCORE_ROWS);
        engine.snake = Snake::from_cells(&[Cell::new(-1, 2), Cell::new(0, 2)], Direction::Left);
        engine.tick();
        assert_eq!(engine.snake.head(), Cell::new(19, 2));
    }

    #[test]
    fn test_score_row_outside_play_area() {
        let mut engine = engine(30, 12);
        assert_eq!(engine.grid().rows(), 12);

        engine.resize(40, 7);
        assert_eq!((engine.grid().cols(), engine.grid().rows()), (40, 6));

        // The score line is the last surface row, one below the grid
        engine.handle_input(Key::Other);
        let mut surface = RecordingSurface::new(40, 7);
        engine.render(&mut surface);
        assert!(surface.drawn.contains(&Drawn::Text { row: engine.grid().rows() }));
        assert!(surface.rects_on_top());
    }

    #[test]
    fn test_render_follows_phase() {
        let mut engine = engine(30, 12);
        let mut surface = RecordingSurface::new(30, 12 + SCORE_ROWS);

        engine.render(&mut surface);
        assert!(surface.has_text("Press any key to start"));

        engine.handle_input(Key::Other);
        engine.render(&mut surface);
        assert!(surface.has_text("Score: 0"));
        assert_eq!(surface.rects.len(), 2);

        engine.handle_input(Key::Escape);
        engine.render(&mut surface);
        assert!(surface.has_text("Paused"));

        engine.phase = GamePhase::GameOver;
        engine.score = 5;
        engine.render(&mut surface);
        assert!(surface.has_text("Final Score: 5"));
    }
}
