use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyEvent, KeyEventKind, KeyModifiers, KeyCode};
use log::info;

use crate::config::{GameConfig, TICK_INTERVAL};
use crate::engine::{GameEngine, TickEvent};
use crate::input::Key;
use crate::render::Surface;
use crate::term::TermManager;

/// Wires the engine to the terminal: timer, key events, resizes and redraws.
pub struct SnakeGame {
    term: TermManager,
    engine: GameEngine,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> Result<Self> {
        let term = TermManager::new().context("Failed to read terminal size")?;
        let engine = GameEngine::new(config, term.size());
        let grid = engine.grid();
        info!("Terminal is {:?}, grid is {}x{}", term.size(), grid.cols(), grid.rows());

        Ok(SnakeGame { term, engine })
    }

    /// Runs until Ctrl+C. The terminal is restored even if setup or the loop fails.
    pub fn run(&mut self) -> Result<()> {
        let played = self.term.setup().context("Failed to set up terminal").and_then(|()| self.play());
        let restored = self.term.restore().context("Failed to restore terminal");

        info!("Quit during {:?} with score {}", self.engine.phase(), self.engine.score());
        first_error(played, restored)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn play(&mut self) -> Result<()> {
        self.redraw()?;
        let mut next_tick = Instant::now() + TICK_INTERVAL;

        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());

            if let Some(ev) = self.term.poll_event(timeout).context("Failed to read terminal event")? {
                match ev {
                    Event::Key(key_ev) if is_ctrl_c(&key_ev) => return Ok(()),
                    Event::Key(key_ev) if key_ev.kind == KeyEventKind::Press => {
                        self.engine.handle_input(Key::from(key_ev.code));
                        self.redraw()?;
                    }
                    Event::Resize(width, height) => {
                        self.term.resize(width, height);
                        self.engine.resize(width, height);
                        self.redraw()?;
                    }
                    _ => {}
                }
                continue;
            }

            if self.engine.tick() == TickEvent::Ate {
                self.term.ring_bell().context("Failed to ring bell")?;
            }
            self.redraw()?;
            next_tick = Instant::now() + TICK_INTERVAL;
        }
    }

    fn redraw(&mut self) -> Result<()> {
        self.engine.render(&mut self.term);
        self.term.present().context("Failed to draw frame")
    }
}

/// The game's own failure wins over a failure to clean up after it.
fn first_error(played: Result<()>, restored: Result<()>) -> Result<()> {
    played.and(restored)
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
