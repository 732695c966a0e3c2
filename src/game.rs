use std::thread::sleep;

use anyhow::{Context, Result};
use crossterm::event::Event;
use log::info;

use crate::config::GameConfig;
use crate::input::{is_quit, Key, KeyState};
use crate::render;
use crate::state::{GameState, StepOutcome};
use crate::term::TermManager;

const TOO_SMALL_MESSAGE: &str =
    "Sorry!  The snake game is only available on devices with a larger screen size than this one.";

/// What the frame loop should do after handling the pending events.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Control {
    Continue,
    Quit,
}

/// Reaction to the terminal size after a resize.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum SizeAction {
    ShowNotice,
    Restart,
    Keep,
}

fn size_transition(fits: bool, showing_notice: bool) -> SizeAction {
    match (fits, showing_notice) {
        (false, _) => SizeAction::ShowNotice,
        (true, true) => SizeAction::Restart,
        (true, false) => SizeAction::Keep,
    }
}

/// One frame of game time. The run is frozen while the notice covers it.
fn advance(state: &mut GameState, keys: &mut KeyState, showing_notice: bool) -> Option<StepOutcome> {
    if showing_notice {
        None
    } else {
        Some(state.update(keys))
    }
}

/// Throws the current run away, the way a fresh start would.
fn restart_run(state: &mut GameState, keys: &mut KeyState) {
    keys.clear();
    state.reset();
}

pub struct SnakeGame {
    config: GameConfig,
    term: TermManager,
    state: GameState,
    keys: KeyState,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> Result<Self> {
        let surface = config.surface_size().context("grid does not fit in a terminal")?;
        let term = TermManager::new(surface).context("reading terminal size")?;
        let state = GameState::new(config.clone());
        Ok(SnakeGame { config, term, state, keys: KeyState::new() })
    }

    /// Takes over the terminal, runs until the player quits and gives the
    /// terminal back even when the loop fails.
    pub fn run(&mut self) -> Result<()> {
        self.term.setup().context("setting up terminal")?;
        let res = self.play();
        let restored = self.term.restore().context("restoring terminal");
        res.and(restored)
    }

    fn play(&mut self) -> Result<()> {
        self.term.clear()?;
        self.check_size()?;

        loop {
            sleep(self.config.frame_interval);

            if self.handle_events()? == Control::Quit {
                info!("quit with score {}", self.state.score());
                return Ok(());
            }

            if advance(&mut self.state, &mut self.keys, self.term.has_message()).is_none() {
                continue;
            }
            render::draw(&self.state, &mut self.term).context("drawing frame")?;
        }
    }

    fn handle_events(&mut self) -> Result<Control> {
        for event in self.term.read_events_queue().context("reading terminal events")? {
            match event {
                Event::Key(ev) if is_quit(&ev) => return Ok(Control::Quit),
                Event::Key(ev) => {
                    if let Some(key) = Key::from_code(ev.code) {
                        self.keys.press(key);
                    }
                },
                Event::Resize(width, height) => {
                    self.term.resize(width, height);
                    self.check_size()?;
                },
                _ => {}
            }
        }

        Ok(Control::Continue)
    }

    /// Swaps the board for a notice on terminals that are too small, and
    /// starts a fresh run once the board fits again.
    fn check_size(&mut self) -> Result<()> {
        let (width, height) = self.term.get_terminal_size();

        match size_transition(self.term.fits(), self.term.has_message()) {
            SizeAction::ShowNotice => {
                info!("terminal {}x{} too small for the board", width, height);
                self.term.clear()?;
                self.term.show_message(TOO_SMALL_MESSAGE)?;
            },
            SizeAction::Restart => {
                info!("terminal {}x{} fits the board again, restarting", width, height);
                self.term.hide_message()?;
                self.term.clear()?;
                restart_run(&mut self.state, &mut self.keys);
            },
            SizeAction::Keep => {}
        }

        Ok(())
    }
}
