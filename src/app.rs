//! App controller: owns the session and routes terminal events to it.
//!
//! The controller is the only owner of the [`GameState`]; there is none until
//! the first board size is chosen. Every handled event that changes what is on
//! screen marks the app dirty, and the binary redraws only then.

use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::core::{BoardSize, GameSnapshot, GameState};
use crate::input::{
    handle_key_event, is_interrupt, left_click, should_quit, KeyCommand, PromptOutcome, SizePrompt,
};
use crate::term::{FrameBuffer, GameView, PromptView, ToolbarButton, ViewHit, Viewport};
use crate::types::{GameAction, Square};
use crate::AppConfig;

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    game: Option<GameState>,
    prompt: Option<SizePrompt>,
    view: GameView,
    viewport: Viewport,
    seed: u32,
    dirty: bool,
}

impl App {
    /// Start on the configured board size, or ask for one.
    pub fn new(config: &AppConfig, viewport: Viewport) -> Self {
        let mut app = Self {
            game: None,
            prompt: None,
            view: GameView::default().with_ascii_queen(config.ascii_queen),
            viewport,
            seed: config.seed,
            dirty: true,
        };
        match config.board_size {
            Some(size) => app.start_session(size),
            None => app.prompt = Some(SizePrompt::new(true)),
        }
        app
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn prompt(&self) -> Option<&SizePrompt> {
        self.prompt.as_ref()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Return and clear the redraw flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn handle_event(&mut self, event: Event) -> Flow {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => {
                if let Some((x, y)) = left_click(&mouse) {
                    self.handle_click(x, y);
                }
                Flow::Continue
            }
            Event::Resize(w, h) => {
                self.viewport = Viewport::new(w, h);
                self.dirty = true;
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if is_interrupt(key) {
            return Flow::Quit;
        }

        if let Some(prompt) = self.prompt.as_mut() {
            let before = (prompt.input().len(), prompt.error().cloned());
            match prompt.handle_key(key.code) {
                PromptOutcome::Pending => {
                    // Keys the prompt ignores (arrows, function keys) leave the screen alone.
                    if before != (prompt.input().len(), prompt.error().cloned()) {
                        self.dirty = true;
                        if let Some(err) = prompt.error() {
                            log::warn!("rejected board size {:?}: {err}", prompt.input());
                        }
                    }
                }
                PromptOutcome::Submitted(size) => {
                    self.prompt = None;
                    self.start_session(size);
                }
                PromptOutcome::Cancelled => {
                    log::debug!("size prompt cancelled");
                    self.prompt = None;
                    self.dirty = true;
                }
            }
            return Flow::Continue;
        }

        if should_quit(key) {
            return Flow::Quit;
        }

        match handle_key_event(key) {
            Some(KeyCommand::ChangeSize) => self.open_prompt(),
            Some(KeyCommand::Action(action)) => {
                self.apply(action);
            }
            None => {}
        }
        Flow::Continue
    }

    /// Clicks are ignored while the size prompt is open, like a modal dialog.
    fn handle_click(&mut self, x: u16, y: u16) {
        if self.prompt.is_some() {
            return;
        }
        let size = self.game.as_ref().map(GameState::size);
        match self.view.hit_test(size, self.viewport, x, y) {
            Some(ViewHit::Square(sq)) => {
                self.click_square(sq);
            }
            Some(ViewHit::Button(ToolbarButton::Size)) => self.open_prompt(),
            Some(ViewHit::Button(ToolbarButton::Reset)) => {
                self.apply(GameAction::Reset);
            }
            Some(ViewHit::Button(ToolbarButton::Queen)) => {
                self.apply(GameAction::RandomizeQueen);
            }
            Some(ViewHit::Button(ToolbarButton::Block)) => {
                self.apply(GameAction::RandomizeBlock);
            }
            None => {}
        }
    }

    fn click_square(&mut self, sq: Square) -> bool {
        let moved = self.apply(GameAction::MoveTo(sq));
        if !moved {
            log::debug!("ignored click on ({}, {})", sq.row, sq.col);
        }
        moved
    }

    fn open_prompt(&mut self) {
        self.prompt = Some(SizePrompt::new(self.game.is_none()));
        self.dirty = true;
    }

    /// Apply an action to the running game. Returns whether anything changed.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let Some(game) = self.game.as_mut() else {
            return false;
        };
        let changed = game.apply_action(action);
        if changed {
            self.dirty = true;
            log::debug!(
                "{}: queen=({}, {}) blocked=({}, {}) moves={}",
                action.as_str(),
                game.queen().row,
                game.queen().col,
                game.blocked().row,
                game.blocked().col,
                game.move_count()
            );
        }
        changed
    }

    /// Start a game on `size`, replacing the current one if any.
    ///
    /// The block placement inside new-game setup does not trigger its own
    /// redraw; the whole transition is one dirty mark.
    fn start_session(&mut self, size: BoardSize) {
        match self.game.as_mut() {
            Some(game) => game.resize(size),
            None => self.game = Some(GameState::new(size, self.seed)),
        }
        self.dirty = true;
        log::info!("new game on a {size} board (seed {})", self.seed);
    }

    pub fn snapshot(&self) -> Option<GameSnapshot> {
        self.game.as_ref().map(GameState::snapshot)
    }

    /// Draw the current screen into `fb`.
    pub fn render_into(&self, fb: &mut FrameBuffer) {
        let snap = self.snapshot();
        let error = self
            .prompt
            .as_ref()
            .and_then(|p| p.error())
            .map(|e| e.to_string());
        let prompt_view = self.prompt.as_ref().map(|p| PromptView {
            input: p.input(),
            error: error.as_deref(),
            first_launch: p.first_launch(),
        });
        self.view
            .render_into(snap.as_ref(), prompt_view.as_ref(), self.viewport, fb);
    }
}
