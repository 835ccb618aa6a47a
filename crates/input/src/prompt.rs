//! Board-size prompt.
//!
//! A small line editor that stays open until it yields a valid size or is
//! cancelled. Invalid input is reported through [`SizePrompt::error`] and the
//! prompt keeps collecting keys.

use crossterm::event::KeyCode;

use crate::core::{BoardSize, BoardSizeError};

const MAX_INPUT_LEN: usize = 4;

/// Result of feeding one key to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Still editing.
    Pending,
    /// A valid size was chosen; close the prompt and start a game on it.
    Submitted(BoardSize),
    /// Closed without a choice; keep the current session.
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct SizePrompt {
    input: String,
    first_launch: bool,
    error: Option<BoardSizeError>,
}

impl SizePrompt {
    /// `first_launch` makes cancelling fall back to the default board size,
    /// since there is no session to keep yet.
    pub fn new(first_launch: bool) -> Self {
        Self {
            input: String::with_capacity(MAX_INPUT_LEN),
            first_launch,
            error: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&BoardSizeError> {
        self.error.as_ref()
    }

    pub fn first_launch(&self) -> bool {
        self.first_launch
    }

    pub fn handle_key(&mut self, code: KeyCode) -> PromptOutcome {
        match code {
            KeyCode::Enter => match BoardSize::parse(&self.input) {
                Ok(size) => PromptOutcome::Submitted(size),
                Err(err) => {
                    self.error = Some(err);
                    PromptOutcome::Pending
                }
            },
            KeyCode::Esc => {
                if self.first_launch {
                    PromptOutcome::Submitted(BoardSize::default())
                } else {
                    PromptOutcome::Cancelled
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.error = None;
                PromptOutcome::Pending
            }
            KeyCode::Char(ch) if !ch.is_control() => {
                if self.input.chars().count() < MAX_INPUT_LEN {
                    self.input.push(ch);
                }
                self.error = None;
                PromptOutcome::Pending
            }
            _ => PromptOutcome::Pending,
        }
    }
}
