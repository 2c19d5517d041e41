use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::domain::{suggestion_prompts, Conversation, DomainError};

/// What the event loop should do after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum AppAction {
    None,
    /// Start a relay request for this text.
    Submit(String),
    Quit,
}

/// Frames of the typing indicator.
const TYPING_FRAMES: &[&str] = &["●    ", "● ●  ", "● ● ●"];

/// UI state of the terminal front-end: the conversation plus the composer.
pub struct ChatApp {
    conversation: Conversation,
    draft: String,
    suggestions: Vec<&'static str>,
    selected_suggestion: usize,
    tick: usize,
}

impl ChatApp {
    pub fn new() -> Self {
        Self {
            conversation: Conversation::new(),
            draft: String::new(),
            suggestions: suggestion_prompts(),
            selected_suggestion: 0,
            tick: 0,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }

    pub fn selected_suggestion(&self) -> usize {
        self.selected_suggestion
    }

    /// The welcome screen is shown until the first message.
    pub fn shows_welcome(&self) -> bool {
        self.conversation.is_empty()
    }

    pub fn shows_typing_indicator(&self) -> bool {
        self.conversation.is_loading()
    }

    pub fn input_enabled(&self) -> bool {
        !self.conversation.is_loading()
    }

    pub fn typing_frame(&self) -> &'static str {
        TYPING_FRAMES[self.tick % TYPING_FRAMES.len()]
    }

    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.kind != KeyEventKind::Press {
            return AppAction::None;
        }

        let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if key.code == KeyCode::Esc || ctrl_c {
            return AppAction::Quit;
        }

        if !self.input_enabled() {
            return AppAction::None;
        }

        match key.code {
            KeyCode::Enter => {
                if !self.draft.trim().is_empty() {
                    self.submit_draft()
                } else if self.shows_welcome() {
                    self.submit_suggestion(self.selected_suggestion)
                } else {
                    AppAction::None
                }
            }
            KeyCode::Up if self.browsing_suggestions() => {
                self.move_selection(-1);
                AppAction::None
            }
            KeyCode::Down if self.browsing_suggestions() => {
                self.move_selection(1);
                AppAction::None
            }
            KeyCode::Backspace => {
                self.draft.pop();
                AppAction::None
            }
            KeyCode::Char(c) => {
                self.draft.push(c);
                AppAction::None
            }
            _ => AppAction::None,
        }
    }

    /// Send whatever is in the composer and clear it.
    pub fn submit_draft(&mut self) -> AppAction {
        let content = self.draft.clone();
        match self.conversation.begin_turn(&content) {
            Ok(outgoing) => {
                self.draft.clear();
                AppAction::Submit(outgoing)
            }
            Err(_) => AppAction::None,
        }
    }

    /// Send a suggestion directly; the composer keeps its contents.
    pub fn submit_suggestion(&mut self, index: usize) -> AppAction {
        let Some(prompt) = self.suggestions.get(index).copied() else {
            return AppAction::None;
        };

        match self.conversation.begin_turn(prompt) {
            Ok(outgoing) => AppAction::Submit(outgoing),
            Err(_) => AppAction::None,
        }
    }

    /// The relay answered (or failed).
    pub fn on_reply(&mut self, reply: Result<String, DomainError>) {
        if let Err(e) = self.conversation.finish_turn(reply) {
            debug!(error = %e, "reply arrived without a pending turn");
        }
    }

    fn browsing_suggestions(&self) -> bool {
        self.shows_welcome() && self.draft.is_empty()
    }

    fn move_selection(&mut self, delta: isize) {
        if self.suggestions.is_empty() {
            return;
        }
        let len = self.suggestions.len() as isize;
        let next = (self.selected_suggestion as isize + delta).rem_euclid(len);
        self.selected_suggestion = next as usize;
    }
}

impl Default for ChatApp {
    fn default() -> Self {
        Self::new()
    }
}
