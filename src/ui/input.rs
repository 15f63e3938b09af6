//! Keyboard input handling with vim-style navigation support.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Roving focus over the tab list
    FocusPrev,
    FocusNext,

    // Selection
    /// Activate the tab currently holding the focus stop
    Activate,
    /// Activate a tab directly by position (the pointer-click analog)
    ActivateIndex(usize),

    // Navigation drawer
    ToggleNav,

    // Misc
    Help,
    Back,
    Quit,
}

/// Keyboard bindings configuration
pub struct KeyBindings {
    pub vim_navigation: bool,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            vim_navigation: true,
        }
    }
}

/// Input handler for processing keyboard events
pub struct InputHandler {
    bindings: KeyBindings,
}

impl InputHandler {
    /// Create a new input handler
    pub fn new(vim_navigation: bool) -> Self {
        Self {
            bindings: KeyBindings { vim_navigation },
        }
    }

    /// Handle a key event and return the corresponding action
    pub fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C first
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            // Roving focus - arrow keys always work
            KeyCode::Left => Some(Action::FocusPrev),
            KeyCode::Right => Some(Action::FocusNext),

            // Vim-style aliases (h/l)
            KeyCode::Char('h') if self.bindings.vim_navigation => Some(Action::FocusPrev),
            KeyCode::Char('l') if self.bindings.vim_navigation => Some(Action::FocusNext),

            // Activation
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
            KeyCode::Char(c @ '1'..='9') => {
                Some(Action::ActivateIndex(c as usize - '1' as usize))
            }

            // Navigation drawer
            KeyCode::Char('m') => Some(Action::ToggleNav),

            // Back/Quit
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Char('q') => Some(Action::Quit),

            // Misc
            KeyCode::Char('?') => Some(Action::Help),

            _ => None,
        }
    }
}
