//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only the code and modifiers take part; press/repeat kind and lock
    /// state are ignored.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    /// Bind `key` to `action`, replacing any previous binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }

    /// Keys bound to `action`, for the help overlay.
    pub fn keys_for(&self, action: KeyAction) -> Vec<KeyEvent> {
        let mut keys: Vec<KeyEvent> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect();
        keys.sort_by_key(|k| format!("{:?}", k.code));
        keys
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };
        let none = KeyModifiers::NONE;
        let shift = KeyModifiers::SHIFT;

        // Screens
        bind(KeyCode::Char('1'), none, KeyAction::GoHome);
        bind(KeyCode::Char('2'), none, KeyAction::GoEvents);
        bind(KeyCode::Char('3'), none, KeyAction::GoAbout);
        bind(KeyCode::Char('4'), none, KeyAction::GoContact);
        bind(KeyCode::Char('r'), none, KeyAction::OpenRsvp);
        bind(KeyCode::Char('b'), none, KeyAction::Back);
        bind(KeyCode::Backspace, none, KeyAction::Back);

        // Card selection
        bind(KeyCode::Char('j'), none, KeyAction::SelectNext);
        bind(KeyCode::Down, none, KeyAction::SelectNext);
        bind(KeyCode::Char('k'), none, KeyAction::SelectPrev);
        bind(KeyCode::Up, none, KeyAction::SelectPrev);
        bind(KeyCode::Enter, none, KeyAction::OpenSelected);

        // Filters
        bind(KeyCode::Char('/'), none, KeyAction::StartSearch);
        bind(KeyCode::Char('c'), none, KeyAction::CycleCategory);
        bind(KeyCode::Char('l'), none, KeyAction::CycleCity);
        bind(KeyCode::Char('f'), none, KeyAction::EditFromDate);
        bind(KeyCode::Char('t'), none, KeyAction::EditToDate);
        bind(KeyCode::Char('s'), none, KeyAction::CycleSort);
        bind(KeyCode::Char('x'), none, KeyAction::ClearFilters);

        // Pagination
        bind(KeyCode::Char(']'), none, KeyAction::NextPage);
        bind(KeyCode::Right, none, KeyAction::NextPage);
        bind(KeyCode::PageDown, none, KeyAction::NextPage);
        bind(KeyCode::Char('['), none, KeyAction::PrevPage);
        bind(KeyCode::Left, none, KeyAction::PrevPage);
        bind(KeyCode::PageUp, none, KeyAction::PrevPage);
        bind(KeyCode::Char('g'), none, KeyAction::FirstPage);
        bind(KeyCode::Home, none, KeyAction::FirstPage);
        bind(KeyCode::Char('G'), shift, KeyAction::LastPage);
        bind(KeyCode::Char('G'), none, KeyAction::LastPage);
        bind(KeyCode::End, none, KeyAction::LastPage);
        bind(KeyCode::Char('p'), none, KeyAction::GoToPage);

        // Application
        bind(KeyCode::Char('q'), none, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);
        bind(KeyCode::Char('?'), none, KeyAction::Help);
        bind(KeyCode::Char('?'), shift, KeyAction::Help);

        Self { bindings }
    }
}
