//! Single-line text editing (pure state transitions).
//!
//! Used by the search boxes, the date-range inputs and every form field.
//! The cursor counts characters, not bytes, so multi-byte input edits
//! correctly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Editable text with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

/// What an edit key did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The text changed.
    Changed,
    /// Only the cursor moved, or nothing happened.
    Unchanged,
    /// The key is not an editing key.
    Ignored,
}

impl TextInput {
    /// Input holding `text` with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when there is no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Insert `ch` at the cursor and advance.
pub fn handle_char_input(mut input: TextInput, ch: char) -> TextInput {
    let at = input.byte_index(input.cursor);
    input.text.insert(at, ch);
    input.cursor += 1;
    input
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(mut input: TextInput) -> TextInput {
    if input.cursor == 0 {
        return input;
    }
    let at = input.byte_index(input.cursor - 1);
    input.text.remove(at);
    input.cursor -= 1;
    input
}

/// Delete the character under the cursor. No-op at the end.
pub fn handle_delete(mut input: TextInput) -> TextInput {
    if input.cursor >= input.char_count() {
        return input;
    }
    let at = input.byte_index(input.cursor);
    input.text.remove(at);
    input
}

/// Move the cursor left. Saturates at 0.
pub fn handle_cursor_left(mut input: TextInput) -> TextInput {
    input.cursor = input.cursor.saturating_sub(1);
    input
}

/// Move the cursor right. Saturates at the end of the text.
pub fn handle_cursor_right(mut input: TextInput) -> TextInput {
    input.cursor = (input.cursor + 1).min(input.char_count());
    input
}

/// Move the cursor to the start.
pub fn handle_home(mut input: TextInput) -> TextInput {
    input.cursor = 0;
    input
}

/// Move the cursor to the end.
pub fn handle_end(mut input: TextInput) -> TextInput {
    input.cursor = input.char_count();
    input
}

/// Apply an editing key.
///
/// Characters typed with Ctrl or Alt are not text and are ignored, as are
/// keys with no editing meaning (Enter, Esc, Tab, ...).
pub fn apply_edit_key(input: &mut TextInput, key: KeyEvent) -> EditOutcome {
    let before_text = input.text.len();
    let current = std::mem::take(input);
    let (next, outcome) = match key.code {
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            (handle_char_input(current, ch), EditOutcome::Changed)
        }
        KeyCode::Backspace => {
            let next = handle_backspace(current);
            let outcome = if next.text.len() == before_text {
                EditOutcome::Unchanged
            } else {
                EditOutcome::Changed
            };
            (next, outcome)
        }
        KeyCode::Delete => {
            let next = handle_delete(current);
            let outcome = if next.text.len() == before_text {
                EditOutcome::Unchanged
            } else {
                EditOutcome::Changed
            };
            (next, outcome)
        }
        KeyCode::Left => (handle_cursor_left(current), EditOutcome::Unchanged),
        KeyCode::Right => (handle_cursor_right(current), EditOutcome::Unchanged),
        KeyCode::Home => (handle_home(current), EditOutcome::Unchanged),
        KeyCode::End => (handle_end(current), EditOutcome::Unchanged),
        _ => (current, EditOutcome::Ignored),
    };
    *input = next;
    outcome
}

#[cfg(test)]
#[path = "text_input_tests.rs"]
mod tests;
