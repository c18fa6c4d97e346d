//! Input state for message composition.
//!
//! Keeps the draft text separate from session state so the input bar can be
//! rendered and tested without touching conversations.

/// Fewest rows the input box shows.
pub const MIN_INPUT_ROWS: usize = 1;
/// Most rows the input box grows to before scrolling.
pub const MAX_INPUT_ROWS: usize = 4;

/// Draft being composed in the input bar.
#[derive(Default, Debug)]
pub struct InputState {
    /// Current message being composed
    pub message_input: String,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the draft has anything worth sending.
    pub fn has_content(&self) -> bool {
        !self.message_input.trim().is_empty()
    }

    /// Take the draft for sending, leaving the box empty.
    ///
    /// Blank drafts are left untouched and yield `None`.
    pub fn take_submission(&mut self) -> Option<String> {
        if !self.has_content() {
            return None;
        }
        Some(std::mem::take(&mut self.message_input))
    }

    /// Rows the input box should show for the current draft.
    pub fn rows(&self) -> usize {
        input_rows(&self.message_input)
    }
}

/// Height of the input box in rows, following the draft's line count.
pub fn input_rows(text: &str) -> usize {
    // A trailing newline starts a new (empty) row that `lines()` would skip.
    let mut lines = text.lines().count();
    if text.ends_with('\n') {
        lines += 1;
    }
    lines.clamp(MIN_INPUT_ROWS, MAX_INPUT_ROWS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_new() {
        let input = InputState::new();
        assert!(input.message_input.is_empty());
        assert!(!input.has_content());
    }

    #[test]
    fn test_take_submission_clears_draft() {
        let mut input = InputState::new();
        input.message_input = "hello\nworld".into();

        assert_eq!(input.take_submission(), Some("hello\nworld".to_string()));
        assert!(input.message_input.is_empty());
    }

    #[test]
    fn test_blank_draft_is_kept() {
        let mut input = InputState::new();
        input.message_input = "  \n\t".into();

        assert_eq!(input.take_submission(), None);
        assert_eq!(input.message_input, "  \n\t");
    }

    #[test]
    fn test_input_rows_bounds() {
        assert_eq!(input_rows(""), 1);
        assert_eq!(input_rows("one line"), 1);
        assert_eq!(input_rows("a\nb"), 2);
        assert_eq!(input_rows("a\nb\n"), 3);
        assert_eq!(input_rows("1\n2\n3\n4\n5\n6\n7"), MAX_INPUT_ROWS);
    }
}
