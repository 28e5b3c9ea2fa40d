//! Focus tracking over the fields of a wizard step

/// Index of the focused field within the active step's visible fields.
///
/// The field list changes when a toggle hides or reveals a sibling, so the
/// index is always interpreted against the current list and clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldFocus {
    index: usize,
}

impl FieldFocus {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next field, wrapping to the first
    pub fn next(&mut self, count: usize) {
        if count == 0 {
            self.index = 0;
            return;
        }
        self.index = (self.index.min(count - 1) + 1) % count;
    }

    /// Move to the previous field, wrapping to the last
    pub fn prev(&mut self, count: usize) {
        if count == 0 {
            self.index = 0;
            return;
        }
        let current = self.index.min(count - 1);
        self.index = if current == 0 { count - 1 } else { current - 1 };
    }

    /// Keep the index inside a list that may have shrunk
    pub fn clamp(&mut self, count: usize) {
        self.index = self.index.min(count.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn focused<T: Copy>(&self, fields: &[T]) -> Option<T> {
        fields
            .get(self.index)
            .or_else(|| fields.last())
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut focus = FieldFocus::default();
        focus.next(3);
        focus.next(3);
        assert_eq!(focus.index(), 2);
        focus.next(3);
        assert_eq!(focus.index(), 0);
    }

    #[test]
    fn test_prev_wraps() {
        let mut focus = FieldFocus::default();
        focus.prev(4);
        assert_eq!(focus.index(), 3);
        focus.prev(4);
        assert_eq!(focus.index(), 2);
    }

    #[test]
    fn test_empty_list_stays_at_zero() {
        let mut focus = FieldFocus::default();
        focus.next(0);
        focus.prev(0);
        assert_eq!(focus.index(), 0);
        assert_eq!(focus.focused::<u8>(&[]), None);
    }

    #[test]
    fn test_clamp_after_list_shrinks() {
        let mut focus = FieldFocus::default();
        focus.prev(5);
        focus.clamp(3);
        assert_eq!(focus.index(), 2);
        assert_eq!(focus.focused(&['a', 'b', 'c']), Some('c'));
    }

    #[test]
    fn test_focused_past_end_falls_back_to_last() {
        let mut focus = FieldFocus::default();
        focus.prev(5);
        assert_eq!(focus.focused(&[1, 2]), Some(2));
    }

    #[test]
    fn test_next_from_stale_index() {
        let mut focus = FieldFocus::default();
        focus.prev(5);
        // list shrank to two entries without a clamp
        focus.next(2);
        assert_eq!(focus.index(), 0);
    }
}
