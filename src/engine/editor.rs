//! Line editor for the in-progress guess
//!
//! The editor is a bounded buffer of colors the player has picked but not yet
//! submitted. Overflow and underflow are absorbed silently: frontends gate
//! input with `is_full`/`is_empty`, and the editor stays correct even when
//! they don't.

use crate::core::Color;

/// The guess under construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEditor {
    capacity: usize,
    slots: Vec<Color>,
}

impl LineEditor {
    /// Create an empty editor holding at most `capacity` colors
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            slots: Vec::new(),
        }
    }

    /// Append a color; ignored when the editor is already full
    pub fn select(&mut self, color: Color) {
        if self.slots.len() < self.capacity {
            self.slots.push(color);
        }
    }

    /// Remove the most recently selected color; no-op when empty
    pub fn deselect(&mut self) {
        self.slots.pop();
    }

    /// Drop everything
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Take the buffered colors out, leaving the editor empty
    #[must_use]
    pub fn take(&mut self) -> Vec<Color> {
        std::mem::take(&mut self.slots)
    }

    /// Number of colors selected so far
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no color has been selected
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True when the editor holds a complete guess
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// The colors selected so far, in selection order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Color] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{Blue, Green, Red};

    #[test]
    fn editor_fills_in_order() {
        let mut editor = LineEditor::new(3);
        editor.select(Blue);
        editor.select(Green);
        assert_eq!(editor.as_slice(), &[Blue, Green]);
        assert_eq!(editor.len(), 2);
        assert!(!editor.is_full());
    }

    #[test]
    fn editor_ignores_select_past_capacity() {
        let mut editor = LineEditor::new(2);
        editor.select(Blue);
        editor.select(Green);
        editor.select(Red);
        editor.select(Red);
        assert_eq!(editor.as_slice(), &[Blue, Green]);
        assert!(editor.is_full());
    }

    #[test]
    fn editor_deselect_removes_last() {
        let mut editor = LineEditor::new(3);
        editor.select(Blue);
        editor.select(Green);
        editor.deselect();
        assert_eq!(editor.as_slice(), &[Blue]);
    }

    #[test]
    fn editor_deselect_on_empty_is_noop() {
        let mut editor = LineEditor::new(3);
        editor.deselect();
        editor.deselect();
        assert!(editor.is_empty());
        assert_eq!(editor.len(), 0);
    }

    #[test]
    fn editor_take_leaves_empty() {
        let mut editor = LineEditor::new(2);
        editor.select(Blue);
        editor.select(Green);
        assert_eq!(editor.take(), vec![Blue, Green]);
        assert!(editor.is_empty());
        assert!(!editor.is_full());
    }

    #[test]
    fn editor_zero_capacity_is_always_full() {
        let mut editor = LineEditor::new(0);
        editor.select(Blue);
        assert!(editor.is_empty());
        assert!(editor.is_full());
    }
}
