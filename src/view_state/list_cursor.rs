//! Selection cursor for simple vertical lists
//!
//! Used by the crop gallery and the sync queue, where the list length can
//! change underneath the cursor.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    pub selected: usize,
}

impl ListCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Pull the cursor back inside a list that may have shrunk
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// The selected index, or `None` for an empty list
    pub fn get(&self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.selected.min(len - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut cursor = ListCursor::new();
        cursor.prev();
        assert_eq!(cursor.selected, 0);
        cursor.next(3);
        cursor.next(3);
        cursor.next(3);
        assert_eq!(cursor.selected, 2);
        cursor.clamp(1);
        assert_eq!(cursor.selected, 0);
        assert_eq!(cursor.get(0), None);
        assert_eq!(cursor.get(5), Some(0));
    }
}
