//! # Free Cursor
//!
//! Cached lowest free slot. Everything below the cursor is occupied.

/// Lowest index not known to be occupied.
///
/// A value equal to the capacity means the pool is full.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FreeCursor {
    next: usize,
}

impl FreeCursor {
    pub(crate) const fn new() -> Self {
        Self { next: 0 }
    }

    /// The cached free slot, or `None` if the pool is full.
    #[inline]
    pub(crate) fn peek(self, capacity: usize) -> Option<usize> {
        (self.next < capacity).then_some(self.next)
    }

    /// Must be called after `index` has been marked occupied.
    ///
    /// Only consuming the cursor's own slot forces a scan.
    #[inline]
    pub(crate) fn on_alloc(&mut self, occupied: &[bool], index: usize) {
        if index == self.next {
            self.advance(occupied);
        }
    }

    /// Must be called after `index` has been marked free.
    #[inline]
    pub(crate) fn on_free(&mut self, index: usize) {
        if index < self.next {
            self.next = index;
        }
    }

    /// Scans strictly forward for the next free slot.
    fn advance(&mut self, occupied: &[bool]) {
        let start = self.next + 1;
        self.next = occupied[start..]
            .iter()
            .position(|&busy| !busy)
            .map_or(occupied.len(), |offset| start + offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_skips_occupied() {
        let mut occupied = [true, true, false, true, false];
        let mut cursor = FreeCursor::new();
        cursor.on_alloc(&occupied, 0);
        assert_eq!(cursor.peek(occupied.len()), Some(2));

        occupied[2] = true;
        cursor.on_alloc(&occupied, 2);
        assert_eq!(cursor.peek(occupied.len()), Some(4));
    }

    #[test]
    fn test_alloc_elsewhere_keeps_cursor() {
        let occupied = [false, false, true];
        let mut cursor = FreeCursor::new();
        cursor.on_alloc(&occupied, 2);
        assert_eq!(cursor.peek(occupied.len()), Some(0));
    }

    #[test]
    fn test_exhausted_sentinel() {
        let occupied = [true, true];
        let mut cursor = FreeCursor::new();
        cursor.on_alloc(&occupied, 0);
        assert_eq!(cursor.peek(occupied.len()), None);
    }

    #[test]
    fn test_free_only_lowers() {
        let occupied = [true, true, true, false];
        let mut cursor = FreeCursor::new();
        cursor.on_alloc(&occupied, 0);
        assert_eq!(cursor.peek(4), Some(3));

        cursor.on_free(1);
        assert_eq!(cursor.peek(4), Some(1));

        cursor.on_free(2);
        assert_eq!(cursor.peek(4), Some(1));
    }
}
