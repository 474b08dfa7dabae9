//! # High-Water Mark
//!
//! Highest slot index ever allocated. Never decreases.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct HighWaterMark {
    highest: Option<usize>,
}

impl HighWaterMark {
    pub(crate) const fn new() -> Self {
        Self { highest: None }
    }

    #[inline]
    pub(crate) fn record(&mut self, index: usize) {
        self.highest = Some(self.highest.map_or(index, |h| h.max(index)));
    }

    #[inline]
    pub(crate) const fn get(self) -> Option<usize> {
        self.highest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unset() {
        assert_eq!(HighWaterMark::new().get(), None);
    }

    #[test]
    fn test_monotonic() {
        let mut mark = HighWaterMark::new();
        mark.record(3);
        mark.record(1);
        assert_eq!(mark.get(), Some(3));
        mark.record(5);
        assert_eq!(mark.get(), Some(5));
    }

    #[test]
    fn test_zero_is_a_real_mark() {
        let mut mark = HighWaterMark::new();
        mark.record(0);
        assert_eq!(mark.get(), Some(0));
    }
}
