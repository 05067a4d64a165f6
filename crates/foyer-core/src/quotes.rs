//! The quote catalog and its rotation cursor.

/// Fixed, ordered catalog shown on the quotes panel.
pub const QUOTES: &[&str] = &[
    "Hi, I'm Kent C. Dodds. I help people make the world better through quality software.",
    "The more your tests resemble the way your software is used, the more confidence they can give you.",
    "Write tests. Not too many. Mostly integration.",
];

/// Attribution appended to every quote.
pub const ATTRIBUTION: &str = "Kent C. Dodds";

/// Cursor into [`QUOTES`], advanced modulo the catalog length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteCycle {
    index: usize,
}

impl QuoteCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The quote currently selected.
    pub fn current(&self) -> &'static str {
        QUOTES[self.index]
    }

    /// Moves to the next quote, wrapping to the start after the last one.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % QUOTES.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_quote() {
        assert_eq!(QuoteCycle::new().current(), QUOTES[0]);
    }

    #[test]
    fn test_advance_moves_in_order() {
        let mut cycle = QuoteCycle::new();
        cycle.advance();
        assert_eq!(cycle.current(), QUOTES[1]);
        cycle.advance();
        assert_eq!(cycle.current(), QUOTES[2]);
    }

    #[test]
    fn test_wraps_after_full_cycle() {
        let mut cycle = QuoteCycle::new();
        for _ in 0..QUOTES.len() {
            cycle.advance();
        }
        assert_eq!(cycle.current(), QUOTES[0]);
    }

    #[test]
    fn test_reading_does_not_advance() {
        let mut cycle = QuoteCycle::new();
        cycle.advance();
        let first_read = cycle.current();
        let second_read = cycle.current();
        assert_eq!(first_read, second_read);
    }
}
