//! Star rating read from the emoji string the scorer returns.

use std::fmt;

pub const STAR: char = '⭐';
const VARIATION_SELECTOR: char = '\u{fe0f}';

/// Rating assigned to a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StarRating {
    /// Between one and five stars.
    Stars(u8),
    /// Whatever the model answered when it did not reply with one to five stars.
    Unrecognized(String),
}

impl StarRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&stars)
            .then_some(Self::Stars(stars))
    }

    /// Count star emojis; any other visible character leaves the answer unrecognized.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let unrecognized = || Self::Unrecognized(raw.to_string());
        let mut count = 0usize;
        for c in raw.chars() {
            match c {
                STAR => count += 1,
                VARIATION_SELECTOR => {}
                c if c.is_whitespace() => {}
                _ => return unrecognized(),
            }
        }
        u8::try_from(count)
            .ok()
            .and_then(Self::new)
            .unwrap_or_else(unrecognized)
    }

    pub fn stars(&self) -> Option<u8> {
        match self {
            Self::Stars(n) => Some(*n),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.stars().is_some()
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stars(n) => f.write_str(&STAR.to_string().repeat(*n as usize)),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_stars() {
        assert_eq!(StarRating::parse("⭐⭐").stars(), Some(2));
        assert_eq!(StarRating::parse(" ⭐ ⭐ ⭐\n").stars(), Some(3));
        assert_eq!(StarRating::parse("⭐\u{fe0f}⭐\u{fe0f}").stars(), Some(2));
    }

    #[test]
    fn text_and_out_of_range_counts_stay_unrecognized() {
        for raw in ["", "4 estrellas", "⭐⭐⭐⭐⭐⭐", "★★", "⭐⭐."] {
            assert_eq!(
                StarRating::parse(raw),
                StarRating::Unrecognized(raw.to_string()),
                "{raw:?} should not be counted"
            );
        }
        assert_eq!(StarRating::parse("  cinco "), StarRating::Unrecognized("cinco".into()));
    }

    #[test]
    fn display_matches_star_count() {
        assert_eq!(StarRating::new(4).unwrap().to_string(), "⭐⭐⭐⭐");
        assert!(StarRating::new(0).is_none());
        assert!(StarRating::new(6).is_none());
    }
}
