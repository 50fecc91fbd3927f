//! Scoring module - fixed per-landing bonus table
//!
//! One landing earns exactly one tier, chosen by how many rows it cleared:
//! 0 → 0, 1 → 100, 2 → 300, 3 → 700, 4 or more → 1000.

use crate::types::LINE_CLEAR_SCORES;

/// Points for a single landing that cleared `lines` rows
pub fn line_clear_score(lines: usize) -> u32 {
    let tier = lines.min(LINE_CLEAR_SCORES.len() - 1);
    LINE_CLEAR_SCORES[tier]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_tiers() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 300);
        assert_eq!(line_clear_score(3), 700);
        assert_eq!(line_clear_score(4), 1000);
    }

    #[test]
    fn test_more_than_four_caps_at_top_tier() {
        // Only reachable with custom shapes or a pre-filled board.
        assert_eq!(line_clear_score(5), 1000);
        assert_eq!(line_clear_score(20), 1000);
    }
}
