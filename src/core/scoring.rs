//! Scoring module - line-clear points, level, and drop speed
//!
//! Pure progression math over caller-owned counters. The caller passes in
//! its current totals and gets new scalars back; nothing here holds state.

use crate::types::{
    BASE_DROP_MS, DROP_SPEEDUP_PER_LEVEL_MS, DROP_SPEED_FLOOR_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for clearing `lines_cleared` rows at once at the given level.
/// 0 lines scores 0; base points are 100/300/500/800 for 1-4 lines, times
/// the level. Counts above 4 are unreachable with 4-cell pieces and score 0.
pub fn calculate_score(lines_cleared: u32, level: u32) -> u32 {
    if lines_cleared == 0 || lines_cleared as usize >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines_cleared as usize] * level
}

/// Level for a total line count: level 1 for 0-9 lines, 2 for 10-19, etc.
pub fn calculate_level(total_lines: u32) -> u32 {
    1 + total_lines / LINES_PER_LEVEL
}

/// Milliseconds per automatic downward step at the given level.
/// Starts at 1000ms and speeds up 100ms per level, floored at 100ms.
pub fn drop_speed_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_sub(1) * DROP_SPEEDUP_PER_LEVEL_MS)
        .max(DROP_SPEED_FLOOR_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_zero_lines() {
        for level in 1..=10 {
            assert_eq!(calculate_score(0, level), 0);
        }
    }

    #[test]
    fn test_score_table() {
        assert_eq!(calculate_score(1, 1), 100);
        assert_eq!(calculate_score(1, 2), 200);
        assert_eq!(calculate_score(2, 1), 300);
        assert_eq!(calculate_score(2, 3), 900);
        assert_eq!(calculate_score(3, 1), 500);
        assert_eq!(calculate_score(4, 1), 800);
        assert_eq!(calculate_score(4, 5), 4000);
    }

    #[test]
    fn test_score_scales_with_level() {
        assert_eq!(calculate_score(1, 10), 1000);
        assert_eq!(calculate_score(4, 10), 8000);
    }

    #[test]
    fn test_score_above_four_lines_unreachable() {
        assert_eq!(calculate_score(5, 1), 0);
        assert_eq!(calculate_score(100, 10), 0);
    }

    #[test]
    fn test_level_progression() {
        assert_eq!(calculate_level(0), 1);
        assert_eq!(calculate_level(5), 1);
        assert_eq!(calculate_level(9), 1);
        assert_eq!(calculate_level(10), 2);
        assert_eq!(calculate_level(19), 2);
        assert_eq!(calculate_level(20), 3);
        assert_eq!(calculate_level(50), 6);
        assert_eq!(calculate_level(100), 11);
        assert_eq!(calculate_level(999), 100);
    }

    #[test]
    fn test_drop_speed() {
        assert_eq!(drop_speed_ms(1), 1000);
        assert_eq!(drop_speed_ms(2), 900);
        assert_eq!(drop_speed_ms(3), 800);
        assert_eq!(drop_speed_ms(5), 600);
        assert_eq!(drop_speed_ms(10), 100);
        assert_eq!(drop_speed_ms(20), 100);
    }

    #[test]
    fn test_drop_speed_floor() {
        for level in 1..=100 {
            assert!(drop_speed_ms(level) >= DROP_SPEED_FLOOR_MS);
        }
    }
}
