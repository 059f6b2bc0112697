//! Scoring module - line-clear points, levels and drop speed

use crate::types::{DROP_STEP_MS, INITIAL_DROP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_DROP_MS};

/// Points for clearing `lines` rows in one lock at `level` (1-based).
///
/// Returns 0 for zero lines or counts outside the table.
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    match LINE_SCORES.get(lines as usize) {
        Some(&base) => base.saturating_mul(level),
        None => 0,
    }
}

/// Level reached after `lines` cumulative cleared lines (starts at 1)
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Drop interval for a level, floored at [`MIN_DROP_MS`]
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    INITIAL_DROP_MS.saturating_sub(speedup).max(MIN_DROP_MS)
}
