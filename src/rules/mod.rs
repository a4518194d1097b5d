//! Game rules for Renju
//!
//! This module implements the rule set for standard 15x15 renju:
//! - Win condition (five in a row)
//! - Whole-board legality for Black (double-three, double-four, overline)
//! - Point-anchored forbidden test used when ranking candidate moves
//!
//! White is never restricted.

pub mod forbidden;
pub mod legality;
pub mod line;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{forbidden_at, is_forbidden};
pub use legality::{check_legal, count_fours, has_double_three, has_overline};
pub use line::{scan_run, EndState, LineRun};
pub use win::{check_win, find_five};

/// Renju rule broken by a Black stone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForbiddenReason {
    /// Two or more open threes at once
    DoubleThree,
    /// Two or more fours at once
    DoubleFour,
    /// Six or more in a row
    Overline,
}

impl std::fmt::Display for ForbiddenReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ForbiddenReason::DoubleThree => "double three",
            ForbiddenReason::DoubleFour => "double four",
            ForbiddenReason::Overline => "overline",
        };
        f.write_str(name)
    }
}
