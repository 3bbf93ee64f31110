//! Expansion budget for bounded searches.

use std::fmt;

/// How many expansions one bounded search may perform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpansionBudget {
    /// Search until the goal is popped.
    #[default]
    Unbounded,
    /// Stop once this many nodes have been expanded.
    Expansions(u64),
}

impl ExpansionBudget {
    /// Command-line convention: any negative value means unbounded.
    pub fn from_signed(n: i64) -> Self {
        u64::try_from(n).map_or(ExpansionBudget::Unbounded, ExpansionBudget::Expansions)
    }

    /// `true` once `used` expansions exhaust the budget.
    #[inline]
    pub fn is_exhausted(self, used: u64) -> bool {
        match self {
            ExpansionBudget::Unbounded => false,
            ExpansionBudget::Expansions(n) => used >= n,
        }
    }

    pub fn is_bounded(self) -> bool {
        matches!(self, ExpansionBudget::Expansions(_))
    }
}

impl fmt::Display for ExpansionBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpansionBudget::Unbounded => f.write_str("unbounded"),
            ExpansionBudget::Expansions(n) => write!(f, "{n} expansions"),
        }
    }
}
