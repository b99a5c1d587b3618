//! Result count line

use std::fmt;

use crate::query::Mode;

/// Shown/total counts for the active mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub mode: Mode,
    pub shown: usize,
    pub total: usize,
}

impl ResultSummary {
    pub fn new(mode: Mode, shown: usize, total: usize) -> Self {
        Self { mode, shown, total }
    }

    /// Check if nothing is filtered out
    pub fn is_unfiltered(&self) -> bool {
        self.shown == self.total
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unfiltered() {
            let noun = match self.mode {
                Mode::Recipes => "recipes",
                Mode::Goods => "windmill goods",
                Mode::All => "items",
            };
            return write!(f, "Showing all {} {}", self.total, noun);
        }

        let noun = match self.mode {
            Mode::Recipes => "recipe",
            Mode::Goods | Mode::All => "item",
        };
        let plural = if self.shown == 1 { "" } else { "s" };
        write!(f, "{} {}{} found", self.shown, noun, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_text() {
        assert_eq!(ResultSummary::new(Mode::Recipes, 4, 4).to_string(), "Showing all 4 recipes");
        assert_eq!(ResultSummary::new(Mode::Goods, 9, 9).to_string(), "Showing all 9 windmill goods");
        assert_eq!(ResultSummary::new(Mode::Recipes, 1, 4).to_string(), "1 recipe found");
        assert_eq!(ResultSummary::new(Mode::All, 0, 12).to_string(), "0 items found");
        assert_eq!(ResultSummary::new(Mode::Goods, 3, 9).to_string(), "3 items found");
    }
}
