use std::fmt::{Display, Formatter, Result as FmtResult};

/// The two mutually exclusive timer modes.
///
/// Whether a break is long or short is not a sub-state; it is a property of
/// the duration chosen when the break was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    /// Get an initialized [`Phase`]. A session always begins with work.
    pub fn initial() -> Self {
        Self::Work
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Work => f.write_str("Work"),
            Self::Break => f.write_str("Break"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_initial_and_display() {
        assert_eq!(Phase::initial(), Phase::Work);
        assert_eq!(Phase::Work.to_string(), "Work");
        assert_eq!(Phase::Break.to_string(), "Break");
    }
}
