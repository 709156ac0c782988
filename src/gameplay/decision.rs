use super::error::TableError;

/// The shell's answer at a hit/stay prompt.
///
/// This is the only external input the round consumes. It feeds the
/// player machine's `Continue → Hit | Stay` transition; everything else
/// the round does is internal to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stay,
}

/// str isomorphism, tolerant of the usual table talk
impl TryFrom<&str> for Decision {
    type Error = TableError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "h" | "hit" | "y" | "yes" => Ok(Self::Hit),
            "s" | "stay" | "stand" | "n" | "no" => Ok(Self::Stay),
            other => Err(TableError::InvalidDecision(other.to_string())),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hit => write!(f, "hit"),
            Self::Stay => write!(f, "stay"),
        }
    }
}
