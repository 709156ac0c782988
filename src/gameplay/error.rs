/// Engine failures surfaced to the shell.
///
/// Neither is recoverable inside the engine: an empty shoe means the
/// replenish invariant was broken and the round aborts, while an invalid
/// decision is bounced back to the prompt to be asked again, never
/// silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("drew from an empty shoe")]
    EmptyShoe,
    #[error("expected hit or stay, got {0:?}")]
    InvalidDecision(String),
}
