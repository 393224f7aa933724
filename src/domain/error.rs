use thiserror::Error;

/// Errors raised by the clock domain.
///
/// The only fallible step is building the face geometry; every other
/// operation (ticking, angle computation) is total.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClockError {
    /// A construction precondition was violated. The face must not be drawn.
    #[error("contract violation: {0}")]
    ContractViolation(String),
}
