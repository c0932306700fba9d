use thiserror::Error;

/// Errors that can occur while building or running an SML program.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VMError {
    /// Register name outside the SML register file.
    #[error("unknown register {name}")]
    UnknownRegister { name: String },
    /// Label defined more than once in a program.
    #[error("duplicate label: {label}")]
    DuplicateLabel { label: String },
    /// Reference to a label no instruction carries.
    #[error("undefined label: {label}")]
    UndefinedLabel { label: String },
    /// Control transfer past the end of the program.
    #[error("jump target {target} outside program of {len} instructions")]
    InvalidJumpTarget { target: usize, len: usize },
    /// Run loop hit the configured step limit.
    #[error("step limit of {limit} exceeded at pc {pc}")]
    StepLimitExceeded { limit: u64, pc: usize },
    /// Malformed configuration value.
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}
