use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IsomorphError>;

/// Errors surfaced by the discovery engine and its drivers.
///
/// The engine itself is total over well-formed input; everything here is
/// either a rejected configuration or a resource guard tripping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsomorphError {
    /// A tolerance or budget was set to a value that would silently empty
    /// the result set or run forever.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Discovery did not reach a fixed point within the configured number
    /// of rounds.
    #[error("discovery exceeded the round budget of {max_rounds}")]
    RoundBudgetExceeded { max_rounds: usize },

    /// Autokey stripping was asked for parameters it cannot honor.
    #[error("autokey parameters out of range: key_len={key_len}, modulus={modulus}")]
    InvalidAutokey { key_len: usize, modulus: u32 },
}
