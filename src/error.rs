use thiserror::Error;

/// Recoverable failures of the split and reconstruct operations.
///
/// Violated sampler preconditions (an empty batch request, a zero bit
/// width, an exhausted rejection cap) are caller bugs and panic instead of
/// appearing here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShamirError {
    #[error("secret must be strictly less than the prime modulus")]
    SecretTooLarge,

    #[error("threshold must satisfy 1 <= threshold <= num_shares, got threshold={threshold} with num_shares={num_shares}")]
    InvalidThreshold { threshold: u32, num_shares: u32 },

    #[error("modulus failed the probabilistic primality test")]
    CompositeModulus,

    /// A generated share coordinate coincided with the secret, which would
    /// hand the secret out verbatim. The whole batch is rejected.
    #[error("a generated share coordinate collided with the secret")]
    SecretLeakingShare,

    #[error("no shares were supplied")]
    NoShares,

    #[error("share coordinate is not an element of the field (>= modulus)")]
    CoordinateTooLarge,

    /// No modular inverse exists during interpolation, which happens
    /// exactly when the supplied shares contain duplicate x-coordinates.
    #[error("no modular inverse exists: duplicate share x-coordinates")]
    NoModularInverse,

    #[error("failed to allocate storage for the shares")]
    AllocationFailed,
}
