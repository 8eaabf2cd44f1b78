//! Validation errors for the subnet calculator.

/// Errors the calculator can return.
///
/// Both kinds are deterministic validation failures detected before any
/// subnet computation runs; there are no transient errors to retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubnetError {
    /// The input string is not four dot-separated octets in 0-255.
    #[error("invalid IPv4 address {input:?}: expected four dot-separated octets in 0-255")]
    InvalidAddress { input: String },

    /// Borrowed host bits must stay in 0-6 so every subnet keeps at least
    /// two usable hosts.
    #[error("invalid borrowed bits {0}: expected a value in 0-6")]
    InvalidBorrowedBits(u8),
}
