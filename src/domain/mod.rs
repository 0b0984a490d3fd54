//! Domain-name validation module

pub mod validator;

// Re-export main functionality
pub use validator::DomainValidator;

/// Longest permitted DNS label, per RFC 1035.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Longest permitted full domain name, per RFC 1035. Documented upper
/// bound; [`DomainValidator::is_valid`] enforces per-label lengths only.
pub const MAX_DOMAIN_LENGTH: usize = 253;
