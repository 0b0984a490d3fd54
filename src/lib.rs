//! Domain Vet - domain-name validation against DNS label rules and a
//! categorized TLD registry
//!
//! Checks whether a string is a syntactically valid fully-qualified domain
//! name (RFC 1034/1123 label grammar, final label recognized as a TLD), with
//! an optional policy accepting local hostnames. Ships an offline audit tool
//! that diffs the compiled TLD tables against the published IANA list.

pub mod audit;
pub mod domain;
pub mod error;
pub mod tld;

// Re-export commonly used types
pub use domain::{DomainValidator, MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH};
pub use error::{DomainVetError, Result};
pub use tld::TldCategory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
