//! TLD registry: categorized membership queries over a static table.
//!
//! The registry partitions recognized top-level domains into four disjoint
//! categories and answers case-insensitive lookups against each of them or
//! their union. The table is fixed at build time; there is no mutation API
//! and reads are safe from any thread without locking.

mod tables;

use tables::{
    COUNTRY_CODE_TLDS, GENERIC_RESTRICTED_TLDS, GENERIC_TLDS, INFRASTRUCTURE_TLDS, LOCAL_TLDS,
};

/// Category of a recognized top-level domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TldCategory {
    /// DNS infrastructure (`arpa`).
    Infrastructure,
    /// General-purpose gTLDs (`com`, `org`, ...).
    Generic,
    /// Restricted-registration gTLDs (`biz`, `name`, `pro`).
    GenericRestricted,
    /// ISO country codes (`uk`, `de`, ...).
    CountryCode,
}

/// Fold a TLD token for table comparison: ASCII-lowercase and strip one
/// optional leading dot. Returns `None` when nothing remains to compare.
///
/// Folding is deliberately ASCII-only; the domain grammar is ASCII by
/// definition and lookup must not depend on runtime locale.
fn normalize(token: &str) -> Option<String> {
    let token = token.strip_prefix('.').unwrap_or(token);
    if token.is_empty() {
        return None;
    }
    Some(token.to_ascii_lowercase())
}

fn table_contains(table: &[&str], token: &str) -> bool {
    match normalize(token) {
        Some(folded) => table.binary_search(&folded.as_str()).is_ok(),
        None => false,
    }
}

/// Classify a TLD token, accepting an optional leading dot.
///
/// Returns `None` for unrecognized, empty, or non-TLD input; unknown tokens
/// are not an error, just "not a TLD".
pub fn category_of(token: &str) -> Option<TldCategory> {
    let folded = normalize(token)?;
    let folded = folded.as_str();
    if INFRASTRUCTURE_TLDS.binary_search(&folded).is_ok() {
        Some(TldCategory::Infrastructure)
    } else if GENERIC_TLDS.binary_search(&folded).is_ok() {
        Some(TldCategory::Generic)
    } else if GENERIC_RESTRICTED_TLDS.binary_search(&folded).is_ok() {
        Some(TldCategory::GenericRestricted)
    } else if COUNTRY_CODE_TLDS.binary_search(&folded).is_ok() {
        Some(TldCategory::CountryCode)
    } else {
        None
    }
}

/// Check a token against the union of all four TLD categories.
pub fn is_valid_tld(token: &str) -> bool {
    category_of(token).is_some()
}

/// Check a token against the infrastructure table only.
pub fn is_valid_infrastructure_tld(token: &str) -> bool {
    table_contains(INFRASTRUCTURE_TLDS, token)
}

/// Check a token against the generic table only.
pub fn is_valid_generic_tld(token: &str) -> bool {
    table_contains(GENERIC_TLDS, token)
}

/// Check a token against the generic-restricted table only.
pub fn is_valid_generic_restricted_tld(token: &str) -> bool {
    table_contains(GENERIC_RESTRICTED_TLDS, token)
}

/// Check a token against the country-code table only.
pub fn is_valid_country_code_tld(token: &str) -> bool {
    table_contains(COUNTRY_CODE_TLDS, token)
}

/// Check a token against the local pseudo-TLD table (`localdomain`,
/// `localhost`). These are outside the four categories and never satisfy
/// [`is_valid_tld`].
pub fn is_local_tld(token: &str) -> bool {
    table_contains(LOCAL_TLDS, token)
}
