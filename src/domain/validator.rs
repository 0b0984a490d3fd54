//! Domain name validator
//!
//! Decides whether a string is a syntactically valid fully-qualified domain
//! name: label grammar per RFC 1034/1123, with the final label checked
//! against the [`crate::tld`] registry. Validation is a pure function of the
//! input and the instance policy; every failure is `false`, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::MAX_LABEL_LENGTH;
use crate::tld;

/// Characters a candidate may contain at all: label alphanumerics, hyphens,
/// and the dot separator. Whitespace and anything non-ASCII fail here, so
/// no trimming or normalization happens before validation.
static DOMAIN_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9.-]+$").expect("domain character class"));

static VALIDATOR: Lazy<DomainValidator> = Lazy::new(|| DomainValidator { allow_local: false });
static VALIDATOR_ALLOW_LOCAL: Lazy<DomainValidator> =
    Lazy::new(|| DomainValidator { allow_local: true });

/// Stateless domain-name validator, one process-wide instance per policy.
///
/// The `allow_local` policy additionally accepts bare single-label hostnames
/// (`localhost`, `hostname`) and domains ending in a local pseudo-TLD
/// (`localhost.localdomain`).
#[derive(Debug, PartialEq, Eq)]
pub struct DomainValidator {
    allow_local: bool,
}

impl DomainValidator {
    /// Get the singleton instance for the given policy. Repeated calls with
    /// the same policy return the same instance, so instances can be
    /// compared to check which policy is in effect.
    pub fn instance(allow_local: bool) -> &'static DomainValidator {
        if allow_local {
            &VALIDATOR_ALLOW_LOCAL
        } else {
            &VALIDATOR
        }
    }

    /// The policy this instance was obtained with.
    pub fn allows_local(&self) -> bool {
        self.allow_local
    }

    /// Check whether `candidate` is a valid domain name.
    ///
    /// Matching is case-insensitive throughout; ASCII-compatible-encoded
    /// labels (`xn--...`) pass as ordinary label content. The RFC 1035
    /// 253-character total length is not enforced, only per-label lengths.
    pub fn is_valid(&self, candidate: &str) -> bool {
        if candidate.is_empty() || !DOMAIN_CHARS.is_match(candidate) {
            return false;
        }

        let labels: Vec<&str> = candidate.split('.').collect();
        // Leading/trailing and consecutive dots produce an empty label,
        // which the grammar rejects.
        if !labels.iter().all(|label| is_valid_label(label)) {
            tracing::debug!(candidate = %candidate, "label grammar rejected candidate");
            return false;
        }

        match labels.as_slice() {
            // Bare hostname, only acceptable under the local policy.
            [_single] => self.allow_local,
            [.., last] => tld::is_valid_tld(last) || (self.allow_local && tld::is_local_tld(last)),
            [] => false,
        }
    }

    /// Check a standalone TLD token against the whole registry. Accepts an
    /// optional leading dot; independent of the `allow_local` policy.
    pub fn is_valid_tld(&self, token: &str) -> bool {
        tld::is_valid_tld(token)
    }

    /// Check a standalone token against the infrastructure TLD table.
    pub fn is_valid_infrastructure_tld(&self, token: &str) -> bool {
        tld::is_valid_infrastructure_tld(token)
    }

    /// Check a standalone token against the generic TLD table.
    pub fn is_valid_generic_tld(&self, token: &str) -> bool {
        tld::is_valid_generic_tld(token)
    }

    /// Check a standalone token against the generic-restricted TLD table.
    pub fn is_valid_generic_restricted_tld(&self, token: &str) -> bool {
        tld::is_valid_generic_restricted_tld(token)
    }

    /// Check a standalone token against the country-code TLD table.
    pub fn is_valid_country_code_tld(&self, token: &str) -> bool {
        tld::is_valid_country_code_tld(token)
    }
}

/// Label grammar: 1..=63 characters, alphanumeric at both ends, interior
/// characters alphanumeric or hyphen. Interior hyphens may repeat
/// (`test---domain` is a valid label).
fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_LABEL_LENGTH {
        return false;
    }
    if !bytes[0].is_ascii_alphanumeric() || !bytes[bytes.len() - 1].is_ascii_alphanumeric() {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> &'static DomainValidator {
        DomainValidator::instance(false)
    }

    #[test]
    fn valid_domains() {
        assert!(validator().is_valid("apache.org"));
        assert!(validator().is_valid("www.google.com"));
        assert!(validator().is_valid("test-domain.com"));
        assert!(validator().is_valid("test---domain.com"));
        assert!(validator().is_valid("test-d-o-m-ain.com"));
        assert!(validator().is_valid("as.uk"));
        assert!(validator().is_valid("z.com"));
        assert!(validator().is_valid("i.have.an-example.domain.name"));
    }

    #[test]
    fn case_is_ignored() {
        assert!(validator().is_valid("ApAchE.Org"));
        assert!(validator().is_valid("APACHE.ORG"));
    }

    #[test]
    fn invalid_domains() {
        assert!(!validator().is_valid(".org"));
        assert!(!validator().is_valid(" apache.org "));
        assert!(!validator().is_valid("apa che.org"));
        assert!(!validator().is_valid("-testdomain.name"));
        assert!(!validator().is_valid("testdomain-.name"));
        assert!(!validator().is_valid("---c.com"));
        assert!(!validator().is_valid("c--.com"));
        assert!(!validator().is_valid("apache.rog"));
        assert!(!validator().is_valid("http://www.apache.org"));
        assert!(!validator().is_valid(" "));
        assert!(!validator().is_valid(""));
        assert!(!validator().is_valid("apache..org"));
        assert!(!validator().is_valid("apache.org."));
    }

    #[test]
    fn label_length_bounds() {
        let longest = "a".repeat(63);
        assert!(validator().is_valid(&format!("{longest}.com")));
        let too_long = "a".repeat(64);
        assert!(!validator().is_valid(&format!("{too_long}.com")));
    }

    #[test]
    fn non_ascii_is_rejected() {
        assert!(!validator().is_valid("bücher.ch"));
        assert!(!validator().is_valid("apache\u{00a0}.org"));
    }

    #[test]
    fn ascii_compatible_encoding_passes_as_plain_labels() {
        assert!(validator().is_valid("www.xn--bcher-kva.ch"));
        assert!(validator().is_valid("xn--bcher-kva.ch"));
    }

    #[test]
    fn tld_pass_throughs() {
        let v = validator();
        assert!(v.is_valid_infrastructure_tld(".arpa"));
        assert!(!v.is_valid_infrastructure_tld(".com"));
        assert!(v.is_valid_generic_tld(".com"));
        assert!(!v.is_valid_generic_tld(".us"));
        assert!(v.is_valid_generic_restricted_tld(".name"));
        assert!(v.is_valid_country_code_tld(".uk"));
        assert!(!v.is_valid_country_code_tld(".org"));
        assert!(v.is_valid_tld(".COM"));
        assert!(v.is_valid_tld(".BiZ"));
        assert!(!v.is_valid_tld(".nope"));
        assert!(!v.is_valid_tld(""));
    }

    #[test]
    fn pass_throughs_ignore_policy() {
        let local = DomainValidator::instance(true);
        assert!(!local.is_valid_tld("localhost"));
        assert!(!local.is_valid_tld("localdomain"));
    }

    #[test]
    fn singleton_identity_per_policy() {
        let a = DomainValidator::instance(false);
        let b = DomainValidator::instance(false);
        assert!(std::ptr::eq(a, b));
        assert_eq!(a, b);

        let local = DomainValidator::instance(true);
        assert!(std::ptr::eq(local, DomainValidator::instance(true)));
        assert_ne!(a, local);
    }

    #[test]
    fn allow_local_policy() {
        let strict = DomainValidator::instance(false);
        let local = DomainValidator::instance(true);

        assert!(!strict.is_valid("localhost.localdomain"));
        assert!(!strict.is_valid("localhost"));

        assert!(local.is_valid("localhost.localdomain"));
        assert!(local.is_valid("localhost"));
        assert!(local.is_valid("hostname"));
        assert!(local.is_valid("machinename"));

        // Ordinary domains keep validating, malformed input keeps failing.
        assert!(local.is_valid("apache.org"));
        assert!(!local.is_valid(" apache.org "));
        assert!(!local.is_valid("-localhost"));
        assert!(!local.is_valid("localhost-"));
        assert!(!local.is_valid(".localhost"));
    }

    #[test]
    fn unknown_tld_with_local_policy_still_fails() {
        let local = DomainValidator::instance(true);
        assert!(!local.is_valid("apache.rog"));
        assert!(!local.is_valid("example.nope"));
    }
}
