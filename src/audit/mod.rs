//! Offline audit of the compiled TLD tables against the IANA root list.
//!
//! Downloads (or reads from disk) `tlds-alpha-by-domain.txt` and flags every
//! entry the registry does not recognize, consuming [`crate::tld`] strictly
//! as a black box. Runs entirely outside the validation core; nothing here
//! feeds back into the tables at runtime.

use std::time::Duration;

use reqwest::Client;

use crate::error::{DomainVetError, Result};
use crate::tld;

/// Canonical location of the IANA TLD list.
pub const IANA_TLD_LIST_URL: &str = "https://data.iana.org/TLD/tlds-alpha-by-domain.txt";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of diffing a published TLD list against the compiled tables.
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// Version line of the audited list, e.g. `Version 2026083000, Last Updated ...`.
    pub version: String,
    /// List entries the compiled tables do not recognize, lowercased,
    /// in publication order.
    pub missing: Vec<String>,
}

impl AuditReport {
    /// True when the compiled tables cover every entry in the audited list.
    pub fn is_up_to_date(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Fetch the TLD list from `url`.
pub async fn fetch_list(url: &str) -> Result<String> {
    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("domain-vet/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| DomainVetError::network(e.to_string(), Some(url.to_string())))?;

    tracing::debug!(url = %url, "fetching TLD list");
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| DomainVetError::network(e.to_string(), Some(url.to_string())))?;

    response
        .text()
        .await
        .map_err(|e| DomainVetError::network(e.to_string(), Some(url.to_string())))
}

/// Diff the raw text of an IANA TLD list against the compiled tables.
///
/// The first line must be the `# Version ...` header; a list without it is
/// refused rather than silently audited. Comment lines and `XN--` entries
/// (ASCII-compatible encodings of internationalized TLDs, which the tables
/// do not carry) are skipped.
pub fn diff_report(list: &str) -> Result<AuditReport> {
    let mut lines = list.lines();

    let version = match lines.next().and_then(|l| l.strip_prefix("# ")) {
        Some(header) if header.starts_with("Version ") => header.to_string(),
        _ => {
            return Err(DomainVetError::parse(
                "TLD list does not start with the expected '# Version' header",
            ))
        }
    };

    let mut missing = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("XN--") {
            continue;
        }
        let entry = line.to_ascii_lowercase();
        if !tld::is_valid_tld(&entry) {
            missing.push(entry);
        }
    }

    tracing::debug!(version = %version, missing = missing.len(), "TLD audit complete");
    Ok(AuditReport { version, missing })
}
