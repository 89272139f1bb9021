//! Immutable allow-list configuration for the registration gate.
//!
//! Both lists are parsed once at process start from comma-separated sources
//! and never change afterwards; there is deliberately no mutation API. Empty
//! configuration means empty sets, which denies every well-formed registrant.

use std::collections::HashSet;

/// Environment variable holding the comma-separated exact-email list.
pub const ENV_ALLOWED_EMAILS: &str = "ALLOWED_EMAILS";

/// Environment variable holding the comma-separated domain list.
pub const ENV_ALLOWED_DOMAINS: &str = "ALLOWED_DOMAINS";

/// Normalized allow-lists the gate checks registrants against.
#[derive(Clone, Debug, Default)]
pub struct AllowList {
    emails: HashSet<String>,
    domains: HashSet<String>,
}

impl AllowList {
    /// Build the allow-lists from raw comma-separated configuration values.
    /// Entries are trimmed and lowercased; empty entries are dropped. `None`
    /// behaves like an empty list.
    #[must_use]
    pub fn new(emails: Option<&str>, domains: Option<&str>) -> Self {
        Self {
            emails: parse_entries(emails),
            domains: parse_entries(domains),
        }
    }

    /// Exact-email membership. The caller is expected to pass a lowercased
    /// email, matching how entries are normalized at construction.
    #[must_use]
    pub fn contains_email(&self, email: &str) -> bool {
        self.emails.contains(email)
    }

    /// Domain membership, same normalization expectation as [`Self::contains_email`].
    #[must_use]
    pub fn contains_domain(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }

    #[must_use]
    pub fn email_count(&self) -> usize {
        self.emails.len()
    }

    #[must_use]
    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.domains.is_empty()
    }
}

fn parse_entries(raw: Option<&str>) -> HashSet<String> {
    raw.map_or_else(HashSet::new, |value| {
        value
            .split(',')
            .map(normalize_entry)
            .filter(|entry| !entry.is_empty())
            .collect()
    })
}

fn normalize_entry(entry: &str) -> String {
    entry.trim().to_lowercase()
}
