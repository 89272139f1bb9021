//! Registration gate: the invite-only admission decision.
//!
//! The identity provider submits a registration event before creating an
//! account; [`evaluate`] classifies it as admitted or denied against the
//! process-wide [`AllowList`]. The decision is a pure function of the event
//! and the configuration, so repeated evaluation of the same event always
//! yields the same outcome. Every path logs the email (or its absence) for
//! the audit trail: allows at `info`, denials at `warn`.

pub mod allowlist;

pub use allowlist::AllowList;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

/// Denial message for events without a user record.
pub const MSG_INVALID_USER: &str = "Invalid user data";

/// Denial message for events without an email address.
pub const MSG_EMAIL_REQUIRED: &str = "Email address is required";

/// Denial message for well-formed registrants outside both allow-lists.
pub const MSG_INVITE_ONLY: &str =
    "Registration is currently invite-only. Contact the CookFlow team to request access.";

/// One registration attempt as submitted by the identity provider.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone)]
pub struct RegistrationEvent {
    pub user: Option<Registrant>,
}

/// The account candidate attached to a registration event.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone)]
pub struct Registrant {
    pub uid: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenialKind {
    /// Malformed upstream event (missing user record or email); not retryable.
    InvalidArgument,
    /// Well-formed registrant absent from both allow-lists.
    PermissionDenied,
}

impl DenialKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid-argument",
            Self::PermissionDenied => "permission-denied",
        }
    }
}

/// Terminal rejection of one registration attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Denial {
    pub kind: DenialKind,
    pub message: &'static str,
}

/// Which rule admitted the registrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchRule {
    Email,
    Domain,
}

/// A positive gate decision carrying the normalized email for the audit log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Admitted {
    pub email: String,
    pub rule: MatchRule,
}

/// Decide whether a registration may proceed.
///
/// The email is lowercased before comparison and its domain is the substring
/// after the first `@`. Admission requires exact-email membership or domain
/// membership; everything else is denied with a static message.
///
/// # Errors
///
/// Returns a [`Denial`] with `InvalidArgument` when the event carries no user
/// record or no email, and `PermissionDenied` when the registrant is missing
/// from both allow-lists.
pub fn evaluate(event: &RegistrationEvent, allowlist: &AllowList) -> Result<Admitted, Denial> {
    let Some(user) = &event.user else {
        warn!("Registration rejected: event carries no user data");
        return Err(Denial {
            kind: DenialKind::InvalidArgument,
            message: MSG_INVALID_USER,
        });
    };

    let email = user
        .email
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    if email.is_empty() {
        warn!(
            uid = user.uid.as_deref().unwrap_or("unknown"),
            "Registration rejected: no email address on event"
        );
        return Err(Denial {
            kind: DenialKind::InvalidArgument,
            message: MSG_EMAIL_REQUIRED,
        });
    }

    if allowlist.contains_email(&email) {
        info!(email = %email, rule = "email", "Registration allowed");
        return Ok(Admitted {
            email,
            rule: MatchRule::Email,
        });
    }

    // Domain is everything after the first '@'; an address without one can
    // only be admitted by an exact-email entry.
    if let Some((_, domain)) = email.split_once('@') {
        if allowlist.contains_domain(domain) {
            info!(email = %email, rule = "domain", "Registration allowed");
            return Ok(Admitted {
                email,
                rule: MatchRule::Domain,
            });
        }
    }

    warn!(email = %email, "Registration denied: not on the invite list");
    Err(Denial {
        kind: DenialKind::PermissionDenied,
        message: MSG_INVITE_ONLY,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(email: Option<&str>) -> RegistrationEvent {
        RegistrationEvent {
            user: Some(Registrant {
                uid: Some("uid-1".to_string()),
                email: email.map(ToString::to_string),
            }),
        }
    }

    #[test]
    fn missing_user_fails_invalid_argument() {
        let allowlist = AllowList::new(Some("a@x.com"), Some("x.com"));
        let denial = evaluate(&RegistrationEvent { user: None }, &allowlist)
            .expect_err("event without user must be rejected");

        assert_eq!(denial.kind, DenialKind::InvalidArgument);
        assert_eq!(denial.message, MSG_INVALID_USER);
    }

    #[test]
    fn missing_email_fails_invalid_argument() {
        let allowlist = AllowList::new(Some("a@x.com"), None);
        let denial =
            evaluate(&event(None), &allowlist).expect_err("event without email must be rejected");

        assert_eq!(denial.kind, DenialKind::InvalidArgument);
        assert_eq!(denial.message, MSG_EMAIL_REQUIRED);
    }

    #[test]
    fn empty_email_fails_invalid_argument() {
        let denial = evaluate(&event(Some("")), &AllowList::default())
            .expect_err("empty email must be rejected");

        assert_eq!(denial.kind, DenialKind::InvalidArgument);
        assert_eq!(denial.message, MSG_EMAIL_REQUIRED);
    }

    #[test]
    fn missing_email_fails_even_with_empty_lists() {
        let denial = evaluate(&event(None), &AllowList::default())
            .expect_err("missing email must be rejected regardless of configuration");

        assert_eq!(denial.kind, DenialKind::InvalidArgument);
    }

    #[test]
    fn exact_email_match_admits() {
        let allowlist = AllowList::new(Some("a@x.com, b@y.com"), Some(""));

        let admitted = evaluate(&event(Some("a@x.com")), &allowlist).expect("a@x.com is listed");
        assert_eq!(admitted.email, "a@x.com");
        assert_eq!(admitted.rule, MatchRule::Email);

        let denial = evaluate(&event(Some("c@x.com")), &allowlist)
            .expect_err("c@x.com is not listed anywhere");
        assert_eq!(denial.kind, DenialKind::PermissionDenied);
        assert_eq!(denial.message, MSG_INVITE_ONLY);
    }

    #[test]
    fn email_comparison_is_case_insensitive() {
        let allowlist = AllowList::new(Some("a@x.com, b@y.com"), Some(""));

        let admitted = evaluate(&event(Some("B@Y.COM")), &allowlist).expect("b@y.com is listed");
        assert_eq!(admitted.email, "b@y.com");

        let upper = evaluate(&event(Some("USER@Example.com")), &allowlist).is_ok();
        let lower = evaluate(&event(Some("user@example.com")), &allowlist).is_ok();
        assert_eq!(upper, lower);
    }

    #[test]
    fn domain_match_admits() {
        let allowlist = AllowList::new(None, Some("cook.io"));

        let admitted =
            evaluate(&event(Some("anyone@cook.io")), &allowlist).expect("cook.io is listed");
        assert_eq!(admitted.rule, MatchRule::Domain);

        let mixed_case =
            evaluate(&event(Some("anyone@Cook.IO")), &allowlist).expect("comparison is lowercased");
        assert_eq!(mixed_case.email, "anyone@cook.io");

        let denial = evaluate(&event(Some("anyone@notcook.io")), &allowlist)
            .expect_err("notcook.io is not listed");
        assert_eq!(denial.kind, DenialKind::PermissionDenied);
    }

    #[test]
    fn domain_is_substring_after_first_at() {
        let allowlist = AllowList::new(None, Some("b@c"));

        // "a@b@c" has domain "b@c" because only the first '@' splits.
        assert!(evaluate(&event(Some("a@b@c")), &allowlist).is_ok());
    }

    #[test]
    fn address_without_at_can_only_match_exact_entry() {
        let by_domain = AllowList::new(None, Some("x.com"));
        let denial = evaluate(&event(Some("plainaddress")), &by_domain)
            .expect_err("no domain to match against");
        assert_eq!(denial.kind, DenialKind::PermissionDenied);

        let by_email = AllowList::new(Some("plainaddress"), None);
        assert!(evaluate(&event(Some("plainaddress")), &by_email).is_ok());
    }

    #[test]
    fn empty_configuration_denies_every_registrant() {
        let denial = evaluate(&event(Some("user@example.com")), &AllowList::default())
            .expect_err("default configuration is deny-all");

        assert_eq!(denial.kind, DenialKind::PermissionDenied);
        assert_eq!(denial.message, MSG_INVITE_ONLY);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let allowlist = AllowList::new(Some("a@x.com"), Some("cook.io"));
        let attempt = event(Some("a@x.com"));

        let first = evaluate(&attempt, &allowlist);
        let second = evaluate(&attempt, &allowlist);
        assert_eq!(first, second);

        let denied = event(Some("nobody@nowhere.dev"));
        assert_eq!(
            evaluate(&denied, &allowlist),
            evaluate(&denied, &allowlist)
        );
    }
}
