//! # CookFlow (Recipe Platform Services)
//!
//! `cookflow` is the service layer of the CookFlow recipe-generation app. It
//! owns the pieces that must not live in the browser: the invite-only
//! registration gate, the headless stepper control that drives cooking-step
//! navigation, and a batch tool that seeds the recipe catalog.
//!
//! ## Registration Gate
//!
//! New accounts are admitted against two immutable allow-lists loaded at
//! process start (`ALLOWED_EMAILS`, `ALLOWED_DOMAINS`). The identity provider
//! calls `POST /v1/hooks/registration` before persisting an account; the gate
//! answers allow or deny and never creates partial state.
//!
//! - **Default deny:** absent configuration yields empty allow-lists, which
//!   reject every well-formed registrant.
//! - **Case-insensitive:** list entries and submitted emails are compared
//!   lowercased.
//! - **Trust boundary:** the decision runs server-side for every registration
//!   transport, so client code cannot bypass it.
//!
//! ## Stepper Control
//!
//! [`stepper`] implements the open/close state machine and view model for the
//! cooking-step navigator. The host UI owns the step sequence and the active
//! position; the component translates discrete inputs into selection requests
//! and scopes document-level listeners to the popover's open state.
//!
//! ## Recipe Population
//!
//! `cookflow populate` generates recipes for a list of dishes and stores each
//! one, strictly sequentially with a fixed delay between dishes.

pub mod api;
pub mod cli;
pub mod gate;
pub mod populate;
pub mod stepper;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        // Should be a hex string (full SHA-1 is 40 chars, but could be short)
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
