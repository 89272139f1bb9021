use crate::{api, gate::AllowList};
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub allowlist: Arc<AllowList>,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    log_startup_args(&args);

    api::new(args.port, args.allowlist).await
}

fn log_startup_args(args: &Args) {
    let entries = [
        ("listen", format!("tcp:{}", args.port)),
        ("allowed_emails", args.allowlist.email_count().to_string()),
        ("allowed_domains", args.allowlist.domain_count().to_string()),
    ];
    log_entries("Startup configuration", &entries);

    if args.allowlist.is_empty() {
        warn!("Allow-lists are empty: every registration will be denied");
    }
}

fn log_entries(title: &str, entries: &[(&str, String)]) {
    let max_key_len = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut message = format!("{}\n\n{title}:", cookflow_banner());
    for (key, value) in entries {
        let padding = " ".repeat(max_key_len.saturating_sub(key.len()));
        let _ =
            std::fmt::Write::write_fmt(&mut message, format_args!("\n  {key}:{padding} {value}"));
    }
    info!("{message}");
}

fn cookflow_banner() -> String {
    let short_hash = short_commit(crate::GIT_COMMIT_HASH);
    COOKFLOW_BANNER.replace(
        "{VERSION}",
        &format!(" - {} - {}", env!("CARGO_PKG_VERSION"), short_hash),
    )
}

fn short_commit(hash: &str) -> String {
    let trimmed = hash.trim();
    if trimmed.len() > 7 {
        trimmed[..7].to_string()
    } else {
        trimmed.to_string()
    }
}

const COOKFLOW_BANNER: &str = r"
     (    )   (
      )  (   )
     (    )  (
   ___________________
   \                 /
    \_______________/   C O O K F L O W {VERSION}
     |             |
     \_____________/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_commit() {
        assert_eq!(short_commit("0123456789abcdef"), "0123456");
        assert_eq!(short_commit("abc123"), "abc123");
        assert_eq!(short_commit("unknown"), "unknown");
        assert_eq!(short_commit("  0123456789  "), "0123456");
    }

    #[test]
    fn test_banner_contains_version() {
        let banner = cookflow_banner();
        assert!(banner.contains(env!("CARGO_PKG_VERSION")));
        assert!(!banner.contains("{VERSION}"));
    }
}
