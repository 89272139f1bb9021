use crate::gate::allowlist::{ENV_ALLOWED_DOMAINS, ENV_ALLOWED_EMAILS};
use clap::{Arg, Command};

pub const ARG_ALLOWED_EMAILS: &str = "allowed-emails";
pub const ARG_ALLOWED_DOMAINS: &str = "allowed-domains";

// The env names are unprefixed on purpose: the same variables configure the
// identity provider deployment that calls the registration hook.
#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_ALLOWED_EMAILS)
                .long(ARG_ALLOWED_EMAILS)
                .help("Comma-separated emails admitted at registration")
                .env(ENV_ALLOWED_EMAILS),
        )
        .arg(
            Arg::new(ARG_ALLOWED_DOMAINS)
                .long(ARG_ALLOWED_DOMAINS)
                .help("Comma-separated email domains admitted at registration")
                .env(ENV_ALLOWED_DOMAINS),
        )
}
