use crate::{
    cli::{
        actions::{Action, populate, server},
        commands,
    },
    gate::AllowList,
    populate::DEFAULT_DISHES,
};
use anyhow::{Context, Result};
use std::sync::Arc;

/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    if let Some(sub) = matches.subcommand_matches(commands::populate::CMD_POPULATE) {
        let generate_url = sub
            .get_one::<String>(commands::populate::ARG_GENERATE_URL)
            .cloned()
            .context("missing argument: --generate-url")?;
        let store_url = sub
            .get_one::<String>(commands::populate::ARG_STORE_URL)
            .cloned()
            .context("missing argument: --store-url")?;
        let delay_ms = sub
            .get_one::<u64>(commands::populate::ARG_DELAY_MS)
            .copied()
            .unwrap_or(1000);
        let dishes = sub
            .get_one::<String>(commands::populate::ARG_DISHES)
            .map_or_else(default_dishes, |list| parse_dishes(list));

        return Ok(Action::Populate(populate::Args {
            generate_url,
            store_url,
            delay_ms,
            dishes,
        }));
    }

    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);

    let allowlist = AllowList::new(
        matches
            .get_one::<String>(commands::gate::ARG_ALLOWED_EMAILS)
            .map(String::as_str),
        matches
            .get_one::<String>(commands::gate::ARG_ALLOWED_DOMAINS)
            .map(String::as_str),
    );

    Ok(Action::Server(server::Args {
        port,
        allowlist: Arc::new(allowlist),
    }))
}

fn default_dishes() -> Vec<String> {
    DEFAULT_DISHES.iter().map(ToString::to_string).collect()
}

fn parse_dishes(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|dish| !dish.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_from(args: &[&str]) -> clap::ArgMatches {
        commands::new().get_matches_from(args)
    }

    #[test]
    fn test_server_action_defaults() {
        temp_env::with_vars(
            [
                ("COOKFLOW_PORT", None::<&str>),
                ("ALLOWED_EMAILS", None),
                ("ALLOWED_DOMAINS", None),
            ],
            || {
                let action = handler(&matches_from(&["cookflow"])).expect("server action");

                let Action::Server(args) = action else {
                    panic!("expected server action");
                };
                assert_eq!(args.port, 8080);
                assert!(args.allowlist.is_empty());
            },
        );
    }

    #[test]
    fn test_server_action_allowlists_from_env() {
        temp_env::with_vars(
            [
                ("COOKFLOW_PORT", Some("9090")),
                ("ALLOWED_EMAILS", Some("a@x.com, b@y.com")),
                ("ALLOWED_DOMAINS", Some("cook.io")),
            ],
            || {
                let action = handler(&matches_from(&["cookflow"])).expect("server action");

                let Action::Server(args) = action else {
                    panic!("expected server action");
                };
                assert_eq!(args.port, 9090);
                assert_eq!(args.allowlist.email_count(), 2);
                assert_eq!(args.allowlist.domain_count(), 1);
            },
        );
    }

    #[test]
    fn test_populate_action_flags() {
        temp_env::with_vars(
            [
                ("COOKFLOW_GENERATE_URL", None::<&str>),
                ("COOKFLOW_STORE_URL", None),
                ("COOKFLOW_POPULATE_DELAY_MS", None),
                ("COOKFLOW_DISHES", None),
            ],
            || {
                let action = handler(&matches_from(&[
                    "cookflow",
                    "populate",
                    "--dishes",
                    "Pizza, Ramen,, ",
                    "--delay-ms",
                    "250",
                ]))
                .expect("populate action");

                let Action::Populate(args) = action else {
                    panic!("expected populate action");
                };
                assert_eq!(args.generate_url, "http://localhost:8000/api/generate");
                assert_eq!(args.store_url, "http://localhost:8000/api/recipes");
                assert_eq!(args.delay_ms, 250);
                assert_eq!(args.dishes, vec!["Pizza".to_string(), "Ramen".to_string()]);
            },
        );
    }

    #[test]
    fn test_populate_action_default_dishes() {
        temp_env::with_vars([("COOKFLOW_DISHES", None::<&str>)], || {
            let action =
                handler(&matches_from(&["cookflow", "populate"])).expect("populate action");

            let Action::Populate(args) = action else {
                panic!("expected populate action");
            };
            assert_eq!(args.dishes.len(), DEFAULT_DISHES.len());
            assert_eq!(args.dishes[0], DEFAULT_DISHES[0]);
        });
    }
}
