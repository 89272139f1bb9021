use clap::{Arg, Command};

pub const CMD_POPULATE: &str = "populate";

pub const ARG_GENERATE_URL: &str = "generate-url";
pub const ARG_STORE_URL: &str = "store-url";
pub const ARG_DELAY_MS: &str = "delay-ms";
pub const ARG_DISHES: &str = "dishes";

#[must_use]
pub fn command() -> Command {
    Command::new(CMD_POPULATE)
        .about("Generate and store recipes for a list of dishes")
        .arg(
            Arg::new(ARG_GENERATE_URL)
                .long(ARG_GENERATE_URL)
                .help("Recipe generation endpoint")
                .default_value("http://localhost:8000/api/generate")
                .env("COOKFLOW_GENERATE_URL"),
        )
        .arg(
            Arg::new(ARG_STORE_URL)
                .long(ARG_STORE_URL)
                .help("Recipe storage endpoint")
                .default_value("http://localhost:8000/api/recipes")
                .env("COOKFLOW_STORE_URL"),
        )
        .arg(
            Arg::new(ARG_DELAY_MS)
                .long(ARG_DELAY_MS)
                .help("Pause between dishes in milliseconds")
                .default_value("1000")
                .env("COOKFLOW_POPULATE_DELAY_MS")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(ARG_DISHES)
                .long(ARG_DISHES)
                .help("Comma-separated dish names (defaults to the built-in list)")
                .env("COOKFLOW_DISHES"),
        )
}
