use crate::populate::{self, PopulateConfig};
use anyhow::Result;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub generate_url: String,
    pub store_url: String,
    pub delay_ms: u64,
    pub dishes: Vec<String>,
}

/// Execute the populate action.
/// # Errors
/// Returns an error if an endpoint URL is invalid or no recipe could be
/// populated at all.
pub async fn execute(args: Args) -> Result<()> {
    let config =
        PopulateConfig::new(&args.generate_url, &args.store_url)?.with_delay_ms(args.delay_ms);

    let summary = populate::run(&config, &args.dishes).await?;

    info!(
        "Populated {} recipes, {} failed",
        summary.populated, summary.failed
    );

    Ok(())
}
