//! Seed the recipe catalog: for each dish, ask the generation endpoint for a
//! recipe and post the result, unchanged, to the storage endpoint.
//!
//! Dishes are processed strictly one at a time with a fixed pause between
//! them. A dish that fails to generate or store is logged and skipped; the
//! run as a whole only fails when nothing could be populated.

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::{future::Future, time::Duration};
use tokio::time::sleep;
use tracing::{info, warn};
use url::Url;

/// Dishes seeded when no explicit list is given.
pub const DEFAULT_DISHES: [&str; 10] = [
    "Spaghetti Carbonara",
    "Chicken Tikka Masala",
    "Beef Bourguignon",
    "Vegetable Pad Thai",
    "Mushroom Risotto",
    "Fish Tacos",
    "Shakshuka",
    "Ratatouille",
    "Chicken Katsu Curry",
    "French Onion Soup",
];

const DEFAULT_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct PopulateConfig {
    generate_url: Url,
    store_url: Url,
    delay: Duration,
}

impl PopulateConfig {
    /// # Errors
    /// Returns an error if either endpoint is not a valid URL.
    pub fn new(generate_url: &str, store_url: &str) -> Result<Self> {
        let generate_url = Url::parse(generate_url)
            .with_context(|| format!("Invalid generate URL: {generate_url}"))?;
        let store_url =
            Url::parse(store_url).with_context(|| format!("Invalid store URL: {store_url}"))?;

        Ok(Self {
            generate_url,
            store_url,
            delay: DEFAULT_DELAY,
        })
    }

    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay = Duration::from_millis(delay_ms);
        self
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    dish: &'a str,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct PopulateSummary {
    pub populated: usize,
    pub failed: usize,
}

/// Generate and store one recipe per dish, strictly in order.
/// # Errors
/// Returns an error if the HTTP client cannot be built, or if no recipe at
/// all could be populated.
pub async fn run(config: &PopulateConfig, dishes: &[String]) -> Result<PopulateSummary> {
    let client = Client::builder().user_agent(crate::APP_USER_AGENT).build()?;

    let summary =
        populate_dishes(dishes, config.delay, |dish| populate_one(&client, config, dish)).await;

    if summary.populated == 0 && !dishes.is_empty() {
        return Err(anyhow!(
            "No recipe could be populated ({} failed)",
            summary.failed
        ));
    }

    Ok(summary)
}

// The per-dish work is injected so tests can drive the loop without a server.
async fn populate_dishes<F, Fut>(
    dishes: &[String],
    delay: Duration,
    mut populate_dish: F,
) -> PopulateSummary
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let mut summary = PopulateSummary::default();

    for (index, dish) in dishes.iter().enumerate() {
        info!("Populating '{dish}'");

        match populate_dish(dish.clone()).await {
            Ok(name) => {
                info!("Stored recipe '{name}'");
                summary.populated += 1;
            }
            Err(err) => {
                warn!("Skipping '{dish}': {err:#}");
                summary.failed += 1;
            }
        }

        if index + 1 < dishes.len() {
            sleep(delay).await;
        }
    }

    summary
}

async fn populate_one(client: &Client, config: &PopulateConfig, dish: String) -> Result<String> {
    let recipe = generate_recipe(client, config.generate_url.as_str(), &dish).await?;

    // The recipe is stored exactly as received; the name is only for logging.
    let name = recipe["name"].as_str().unwrap_or(&dish).to_string();

    store_recipe(client, config.store_url.as_str(), &recipe).await?;

    Ok(name)
}

async fn generate_recipe(client: &Client, url: &str, dish: &str) -> Result<Value> {
    let response = client
        .post(url)
        .json(&GenerateRequest { dish })
        .send()
        .await
        .with_context(|| format!("Failed to reach {url}"))?;

    if !response.status().is_success() {
        return Err(anyhow!("{} - {}", url, response.status()));
    }

    response
        .json()
        .await
        .with_context(|| format!("Invalid recipe payload for '{dish}'"))
}

async fn store_recipe(client: &Client, url: &str, recipe: &Value) -> Result<()> {
    let response = client
        .post(url)
        .json(recipe)
        .send()
        .await
        .with_context(|| format!("Failed to reach {url}"))?;

    if !response.status().is_success() {
        return Err(anyhow!("{} - {}", url, response.status()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> PopulateConfig {
        PopulateConfig::new(
            "http://localhost:8000/api/generate",
            "http://localhost:8000/api/recipes",
        )
        .expect("valid config")
    }

    fn dishes(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_default_dishes() {
        assert_eq!(DEFAULT_DISHES.len(), 10);
        assert!(DEFAULT_DISHES.contains(&"Spaghetti Carbonara"));
    }

    #[test]
    fn test_config_rejects_invalid_url() {
        assert!(PopulateConfig::new("not a url", "http://localhost:8000").is_err());
        assert!(PopulateConfig::new("http://localhost:8000", "not a url").is_err());
    }

    #[test]
    fn test_config_delay_override() {
        let overridden = config().with_delay_ms(250);
        assert_eq!(overridden.delay, Duration::from_millis(250));

        assert_eq!(config().delay, DEFAULT_DELAY);
    }

    #[test]
    fn test_generate_request_shape() {
        let payload = serde_json::to_value(GenerateRequest { dish: "Fish Tacos" })
            .expect("serializable request");
        assert_eq!(payload, json!({ "dish": "Fish Tacos" }));
    }

    #[tokio::test]
    async fn test_populate_dishes_runs_in_order() {
        let list = dishes(&["Pizza", "Ramen", "Tacos"]);
        let mut calls = Vec::new();

        let summary = populate_dishes(&list, Duration::ZERO, |dish| {
            calls.push(dish.clone());
            async move { Ok(dish) }
        })
        .await;

        assert_eq!(calls, list);
        assert_eq!(
            summary,
            PopulateSummary {
                populated: 3,
                failed: 0
            }
        );
    }

    #[tokio::test]
    async fn test_populate_dishes_continues_after_failure() {
        let list = dishes(&["Pizza", "Ramen", "Tacos"]);
        let mut calls = Vec::new();

        let summary = populate_dishes(&list, Duration::ZERO, |dish| {
            calls.push(dish.clone());
            async move {
                if dish == "Ramen" {
                    Err(anyhow!("generation failed"))
                } else {
                    Ok(dish)
                }
            }
        })
        .await;

        assert_eq!(calls, list);
        assert_eq!(
            summary,
            PopulateSummary {
                populated: 2,
                failed: 1
            }
        );
    }

    #[tokio::test]
    async fn test_run_with_no_dishes_is_ok() {
        let summary = run(&config(), &[]).await.expect("empty run");
        assert_eq!(summary, PopulateSummary::default());
    }
}
