use crate::output::Output;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use reelshelf_config::Config;
use reelshelf_core::Catalog;
use serde_json::json;

use super::{make_rng, seed_catalog};

pub fn run_simulate(
    count: Option<usize>,
    seed: Option<u64>,
    config: &Config,
    output: &Output,
) -> Result<()> {
    let mut catalog = seed_catalog(config)?;
    simulate_views(&mut catalog, count, seed, config, output)
}

/// Applies a batch of random views and reports each pick.
pub fn simulate_views(
    catalog: &mut Catalog,
    count: Option<usize>,
    seed: Option<u64>,
    config: &Config,
    output: &Output,
) -> Result<()> {
    let count = count.unwrap_or(config.simulation.batch_size);
    let mut rng = make_rng(seed.or(config.simulation.seed));

    let updates = catalog
        .generate_random_views_batch_with(count, &mut rng)
        .wrap_err("Could not simulate views")?;

    if output.is_human() {
        output.println(format!("\nSimulated {} random view batch(es):", updates.len()));
        for update in &updates {
            output.println(format!(
                "  {} +{} -> {} views",
                update.title, update.increment, update.views
            ));
        }
    } else {
        let updates = serde_json::to_value(&updates).unwrap_or_default();
        output.json(&json!({ "type": "views", "updates": updates }));
    }
    Ok(())
}
