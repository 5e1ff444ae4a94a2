use crate::messages;
use crate::output::Output;
use color_eyre::Result;
use reelshelf_config::Config;
use reelshelf_models::ContentKind;

use super::seed_catalog;
use super::simulate::simulate_views;

const DEMO_SERIES: &str = "The Office";

/// Walks through every catalog query against the configured library.
pub fn run_demo(config: &Config, output: &Output) -> Result<()> {
    let mut catalog = seed_catalog(config)?;

    let all: Vec<_> = catalog.items().iter().collect();
    output.items("Full library:", &all);
    output.items("Movies in the library:", &catalog.movies());
    output.items("TV series in the library:", &catalog.episodes());

    let hit = catalog
        .episodes()
        .first()
        .map(|item| item.title().to_string())
        .unwrap_or_else(|| "Breaking Bad".to_string());
    for title in [hit.as_str(), "The Godfather"] {
        output.println("");
        for line in messages::search_lines(title, &catalog.search(title)) {
            output.println(line);
        }
    }

    output.println("");
    match catalog.add_season(DEMO_SERIES, 2005, "Comedy", 2, 3) {
        Ok(added) => output.success(messages::season_added(added, DEMO_SERIES, 2)),
        Err(e) => output.warn(messages::season_rejected(DEMO_SERIES, e)),
    }
    // A zero-length season is rejected without touching the catalog
    if let Err(e) = catalog.add_season(DEMO_SERIES, 2005, "Comedy", 3, 0) {
        output.warn(messages::season_rejected(DEMO_SERIES, e));
    }
    output.println(format!(
        "{} has {} episode(s) in the library.",
        DEMO_SERIES,
        catalog.count_episodes(DEMO_SERIES)
    ));

    simulate_views(&mut catalog, None, None, config, output)?;

    let top_count = config.ranking.top_count;
    for kind in [ContentKind::Movie, ContentKind::TvSeries] {
        output.items(
            &format!("Top {} {} titles by views:", top_count, kind),
            &catalog.top_titles(kind, top_count),
        );
    }

    Ok(())
}
