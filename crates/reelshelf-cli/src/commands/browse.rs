use crate::messages;
use crate::output::Output;
use clap::ValueEnum;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use reelshelf_config::Config;
use serde_json::json;

use super::seed_catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    All,
    Movie,
    #[value(name = "tv-series")]
    TvSeries,
}

pub fn run_list(kind: ListKind, config: &Config, output: &Output) -> Result<()> {
    let catalog = seed_catalog(config)?;

    match kind {
        ListKind::All => {
            let items: Vec<_> = catalog.items().iter().collect();
            output.items("Full library:", &items);
        }
        ListKind::Movie => output.items("Movies in the library:", &catalog.movies()),
        ListKind::TvSeries => output.items("TV series in the library:", &catalog.episodes()),
    }
    Ok(())
}

pub fn run_search(title: &str, config: &Config, output: &Output) -> Result<()> {
    let catalog = seed_catalog(config)?;
    let outcome = catalog.search(title);

    if output.is_human() {
        for line in messages::search_lines(title, &outcome) {
            output.println(line);
        }
    } else {
        let items = serde_json::to_value(outcome.items()).unwrap_or_default();
        output.json(&json!({
            "type": "search",
            "title": title,
            "found": outcome.is_found(),
            "items": items,
        }));
    }

    if !outcome.is_found() {
        tracing::debug!(title, "Search returned no matches");
    }
    Ok(())
}

pub fn run_count_episodes(title: &str, config: &Config, output: &Output) -> Result<()> {
    let catalog = seed_catalog(config)?;
    let count = catalog.count_episodes(title);

    if output.is_human() {
        output.println(format!("{} has {} episode(s) in the library.", title, count));
    } else {
        output.json(&json!({ "type": "count_episodes", "title": title, "count": count }));
    }
    Ok(())
}

pub fn run_top(kind: &str, count: Option<usize>, config: &Config, output: &Output) -> Result<()> {
    let catalog = seed_catalog(config)?;
    let count = count.unwrap_or(config.ranking.top_count);

    let top = catalog
        .top_titles_str(kind, count)
        .wrap_err("Could not rank titles")?;
    output.items(&format!("Top {} {} titles by views:", count, kind.trim().to_lowercase()), &top);
    Ok(())
}
