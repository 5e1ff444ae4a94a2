//! Display strings for query results.

use reelshelf_core::SearchOutcome;

pub fn search_header(title: &str) -> String {
    format!("Below you will find all positions matching {}:", title)
}

pub fn search_not_found(title: &str) -> String {
    format!("No positions found matching {}.", title)
}

pub fn season_added(count: usize, title: &str, season: u32) -> String {
    format!(
        "{} episodes of tv series {} season {} successfully added to library.",
        count, title, season
    )
}

pub fn season_rejected(title: &str, reason: impl std::fmt::Display) -> String {
    format!("Could not add episodes of tv series {}: {}", title, reason)
}

/// Header plus one rendered line per match, or the not-found line.
pub fn search_lines(title: &str, outcome: &SearchOutcome<'_>) -> Vec<String> {
    match outcome {
        SearchOutcome::Found(items) => std::iter::once(search_header(title))
            .chain(items.iter().map(|item| item.to_string()))
            .collect(),
        SearchOutcome::NotFound => vec![search_not_found(title)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelshelf_core::Catalog;
    use reelshelf_models::MediaItem;

    #[test]
    fn test_search_lines_found() {
        let mut catalog = Catalog::new();
        catalog.register(MediaItem::episode("Breaking Bad", 2008, "Crime", 0, 5, 12).unwrap());
        catalog.register(MediaItem::episode("Breaking Bad", 2008, "Crime", 0, 5, 13).unwrap());

        let lines = search_lines("Breaking Bad", &catalog.search("Breaking Bad"));
        assert_eq!(
            lines,
            vec![
                "Below you will find all positions matching Breaking Bad:",
                "Breaking Bad S05E12",
                "Breaking Bad S05E13",
            ]
        );
    }

    #[test]
    fn test_search_lines_not_found() {
        let catalog = Catalog::new();
        assert_eq!(
            search_lines("Nope", &catalog.search("Nope")),
            vec!["No positions found matching Nope."]
        );
    }

    #[test]
    fn test_season_added() {
        assert_eq!(
            season_added(3, "The Office", 2),
            "3 episodes of tv series The Office season 2 successfully added to library."
        );
    }
}
