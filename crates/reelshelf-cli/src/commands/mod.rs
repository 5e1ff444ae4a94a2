pub mod browse;
pub mod config;
pub mod demo;
pub mod simulate;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reelshelf_config::Config;
use reelshelf_core::Catalog;

/// Fresh catalog holding the configured library followed by its seasons.
pub fn seed_catalog(config: &Config) -> Result<Catalog> {
    config
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("Invalid configuration: {}", e))?;

    let mut catalog = Catalog::new();
    catalog
        .extend_entries(&config.library)
        .wrap_err("Failed to load library from configuration")?;

    for batch in &config.seasons {
        catalog
            .add_season(
                &batch.title,
                batch.release_year,
                &batch.genre,
                batch.season,
                batch.episodes,
            )
            .wrap_err_with(|| format!("Failed to add season {} of {}", batch.season, batch.title))?;
    }

    tracing::debug!(items = catalog.len(), "Seeded catalog");
    Ok(catalog)
}

pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelshelf_config::SeasonBatch;

    #[test]
    fn test_seed_catalog_from_defaults() {
        let catalog = seed_catalog(&Config::default()).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.movies().len(), 2);
    }

    #[test]
    fn test_seed_catalog_with_seasons() {
        let mut config = Config::default();
        config.seasons.push(SeasonBatch {
            title: "The Office".to_string(),
            release_year: 2005,
            genre: "Comedy".to_string(),
            season: 2,
            episodes: 4,
        });
        let catalog = seed_catalog(&config).unwrap();
        assert_eq!(catalog.count_episodes("The Office"), 4);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = seed_catalog(&Config::default()).unwrap();
        let mut b = seed_catalog(&Config::default()).unwrap();
        let first = a.generate_random_views_batch_with(5, &mut make_rng(Some(1))).unwrap();
        let second = b.generate_random_views_batch_with(5, &mut make_rng(Some(1))).unwrap();
        assert_eq!(first, second);
    }
}
