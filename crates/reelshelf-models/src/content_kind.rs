use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which half of the catalog a ranking query targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Movie,
    TvSeries,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid content type: {0:?}. Use 'movie' or 'tv series'")]
pub struct InvalidContentKind(pub String);

impl FromStr for ContentKind {
    type Err = InvalidContentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movie" => Ok(ContentKind::Movie),
            "tv series" => Ok(ContentKind::TvSeries),
            _ => Err(InvalidContentKind(s.to_string())),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Movie => write!(f, "movie"),
            ContentKind::TvSeries => write!(f, "tv series"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Movie".parse::<ContentKind>(), Ok(ContentKind::Movie));
        assert_eq!("TV Series".parse::<ContentKind>(), Ok(ContentKind::TvSeries));
        assert_eq!(" tv series ".parse::<ContentKind>(), Ok(ContentKind::TvSeries));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "podcast".parse::<ContentKind>(),
            Err(InvalidContentKind("podcast".to_string()))
        );
        assert!("tvseries".parse::<ContentKind>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for kind in [ContentKind::Movie, ContentKind::TvSeries] {
            assert_eq!(kind.to_string().parse::<ContentKind>(), Ok(kind));
        }
    }
}
