//! Seeding policy applied once at process start.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// How a service's seed records are applied to its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeedMode {
    /// Insert the seed records on every start, whatever the store holds.
    AlwaysAppend,
    /// Insert the seed records only when the store is empty.
    SeedIfEmpty,
}

/// What a seed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// This many records were inserted.
    Inserted(usize),
    /// Nothing was inserted because the store already held records.
    Skipped { existing: usize },
}

/// Returned when a seed mode name is not recognised.
#[derive(Debug, thiserror::Error)]
#[error("unknown seed mode {0:?} (expected `always-append` or `seed-if-empty`)")]
pub struct UnknownSeedMode(pub String);

impl SeedMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlwaysAppend => "always-append",
            Self::SeedIfEmpty => "seed-if-empty",
        }
    }
}

impl fmt::Display for SeedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeedMode {
    type Err = UnknownSeedMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always-append" => Ok(Self::AlwaysAppend),
            "seed-if-empty" => Ok(Self::SeedIfEmpty),
            other => Err(UnknownSeedMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_modes() {
        assert_eq!("always-append".parse::<SeedMode>().unwrap(), SeedMode::AlwaysAppend);
        assert_eq!("seed-if-empty".parse::<SeedMode>().unwrap(), SeedMode::SeedIfEmpty);
    }

    #[test]
    fn should_reject_unknown_mode() {
        let err = "sometimes".parse::<SeedMode>().unwrap_err();
        assert_eq!(err.0, "sometimes");
    }

    #[test]
    fn should_deserialize_kebab_case() {
        let mode: SeedMode = serde_json::from_str(r#""seed-if-empty""#).unwrap();
        assert_eq!(mode, SeedMode::SeedIfEmpty);
    }

    #[test]
    fn should_display_as_config_name() {
        assert_eq!(SeedMode::AlwaysAppend.to_string(), "always-append");
    }
}
