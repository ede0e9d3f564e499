//! Run configuration: metric weights and input parsing options.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use centrality_model::Weights;

/// Per-metric weights given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightOverrides {
    pub importance: Option<f64>,
    pub frequency: Option<f64>,
    pub relevance: Option<f64>,
}

impl WeightOverrides {
    pub fn apply(self, mut weights: Weights) -> Weights {
        if let Some(weight) = self.importance {
            weights = weights.with_importance(weight);
        }
        if let Some(weight) = self.frequency {
            weights = weights.with_frequency(weight);
        }
        if let Some(weight) = self.relevance {
            weights = weights.with_relevance(weight);
        }
        weights
    }
}

/// Read a JSON weights file. Omitted fields default to 1.0.
pub fn load_weights(path: &Path) -> Result<Weights> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let weights: Weights =
        serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?;
    Ok(weights)
}

/// Defaults, then the weights file, then individual overrides; validated.
pub fn resolve_weights(file: Option<&Path>, overrides: WeightOverrides) -> Result<Weights> {
    let base = match file {
        Some(path) => load_weights(path)?,
        None => Weights::default(),
    };
    let weights = overrides.apply(base);
    weights.validate().context("invalid weights")?;
    Ok(weights)
}

/// Parse a single-byte field delimiter. Accepts `tab` and `\t` for tab.
pub fn parse_delimiter(value: &str) -> Result<u8> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => bail!("delimiter must be a single ASCII character, got {value:?}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_accepts_tab_spellings() {
        assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
        assert_eq!(parse_delimiter("\\t").unwrap(), b'\t');
        assert_eq!(parse_delimiter(";").unwrap(), b';');
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("é").is_err());
    }

    #[test]
    fn overrides_replace_only_given_weights() {
        let overrides = WeightOverrides {
            frequency: Some(2.5),
            ..WeightOverrides::default()
        };
        assert_eq!(overrides.apply(Weights::default()), Weights::new(1.0, 2.5, 1.0));
    }
}
