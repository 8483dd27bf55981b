//! Output format selection for the `--output` flag.

use clap::ValueEnum;
use serde::Serialize;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text; markup is printed as-is.
    #[default]
    Text,
    /// Serialize the result as JSON.
    Json,
    /// Serialize the result as YAML.
    Yaml,
}

impl OutputFormat {
    /// Returns true for the serialized formats (JSON, YAML).
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Yaml)
    }

    /// Serializes `data` in this format.
    ///
    /// Text mode has no generic serialization; callers format text themselves.
    pub fn serialize<T: Serialize>(&self, data: &T) -> anyhow::Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(data)?),
            OutputFormat::Text => anyhow::bail!("text output is not a serialization format"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        markup: &'static str,
    }

    #[test]
    fn structured_modes() {
        assert!(!OutputFormat::Text.is_structured());
        assert!(OutputFormat::Json.is_structured());
        assert!(OutputFormat::Yaml.is_structured());
    }

    #[test]
    fn serialize_json_and_yaml() {
        let data = Sample { markup: "tree" };
        assert_eq!(
            OutputFormat::Json.serialize(&data).unwrap(),
            "{\n  \"markup\": \"tree\"\n}"
        );
        assert_eq!(
            OutputFormat::Yaml.serialize(&data).unwrap(),
            "markup: tree\n"
        );
        assert!(OutputFormat::Text.serialize(&data).is_err());
    }
}
