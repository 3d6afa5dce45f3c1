//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Optional skill catalog override: category -> skill tokens.
    /// When absent the built-in catalog is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<BTreeMap<String, Vec<String>>>,
}

/// Product-tuning constants for the similarity blend. Kept as named,
/// overridable values so they can be recalibrated without touching the
/// algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight of the TF-IDF cosine term.
    pub content_weight: f32,
    /// Weight of the skill-overlap ratio.
    pub skill_weight: f32,
    /// Scale applied before the floor; rescales 0-1 into floor..1.
    pub score_scale: f32,
    /// Floor added after scaling.
    pub score_floor: f32,
    /// Vocabulary cap for the per-call TF-IDF vectorizer.
    pub max_vocabulary: usize,
    /// Upper document-frequency bound for vocabulary terms.
    pub max_doc_frequency: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            content_weight: 0.4,
            skill_weight: 0.6,
            score_scale: 0.7,
            score_floor: 0.3,
            max_vocabulary: 5000,
            max_doc_frequency: 0.95,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_weights() {
        let scoring = ScoringConfig::default();
        assert_eq!(scoring.content_weight, 0.4);
        assert_eq!(scoring.skill_weight, 0.6);
        assert_eq!(scoring.score_scale, 0.7);
        assert_eq!(scoring.score_floor, 0.3);
        assert_eq!(scoring.max_vocabulary, 5000);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.scoring.content_weight, config.scoring.content_weight);
        assert!(parsed.skills.is_none());
    }

    #[test]
    fn test_skills_override_parses() {
        let toml_text = r#"
            [skills]
            programming = ["cobol", "fortran"]
        "#;
        let config: Config = toml::from_str(toml_text).unwrap();
        let skills = config.skills.unwrap();
        assert_eq!(skills["programming"], vec!["cobol", "fortran"]);
    }
}
