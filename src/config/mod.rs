use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub fusion: FusionConfig,
    pub synthetic: SyntheticConfig,
}

/// Knobs for the greedy merge loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionConfig {
    /// Minimum coincidence count a round winner must reach before its merge is
    /// accepted. The puzzle domain guarantees 12 shared beacons along the
    /// overlap chain; set to 1 to accept the best available transform
    /// unconditionally, matching the original unhardened behavior.
    pub min_coincidences: usize,
}

/// Parameters for the synthetic scene generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// Number of scanners in the chain.
    pub scanners: usize,
    /// Beacons placed in the overlap slab of each consecutive scanner pair.
    pub shared_beacons: usize,
    /// Extra beacons spread over each scanner's own field of view.
    pub unique_beacons: usize,
    /// Chebyshev observation range of a scanner.
    pub range: i64,
    /// Distance between consecutive scanner positions. Must stay below
    /// `2 * range` so overlap slabs exist.
    pub spacing: i64,
    /// RNG seed; fixed seeds reproduce scenes exactly.
    pub seed: u64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            min_coincidences: 12,
        }
    }
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            scanners: 5,
            shared_beacons: 12,
            unique_beacons: 8,
            range: 1000,
            spacing: 1200,
            seed: 0,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = fs::read_to_string(path)?;

        if content.trim_start().starts_with('{') {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(toml::from_str(&content)?)
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, format: ConfigFormat) -> crate::Result<()> {
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.fusion.min_coincidences == 0 {
            errors.push("fusion min_coincidences must be at least 1".to_string());
        }

        if self.synthetic.scanners == 0 {
            errors.push("synthetic scanners must be positive".to_string());
        }

        if self.synthetic.range <= 0 {
            errors.push("synthetic range must be positive".to_string());
        }

        if self.synthetic.spacing <= 0 || self.synthetic.spacing >= 2 * self.synthetic.range {
            errors.push("synthetic spacing must be in (0, 2 * range) so scanner ranges overlap".to_string());
        }

        if self.synthetic.shared_beacons < self.fusion.min_coincidences {
            errors.push("synthetic shared_beacons below fusion min_coincidences; generated scenes would be unresolvable".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone)]
pub enum ConfigFormat {
    Json,
    Toml,
}

pub fn load_config_or_default(config_path: Option<&str>) -> Config {
    match config_path {
        Some(path) => {
            match Config::load_from_file(path) {
                Ok(config) => {
                    if let Err(errors) = config.validate() {
                        eprintln!("Configuration validation errors:");
                        for error in errors {
                            eprintln!("  - {}", error);
                        }
                        eprintln!("Using default configuration instead.");
                        Config::default()
                    } else {
                        config
                    }
                }
                Err(e) => {
                    eprintln!("Failed to load config from '{}': {}", path, e);
                    eprintln!("Using default configuration.");
                    Config::default()
                }
            }
        }
        None => Config::default(),
    }
}
