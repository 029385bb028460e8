//! Boss configuration loader.

use std::path::Path;

use encounter_core::BossConfig;

use crate::loaders::{LoadResult, read_file};

/// File format of a config source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Ron,
}

impl ConfigFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        match extension.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "ron" => Some(Self::Ron),
            _ => None,
        }
    }
}

/// Boss presets bundled with the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// The shipped final boss.
    FinalBoss,
    /// Final boss with faster phases and harsher rolls.
    Nightmare,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::FinalBoss, Preset::Nightmare];

    pub fn name(self) -> &'static str {
        match self {
            Preset::FinalBoss => "final_boss",
            Preset::Nightmare => "nightmare",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }

    fn source(self) -> (ConfigFormat, &'static str) {
        match self {
            Preset::FinalBoss => (
                ConfigFormat::Toml,
                include_str!("../../data/final_boss.toml"),
            ),
            Preset::Nightmare => (ConfigFormat::Ron, include_str!("../../data/nightmare.ron")),
        }
    }
}

/// Loader for boss configuration from TOML or RON files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a config file.
    ///
    /// The format follows the extension: `.toml` or `.ron`.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, has an unknown extension, does not
    /// parse, or describes an invalid boss.
    pub fn load(path: &Path) -> LoadResult<BossConfig> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            anyhow::anyhow!(
                "Unsupported config extension for {} (expected .toml or .ron)",
                path.display()
            )
        })?;
        let content = read_file(path)?;
        let config = Self::parse(&content, format)
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;
        tracing::debug!(path = %path.display(), ?format, "loaded boss config");
        Ok(config)
    }

    /// Parse and validate config text.
    ///
    /// # Errors
    ///
    /// Fails on syntax errors, unknown shapes or validation failures.
    pub fn parse(content: &str, format: ConfigFormat) -> LoadResult<BossConfig> {
        let config: BossConfig = match format {
            ConfigFormat::Toml => toml::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?,
            ConfigFormat::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config RON: {}", e))?,
        };
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid boss config: {}", e))?;
        Ok(config)
    }

    /// Load one of the bundled presets.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled file itself is broken.
    pub fn preset(preset: Preset) -> LoadResult<BossConfig> {
        let (format, content) = preset.source();
        Self::parse(content, format)
            .map_err(|e| anyhow::anyhow!("Preset {}: {}", preset.name(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("boss.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("data/boss.RON")),
            Some(ConfigFormat::Ron)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("boss.json")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("boss")), None);
    }

    #[test]
    fn empty_toml_is_the_default_boss() {
        let config = ConfigLoader::parse("", ConfigFormat::Toml).unwrap();
        assert_eq!(config, BossConfig::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = ConfigLoader::parse(
            "[stats]\nmax_health = 2000.0\n\n[teleport]\ncooldown = 6.0\n",
            ConfigFormat::Toml,
        )
        .unwrap();
        assert_eq!(config.stats.max_health, 2000.0);
        assert_eq!(config.stats.attack_range, 4.0);
        assert_eq!(config.teleport.cooldown, 6.0);
        assert_eq!(config.teleport.attack_chance, 0.7);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ConfigLoader::parse("[reflection]\nchance = 1.5\n", ConfigFormat::Toml)
            .unwrap_err();
        assert!(err.to_string().contains("reflection.chance"));
    }

    #[test]
    fn bundled_presets_load() {
        let final_boss = ConfigLoader::preset(Preset::FinalBoss).unwrap();
        assert_eq!(final_boss, BossConfig::default());

        let nightmare = ConfigLoader::preset(Preset::Nightmare).unwrap();
        assert!(nightmare.stats.max_health > final_boss.stats.max_health);
    }

    #[test]
    fn presets_resolve_by_name() {
        assert_eq!(Preset::from_name("nightmare"), Some(Preset::Nightmare));
        assert_eq!(Preset::from_name("missing"), None);
    }
}
