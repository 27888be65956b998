use crate::core::{ConfigError, Player, SearchConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_PATH: &str = "noughts_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub search: SearchConfig,
    pub o: StrategyConfig,
    pub x: StrategyConfig,
    /// 端末出力に色を付けるか
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    pub name: String,
    /// Registry name of the evaluator.
    pub evaluator: String,
    /// Falls back to `search.max_depth` when absent.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl StrategyConfig {
    pub fn default_for(player: Player) -> Self {
        StrategyConfig {
            name: format!("Default {}", player),
            evaluator: "piece-count".to_string(),
            max_depth: None,
        }
    }
}

impl GameConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads [`CONFIG_PATH`] from the working directory. A missing file
    /// silently gives the defaults; an unreadable or invalid one is logged.
    pub fn load_or_default() -> Self {
        if !Path::new(CONFIG_PATH).exists() {
            return Self::default();
        }
        Self::load(CONFIG_PATH).unwrap_or_else(|e| {
            log::warn!("ignoring {}: {}", CONFIG_PATH, e);
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let search = &self.search;
        if search.rows == 0 || search.columns == 0 {
            return Err(ConfigError::Validation(
                "board must have at least one row and one column".to_string(),
            ));
        }
        if search.goal == 0 {
            return Err(ConfigError::Validation("goal must be > 0".to_string()));
        }
        Ok(())
    }

    pub fn strategy(&self, player: Player) -> &StrategyConfig {
        match player {
            Player::O => &self.o,
            Player::X => &self.x,
        }
    }

    pub fn strategy_mut(&mut self, player: Player) -> &mut StrategyConfig {
        match player {
            Player::O => &mut self.o,
            Player::X => &mut self.x,
        }
    }

    /// Depth limit for `player`, falling back to the shared search depth.
    pub fn depth_for(&self, player: Player) -> usize {
        self.strategy(player)
            .max_depth
            .unwrap_or(self.search.max_depth)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            search: SearchConfig::default(),
            o: StrategyConfig::default_for(Player::O),
            x: StrategyConfig::default_for(Player::X),
            color: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trip() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.o.name, "Default O");
        assert_eq!(parsed.depth_for(Player::X), 4);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{
            "search": { "goal": 3, "max_depth": 2 },
            "x": { "name": "deep", "evaluator": "lines", "max_depth": 5 }
        }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.search.goal, 3);
        assert_eq!(config.search.rows, 5);
        assert_eq!(config.depth_for(Player::O), 2);
        assert_eq!(config.depth_for(Player::X), 5);
        assert_eq!(config.x.evaluator, "lines");
    }

    #[test]
    fn test_validation() {
        let mut config = GameConfig::default();
        config.search.goal = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = GameConfig::default();
        config.search.columns = 0;
        assert!(config.validate().is_err());
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
