use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::tictactoe::{Difficulty, Mark};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";
const MAX_BOT_DELAY_MS: u64 = 5000;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path_override: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    match path_override {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ClientConfig {
    pub difficulty: Difficulty,
    pub player_mark: Mark,
    /// Pause before the bot answers, so its move does not appear instantly.
    pub bot_delay_ms: u64,
    pub seed: Option<u64>,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {} (got {})",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            player_mark: Mark::X,
            bot_delay_ms: 500,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::ConfigSerializer;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: ClientConfig = serializer
            .deserialize("difficulty: hard\nplayer_mark: O\n")
            .unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.player_mark, Mark::O);
        assert_eq!(config.bot_delay_ms, 500);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<ClientConfig, _> = serializer.deserialize("difficulty: brutal\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_long_delay_is_invalid() {
        let config = ClientConfig {
            bot_delay_ms: 10_000,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
