//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. `PORT` / `INSTANCE_ID` 环境变量
//! 2. `USERBOOK_` 前缀环境变量
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 部署约定的裸环境变量（`PORT`、`INSTANCE_ID`）
///
/// 空字符串视为未设置。
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub port: Option<String>,
    pub instance_id: Option<String>,
}

impl EnvOverrides {
    /// 从进程环境读取
    pub fn from_env() -> Self {
        Self {
            port: non_empty_var("PORT"),
            instance_id: non_empty_var("INSTANCE_ID"),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// 加载应用配置
///
/// # 环境变量示例
/// - `PORT=8080`
/// - `INSTANCE_ID=web-1`
/// - `USERBOOK_SERVER__HOST=127.0.0.1`
/// - `USERBOOK_DATABASE__PATH=/data/users.db`
/// - `USERBOOK_DATABASE__INIT_SCHEMA=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_with(config_path, &EnvOverrides::from_env())
}

/// 使用显式的 `PORT` / `INSTANCE_ID` 覆盖值加载配置
pub fn load_config_with(
    config_path: Option<&Path>,
    overrides: &EnvOverrides,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("database.path", "data/userbook.db")?
        .set_default("database.max_connections", 5)?
        .set_default("database.init_schema", false)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量
    // 例如: USERBOOK_DATABASE__PATH=/data/users.db
    builder = builder.add_source(
        Environment::with_prefix("USERBOOK")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 部署约定的裸环境变量（最高优先级）
    builder = builder
        .set_override_option("server.port", overrides.port.clone())?
        .set_override_option("server.instance_id", overrides.instance_id.clone())?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "PORT env is required".to_string(),
        ));
    }

    if config.server.host.is_empty() {
        return Err(ConfigError::ValidationError(
            "Server host cannot be empty".to_string(),
        ));
    }

    if config.database.path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database path cannot be empty".to_string(),
        ));
    }

    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "Database max_connections cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!(
        "Instance ID: {}",
        config.server.instance_id().unwrap_or("<none>")
    );
    tracing::info!("Database: {}", config.database.path);
    tracing::info!("Database Max Connections: {}", config.database.max_connections);
    tracing::info!("Database Init Schema: {}", config.database.init_schema);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.server.port = 8080;
        config
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validation_error_for_missing_port() {
        let config = AppConfig::default();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("PORT env is required"));
    }

    #[test]
    fn test_validation_error_for_empty_db_path() {
        let mut config = valid_config();
        config.database.path = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_max_connections() {
        let mut config = valid_config();
        config.database.max_connections = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [server]
            port = 9000
            instance_id = "file-instance"

            [database]
            path = "/tmp/users.db"
            init_schema = true
            "#,
        )
        .unwrap();

        let config = load_config_with(Some(path.as_path()), &EnvOverrides::default()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.instance_id(), Some("file-instance"));
        assert_eq!(config.database.path, "/tmp/users.db");
        assert!(config.database.init_schema);
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_env_overrides_win_over_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [server]
            port = 9000
            "#,
        )
        .unwrap();

        let overrides = EnvOverrides {
            port: Some("7000".to_string()),
            instance_id: Some("abc".to_string()),
        };
        let config = load_config_with(Some(path.as_path()), &overrides).unwrap();
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.server.instance_id(), Some("abc"));
    }

    #[test]
    fn test_missing_port_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[log]\nlevel = \"debug\"\n").unwrap();

        let result = load_config_with(Some(path.as_path()), &EnvOverrides::default());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_non_numeric_port_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let overrides = EnvOverrides {
            port: Some("http".to_string()),
            instance_id: None,
        };
        let result = load_config_with(Some(path.as_path()), &overrides);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
