use crate::error::Result;
use serde::{Deserialize, Serialize};

/// 配置文件名 (不含扩展名, 可选)
pub const CONFIG_FILE: &str = "hms-form-rules";

/// 环境变量前缀, 例如 `HMS_LOG__LEVEL=debug`
pub const ENV_PREFIX: &str = "HMS";

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub log: LogConfig,
    pub audit: AuditConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// 是否使用 rayon 并行审计
    pub parallel: bool,
    /// 每处理多少行输出一次进度日志
    pub progress_every: usize,
    /// 审计结果 CSV 输出路径
    pub output: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: LogConfig {
                level: "info".to_string(),
            },
            audit: AuditConfig {
                parallel: true,
                progress_every: 1000,
                output: None,
            },
            display: DisplayConfig {
                currency_symbol: "₹".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 -> hms-form-rules.toml (可选) -> HMS_ 环境变量
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// 日志级别, 无法识别时回退到 INFO
    pub fn log_level(&self) -> tracing::Level {
        self.log.level.parse().unwrap_or(tracing::Level::INFO)
    }
}
