use thiserror::Error;

/// 外围错误 (文件、解析、配置)
///
/// 表单校验失败不走这里，而是作为 `FieldFailure` 数据返回。
#[derive(Debug, Error)]
pub enum FormRulesError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("unknown form: {0}")]
    UnknownForm(String),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, FormRulesError>;
