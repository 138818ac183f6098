use super::{BillingState, InsuranceSelection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 单个校验器的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Check {
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// 字段级失败 (字段名 + 提示信息)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFailure {
    pub field: String,
    pub message: String,
}

impl FieldFailure {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 整张表单的校验结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub form: String,
    pub valid: bool,
    pub failures: Vec<FieldFailure>,
    /// 即使校验失败也照常计算
    pub billing: Option<BillingState>,
    pub insurance: Option<InsuranceSelection>,
    pub validated_at: DateTime<Utc>,
}

impl ValidationReport {
    pub fn failures_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldFailure> {
        self.failures.iter().filter(move |f| f.field == field)
    }

    pub fn has_failure(&self, field: &str) -> bool {
        self.failures_for(field).next().is_some()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.message.as_str()).collect()
    }
}
