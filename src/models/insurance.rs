use serde::{Deserialize, Serialize};

/// 依赖字段的显示/必填状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentField {
    pub visible: bool,
    pub required: bool,
}

/// 保险选择
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceSelection {
    pub covered: bool,
    pub details: Option<String>,
    pub required_when_covered: bool,
}

impl InsuranceSelection {
    /// 有保险但未填写详情
    pub fn missing_details(&self) -> bool {
        self.required_when_covered
            && self
                .details
                .as_deref()
                .map_or(true, |d| d.trim().is_empty())
    }
}
