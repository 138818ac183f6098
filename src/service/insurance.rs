use crate::models::{DependentField, InsuranceSelection};

pub const INSURANCE_DETAILS_MESSAGE: &str =
    "Insurance details are required when insurance coverage is selected";

/// 选择器取值: "Yes" 表示有保险
pub const COVERED: &str = "Yes";
pub const NOT_COVERED: &str = "No";

/// 条件必填: 保险详情是否显示/必填取决于保险选择
pub struct ConditionalRequirement;

impl ConditionalRequirement {
    /// 与下拉选项一致, 按原值比较 (区分大小写)
    pub fn is_covered(selector: &str) -> bool {
        selector.trim() == COVERED
    }

    pub fn evaluate(covered: bool) -> DependentField {
        DependentField {
            visible: covered,
            required: covered,
        }
    }

    /// 构造保险选择; 不再必填时清空详情, 避免隐藏字段残留旧数据
    pub fn apply(covered: bool, details: &str) -> InsuranceSelection {
        let details = if covered && !details.trim().is_empty() {
            Some(details.trim().to_string())
        } else {
            None
        };

        InsuranceSelection {
            covered,
            details,
            required_when_covered: covered,
        }
    }

    pub fn from_input(selector: &str, details: &str) -> InsuranceSelection {
        Self::apply(Self::is_covered(selector), details)
    }
}
