use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 字段类型 (决定使用哪个校验器)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// 普通文本, 只做必填校验
    Text,
    /// 年龄: 整数, 范围见 `AGE_MIN..=AGE_MAX`
    Age,
    /// 金额: 数字且 >= 0
    Money,
    /// 通用数字区间 (闭区间, 边界可选)
    Number {
        min: Option<BigDecimal>,
        max: Option<BigDecimal>,
    },
    Email,
    PatientId,
    /// 下拉选择, 值必须在选项内
    Select { options: Vec<String> },
}

/// 字段声明
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn required(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: true,
        }
    }

    pub fn optional(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: false,
        }
    }
}

/// 跨字段规则: 已付金额不得超过账单金额, 同时驱动派生字段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingRule {
    pub bill_field: String,
    pub paid_field: String,
    pub outstanding_field: Option<String>,
    pub status_field: Option<String>,
}

/// 跨字段规则: 选择有保险时, 保险详情必填
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceRule {
    pub selector_field: String,
    pub details_field: String,
}

/// 表单声明 (字段顺序即错误输出顺序)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    pub name: String,
    pub fields: Vec<FieldSpec>,
    pub billing: Option<BillingRule>,
    pub insurance: Option<InsuranceRule>,
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn is_billing_input(&self, name: &str) -> bool {
        self.billing
            .as_ref()
            .map_or(false, |b| b.bill_field == name || b.paid_field == name)
    }

    pub fn is_insurance_selector(&self, name: &str) -> bool {
        self.insurance
            .as_ref()
            .map_or(false, |i| i.selector_field == name)
    }
}

/// 表单当前值 (字段名 -> 原始字符串), 保持输入顺序
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormValues(IndexMap<String, String>);

/// JSON 中的数字/布尔值按原文转为字符串, null 视为空
impl<'de> Deserialize<'de> for FormValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(name, value)| {
                let text = match value {
                    Value::String(s) => s,
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    Value::Null => String::new(),
                    other => {
                        return Err(de::Error::custom(format!(
                            "field `{}` must be a scalar, got {}",
                            name, other
                        )))
                    }
                };
                Ok((name, text))
            })
            .collect::<Result<IndexMap<_, _>, _>>()
            .map(FormValues)
    }
}

impl FormValues {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// 缺失字段按空字符串处理
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 一次提交: 表单名 + 字段值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSubmission {
    pub form: String,
    pub values: FormValues,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_json_values_become_strings() {
        let submission: FormSubmission = serde_json::from_str(
            r#"{"form":"patient_registration","values":{"bill_amount":100,"amount_paid":40.5,"name":"Asha","insured":false,"email":null}}"#,
        )
        .unwrap();

        assert_eq!(submission.values.get("bill_amount"), "100");
        assert_eq!(submission.values.get("amount_paid"), "40.5");
        assert_eq!(submission.values.get("name"), "Asha");
        assert_eq!(submission.values.get("insured"), "false");
        assert_eq!(submission.values.get("email"), "");
        assert_eq!(submission.values.len(), 5);
    }

    #[test]
    fn nested_json_values_are_rejected() {
        let result: serde_json::Result<FormValues> =
            serde_json::from_str(r#"{"bill_amount":[100]}"#);
        assert!(result.is_err());
    }
}
