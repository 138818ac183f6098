use crate::models::Check;
use bigdecimal::{BigDecimal, Zero};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

/// 年龄下限 (含)
pub const AGE_MIN: i64 = 1;
/// 年龄上限 (含)
pub const AGE_MAX: i64 = 120;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PATIENT_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^HMS-[0-9]{4}-[A-Za-z0-9]{8}$").expect("valid patient id pattern")
});

/// 普通十进制写法; 不接受科学计数法
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)$").expect("valid number pattern")
});

pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PATIENT_ID_MESSAGE: &str = "Patient ID must be in format HMS-YYYY-XXXXXXXX";

/// 数字区间 (闭区间, 边界可选)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericBounds {
    pub min: Option<BigDecimal>,
    pub max: Option<BigDecimal>,
}

impl NumericBounds {
    pub fn new(min: Option<BigDecimal>, max: Option<BigDecimal>) -> Self {
        Self { min, max }
    }

    /// 金额: >= 0, 无上限
    pub fn non_negative() -> Self {
        Self {
            min: Some(BigDecimal::zero()),
            max: None,
        }
    }
}

/// 必填: 去掉首尾空白后非空
pub fn required(value: &str, label: &str) -> Check {
    if value.trim().is_empty() {
        Check::fail(format!("{} is required", label))
    } else {
        Check::pass()
    }
}

/// 解析数字, 失败返回 None
///
/// 只接受普通十进制写法, `1e5` 之类的指数形式视为非数字
pub fn parse_number(value: &str) -> Option<BigDecimal> {
    let value = value.trim();
    if !NUMBER_PATTERN.is_match(value) {
        return None;
    }
    BigDecimal::from_str(value).ok()
}

/// 解析金额, 缺失或无法解析时按 0 处理
pub fn number_or_zero(value: &str) -> BigDecimal {
    parse_number(value).unwrap_or_else(BigDecimal::zero)
}

/// 数字区间校验: 非数字和越界使用不同的提示
pub fn numeric_range(value: &str, label: &str, bounds: &NumericBounds) -> Check {
    let Some(number) = parse_number(value) else {
        return Check::fail(format!("{} must be a valid number", label));
    };

    if let Some(min) = &bounds.min {
        if &number < min {
            return Check::fail(format!("{} must be at least {}", label, min));
        }
    }
    if let Some(max) = &bounds.max {
        if &number > max {
            return Check::fail(format!("{} must not exceed {}", label, max));
        }
    }

    Check::pass()
}

/// 年龄校验: 整数, 且在 `AGE_MIN..=AGE_MAX` 之内
pub fn age(value: &str, label: &str) -> Check {
    match value.trim().parse::<i64>() {
        Err(_) => Check::fail(format!("{} must be a whole number", label)),
        Ok(age) if !(AGE_MIN..=AGE_MAX).contains(&age) => Check::fail(format!(
            "{} must be between {} and {}",
            label, AGE_MIN, AGE_MAX
        )),
        Ok(_) => Check::pass(),
    }
}

pub fn email(value: &str) -> Check {
    if EMAIL_PATTERN.is_match(value.trim()) {
        Check::pass()
    } else {
        Check::fail(EMAIL_MESSAGE)
    }
}

/// 病人编号: HMS-四位年份-八位字母数字
pub fn patient_id(value: &str) -> Check {
    if PATIENT_ID_PATTERN.is_match(value.trim()) {
        Check::pass()
    } else {
        Check::fail(PATIENT_ID_MESSAGE)
    }
}

pub fn one_of(value: &str, label: &str, options: &[String]) -> Check {
    let value = value.trim();
    if options.iter().any(|o| o == value) {
        Check::pass()
    } else {
        Check::fail(format!("{} must be one of: {}", label, options.join(", ")))
    }
}
