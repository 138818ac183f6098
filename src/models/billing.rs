use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 付款状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "Not Applicable")]
    NotApplicable,
    #[serde(rename = "Unpaid")]
    Unpaid,
    #[serde(rename = "Partially Paid")]
    PartiallyPaid,
    #[serde(rename = "Fully Paid")]
    FullyPaid,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::NotApplicable,
        PaymentStatus::Unpaid,
        PaymentStatus::PartiallyPaid,
        PaymentStatus::FullyPaid,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::NotApplicable => "Not Applicable",
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::PartiallyPaid => "Partially Paid",
            PaymentStatus::FullyPaid => "Fully Paid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PaymentStatus::ALL
            .iter()
            .copied()
            .find(|status| status.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown payment status: {}", s))
    }
}

/// 账单派生状态
///
/// `outstanding` 和 `payment_status` 总是由 `bill_amount` / `amount_paid`
/// 推导而来, 通过 `BillingDeriver` 构造。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingState {
    pub bill_amount: BigDecimal,
    pub amount_paid: BigDecimal,
    pub outstanding: BigDecimal,
    pub payment_status: PaymentStatus,
}

impl BillingState {
    /// 已付金额超过账单金额 (需要报错, 不做截断)
    pub fn exceeds_bill(&self) -> bool {
        self.amount_paid > self.bill_amount
    }
}
