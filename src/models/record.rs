use super::{BillingState, FieldFailure, FormValues, PaymentStatus};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// 病人记录 (导出 CSV 的一行)
///
/// 所有列都按字符串读取, 缺失列为空字符串, 由校验器决定是否合法。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientRecord {
    pub patient_id: String,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub locality: String,
    pub condition_severity: String,
    pub priority_level: String,
    pub medical_history: String,
    pub bill_amount: String,
    pub amount_paid: String,
    pub outstanding_amount: String,
    pub payment_status: String,
    pub insurance_coverage: String,
    pub insurance_details: String,
    pub admission_date: String,
    pub discharge_date: String,
    pub timestamp: String,
}

impl PatientRecord {
    /// 转成登记表的字段值
    pub fn to_form_values(&self) -> FormValues {
        FormValues::from_pairs([
            ("name", self.name.as_str()),
            ("age", self.age.as_str()),
            ("gender", self.gender.as_str()),
            ("locality", self.locality.as_str()),
            ("condition_severity", self.condition_severity.as_str()),
            ("medical_history", self.medical_history.as_str()),
            ("bill_amount", self.bill_amount.as_str()),
            ("amount_paid", self.amount_paid.as_str()),
            ("outstanding_amount", self.outstanding_amount.as_str()),
            ("payment_status", self.payment_status.as_str()),
            ("insurance_coverage", self.insurance_coverage.as_str()),
            ("insurance_details", self.insurance_details.as_str()),
        ])
    }
}

/// 单行审计结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordFinding {
    /// 数据行号 (从 1 开始, 不含表头)
    pub row: usize,
    pub patient_id: String,
    pub failures: Vec<FieldFailure>,
    pub derived: BillingState,
    pub stored_outstanding: String,
    pub stored_status: String,
    /// 存储的未结金额与重新派生的不一致
    pub stale_outstanding: bool,
    /// 存储的付款状态与重新派生的不一致
    pub stale_status: bool,
}

impl RecordFinding {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && !self.stale_outstanding && !self.stale_status
    }
}

/// 账单汇总 (按派生后的状态统计)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingSummary {
    pub total_records: usize,
    pub not_applicable: usize,
    pub unpaid: usize,
    pub partially_paid: usize,
    pub fully_paid: usize,
    pub total_billed: BigDecimal,
    pub total_paid: BigDecimal,
    pub total_outstanding: BigDecimal,
    /// 已付 / 应付 * 100, 无应付金额时为 0
    pub collection_rate: BigDecimal,
}

impl BillingSummary {
    pub fn count(&self, status: PaymentStatus) -> usize {
        match status {
            PaymentStatus::NotApplicable => self.not_applicable,
            PaymentStatus::Unpaid => self.unpaid,
            PaymentStatus::PartiallyPaid => self.partially_paid,
            PaymentStatus::FullyPaid => self.fully_paid,
        }
    }
}

/// 审计报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub findings: Vec<RecordFinding>,
    pub summary: BillingSummary,
}

impl AuditReport {
    pub fn flagged(&self) -> impl Iterator<Item = &RecordFinding> {
        self.findings.iter().filter(|f| !f.is_clean())
    }
}
