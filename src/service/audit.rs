use crate::config::AuditConfig;
use crate::models::{AuditReport, BillingState, BillingSummary, PatientRecord, PaymentStatus, RecordFinding};
use crate::service::billing::{to_money, MONEY_SCALE};
use crate::service::validators::parse_number;
use crate::service::{schemas, BillingDeriver, FormValidator};
use bigdecimal::{BigDecimal, Zero};
use rayon::prelude::*;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 记录审计服务
///
/// 对导出的每条病人记录重新执行登记表校验, 并用重新派生的账单状态
/// 对比存储的未结金额和付款状态。各行互相独立, 可以并行处理。
pub struct RecordAuditor {
    validator: FormValidator,
    config: AuditConfig,
}

impl RecordAuditor {
    pub fn new(config: AuditConfig) -> Self {
        Self {
            validator: FormValidator::new(schemas::patient_registration()),
            config,
        }
    }

    /// 审计全部记录, 结果保持输入顺序
    pub fn audit(&self, records: &[PatientRecord]) -> AuditReport {
        let total = records.len();
        let processed = AtomicUsize::new(0);

        tracing::info!(
            "开始审计 {} 条记录 (parallel: {})",
            total,
            self.config.parallel
        );

        let audit_one = |(idx, record): (usize, &PatientRecord)| {
            let finding = self.audit_record(idx + 1, record);

            let done = processed.fetch_add(1, Ordering::Relaxed) + 1;
            if self.config.progress_every > 0 && done % self.config.progress_every == 0 {
                tracing::info!("审计进度: {}/{}", done, total);
            }
            finding
        };

        let findings: Vec<RecordFinding> = if self.config.parallel {
            records.par_iter().enumerate().map(audit_one).collect()
        } else {
            records.iter().enumerate().map(audit_one).collect()
        };

        let summary = summarize(findings.iter().map(|f| &f.derived));
        let flagged = findings.iter().filter(|f| !f.is_clean()).count();
        tracing::info!(
            "审计完成: 总记录: {}, 有问题: {}, 收款率: {}%",
            total,
            flagged,
            summary.collection_rate
        );

        AuditReport { findings, summary }
    }

    /// 审计单条记录
    pub fn audit_record(&self, row: usize, record: &PatientRecord) -> RecordFinding {
        let values = record.to_form_values();
        let report = self.validator.validate(&values);
        let derived = report.billing.unwrap_or_else(|| {
            BillingDeriver::derive_from_input(&record.bill_amount, &record.amount_paid)
        });

        let stale_outstanding = match parse_number(&record.outstanding_amount) {
            Some(stored) => to_money(&stored) != derived.outstanding,
            None => true,
        };
        let stale_status = match PaymentStatus::from_str(&record.payment_status) {
            Ok(stored) => stored != derived.payment_status,
            Err(_) => true,
        };

        RecordFinding {
            row,
            patient_id: record.patient_id.clone(),
            failures: report.failures,
            derived,
            stored_outstanding: record.outstanding_amount.clone(),
            stored_status: record.payment_status.clone(),
            stale_outstanding,
            stale_status,
        }
    }
}

/// 汇总派生后的账单状态
pub fn summarize<'a>(states: impl Iterator<Item = &'a BillingState>) -> BillingSummary {
    let mut summary = BillingSummary {
        total_records: 0,
        not_applicable: 0,
        unpaid: 0,
        partially_paid: 0,
        fully_paid: 0,
        total_billed: BigDecimal::zero(),
        total_paid: BigDecimal::zero(),
        total_outstanding: BigDecimal::zero(),
        collection_rate: BigDecimal::zero(),
    };

    for state in states {
        summary.total_records += 1;
        match state.payment_status {
            PaymentStatus::NotApplicable => summary.not_applicable += 1,
            PaymentStatus::Unpaid => summary.unpaid += 1,
            PaymentStatus::PartiallyPaid => summary.partially_paid += 1,
            PaymentStatus::FullyPaid => summary.fully_paid += 1,
        }
        summary.total_billed += &state.bill_amount;
        summary.total_paid += &state.amount_paid;
        summary.total_outstanding += &state.outstanding;
    }

    summary.collection_rate = if summary.total_billed > BigDecimal::zero() {
        to_money(&(&summary.total_paid * BigDecimal::from(100) / &summary.total_billed))
    } else {
        BigDecimal::zero().with_scale(MONEY_SCALE)
    };
    summary.total_billed = to_money(&summary.total_billed);
    summary.total_paid = to_money(&summary.total_paid);
    summary.total_outstanding = to_money(&summary.total_outstanding);

    summary
}
