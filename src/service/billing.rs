use crate::models::{BillingState, FieldFailure, PaymentStatus};
use crate::service::validators::number_or_zero;
use bigdecimal::{BigDecimal, Zero};

/// 金额保留的小数位数
pub const MONEY_SCALE: i64 = 2;

pub const AMOUNT_EXCEEDS_BILL_MESSAGE: &str = "Amount paid exceeds bill amount";
pub const PAYMENT_NOT_POSITIVE_MESSAGE: &str = "Payment amount must be greater than zero";

/// 账单派生: 未结金额 + 付款状态
///
/// 状态判定顺序:
/// 1. 账单金额为 0 -> Not Applicable
/// 2. 未结金额为 0 -> Fully Paid
/// 3. 已付金额 > 0 -> Partially Paid
/// 4. 其余 -> Unpaid
pub struct BillingDeriver;

impl BillingDeriver {
    pub fn derive(bill_amount: &BigDecimal, amount_paid: &BigDecimal) -> BillingState {
        let outstanding = outstanding(bill_amount, amount_paid);
        let payment_status = payment_status(bill_amount, amount_paid, &outstanding);

        BillingState {
            bill_amount: bill_amount.clone(),
            amount_paid: amount_paid.clone(),
            outstanding,
            payment_status,
        }
    }

    /// 从表单原始输入派生, 无法解析的金额按 0 处理
    pub fn derive_from_input(bill_amount: &str, amount_paid: &str) -> BillingState {
        Self::derive(&number_or_zero(bill_amount), &number_or_zero(amount_paid))
    }

    /// 登记一笔付款并重新派生
    pub fn record_payment(
        state: &BillingState,
        payment: &BigDecimal,
    ) -> Result<BillingState, FieldFailure> {
        if payment <= &BigDecimal::zero() {
            return Err(FieldFailure::new("payment_amount", PAYMENT_NOT_POSITIVE_MESSAGE));
        }

        let amount_paid = &state.amount_paid + payment;
        tracing::debug!(
            "Recorded payment {} (paid {} of {})",
            payment,
            amount_paid,
            state.bill_amount
        );
        Ok(Self::derive(&state.bill_amount, &amount_paid))
    }
}

/// max(0, bill - paid), 保留两位小数
pub fn outstanding(bill_amount: &BigDecimal, amount_paid: &BigDecimal) -> BigDecimal {
    let diff = bill_amount - amount_paid;
    let floored = if diff < BigDecimal::zero() {
        BigDecimal::zero()
    } else {
        diff
    };
    to_money(&floored)
}

fn payment_status(
    bill_amount: &BigDecimal,
    amount_paid: &BigDecimal,
    outstanding: &BigDecimal,
) -> PaymentStatus {
    if bill_amount.is_zero() {
        PaymentStatus::NotApplicable
    } else if outstanding.is_zero() {
        PaymentStatus::FullyPaid
    } else if amount_paid > &BigDecimal::zero() {
        PaymentStatus::PartiallyPaid
    } else {
        PaymentStatus::Unpaid
    }
}

/// 四舍五入到两位小数, 并固定显示两位
pub fn to_money(amount: &BigDecimal) -> BigDecimal {
    amount.round(MONEY_SCALE).with_scale(MONEY_SCALE)
}

/// 金额展示: 货币符号 + 两位小数, 例如 `₹1234.50`
pub fn format_money(amount: &BigDecimal, symbol: &str) -> String {
    format!("{}{}", symbol, to_money(amount))
}
