use bigdecimal::BigDecimal;
use hms_form_rules::models::PaymentStatus;
use hms_form_rules::BillingDeriver;
use proptest::prelude::*;

// 金额以分为单位生成, 避免浮点误差
fn cents(value: u64) -> BigDecimal {
    BigDecimal::new(value.into(), 2)
}

proptest! {
    #[test]
    fn outstanding_is_floored_difference(bill in 0u64..10_000_000, paid in 0u64..10_000_000) {
        let state = BillingDeriver::derive(&cents(bill), &cents(paid));
        let expected = cents(bill.saturating_sub(paid));

        prop_assert_eq!(&state.outstanding, &expected);
        prop_assert_eq!(state.outstanding.to_string(), expected.with_scale(2).to_string());
    }

    #[test]
    fn zero_bill_is_always_not_applicable(paid in 0u64..10_000_000) {
        let state = BillingDeriver::derive(&cents(0), &cents(paid));
        prop_assert_eq!(state.payment_status, PaymentStatus::NotApplicable);
    }

    #[test]
    fn status_follows_precedence(bill in 1u64..10_000_000, paid in 0u64..10_000_000) {
        let state = BillingDeriver::derive(&cents(bill), &cents(paid));

        let expected = if paid >= bill {
            PaymentStatus::FullyPaid
        } else if paid > 0 {
            PaymentStatus::PartiallyPaid
        } else {
            PaymentStatus::Unpaid
        };
        prop_assert_eq!(state.payment_status, expected);
        prop_assert_eq!(state.exceeds_bill(), paid > bill);
    }
}
