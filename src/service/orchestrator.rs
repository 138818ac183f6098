use crate::models::{
    BillingState, Check, FieldFailure, FieldKind, FieldSpec, FormSchema, FormValues,
    InsuranceSelection, ValidationReport,
};
use crate::service::billing::{BillingDeriver, AMOUNT_EXCEEDS_BILL_MESSAGE};
use crate::service::insurance::{ConditionalRequirement, INSURANCE_DETAILS_MESSAGE};
use crate::service::validators::{self, NumericBounds};
use chrono::Utc;

/// 表单校验编排
///
/// 逐个字段执行声明的校验器, 收集全部失败 (不在第一个失败处停止),
/// 再合并跨字段规则:
/// - 已付金额不得超过账单金额
/// - 有保险时保险详情必填
pub struct FormValidator {
    schema: FormSchema,
}

impl FormValidator {
    pub fn new(schema: FormSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// 校验整张表单
    pub fn validate(&self, values: &FormValues) -> ValidationReport {
        let mut failures = Vec::new();

        // 1. 字段级校验
        for spec in &self.schema.fields {
            let check = check_declared(spec, values.get(&spec.name));
            if let Some(message) = check.message {
                failures.push(FieldFailure::new(&spec.name, message));
            }
        }

        // 2. 跨字段: 账单
        let billing = self.derive_billing(values);
        if let (Some(rule), Some(state)) = (&self.schema.billing, &billing) {
            if state.exceeds_bill() {
                failures.push(FieldFailure::new(&rule.paid_field, AMOUNT_EXCEEDS_BILL_MESSAGE));
            }
        }

        // 3. 跨字段: 保险
        let insurance = self.insurance_selection(values);
        if let (Some(rule), Some(selection)) = (&self.schema.insurance, &insurance) {
            if selection.missing_details() {
                failures.push(FieldFailure::new(&rule.details_field, INSURANCE_DETAILS_MESSAGE));
            }
        }

        let valid = failures.is_empty();
        tracing::debug!(
            "Validated form {}: {} fields, {} failures",
            self.schema.name,
            self.schema.fields.len(),
            failures.len()
        );

        ValidationReport {
            form: self.schema.name.clone(),
            valid,
            failures,
            billing,
            insurance,
            validated_at: Utc::now(),
        }
    }

    /// 单字段校验 (失焦时使用), 含条件必填
    pub fn check_field(&self, name: &str, values: &FormValues) -> Check {
        let Some(spec) = self.schema.field(name) else {
            return Check::pass();
        };

        let check = check_declared(spec, values.get(name));
        if !check.is_valid() {
            return check;
        }

        if let Some(rule) = &self.schema.insurance {
            if rule.details_field == name {
                if let Some(selection) = self.insurance_selection(values) {
                    if selection.missing_details() {
                        return Check::fail(INSURANCE_DETAILS_MESSAGE);
                    }
                }
            }
        }

        check
    }

    /// 字段当前是否必填 (声明必填或条件必填)
    pub fn is_required(&self, name: &str, values: &FormValues) -> bool {
        let declared = self.schema.field(name).map_or(false, |spec| spec.required);
        let conditional = self.schema.insurance.as_ref().map_or(false, |rule| {
            rule.details_field == name
                && ConditionalRequirement::is_covered(values.get(&rule.selector_field))
        });
        declared || conditional
    }

    pub fn derive_billing(&self, values: &FormValues) -> Option<BillingState> {
        self.schema.billing.as_ref().map(|rule| {
            BillingDeriver::derive_from_input(values.get(&rule.bill_field), values.get(&rule.paid_field))
        })
    }

    pub fn insurance_selection(&self, values: &FormValues) -> Option<InsuranceSelection> {
        self.schema.insurance.as_ref().map(|rule| {
            ConditionalRequirement::from_input(
                values.get(&rule.selector_field),
                values.get(&rule.details_field),
            )
        })
    }
}

/// 按声明校验: 空值时只看是否必填, 非空时按类型校验
fn check_declared(spec: &FieldSpec, value: &str) -> Check {
    if value.trim().is_empty() {
        return if spec.required {
            validators::required(value, &spec.label)
        } else {
            Check::pass()
        };
    }

    match &spec.kind {
        FieldKind::Text => Check::pass(),
        FieldKind::Age => validators::age(value, &spec.label),
        FieldKind::Money => {
            validators::numeric_range(value, &spec.label, &NumericBounds::non_negative())
        }
        FieldKind::Number { min, max } => validators::numeric_range(
            value,
            &spec.label,
            &NumericBounds::new(min.clone(), max.clone()),
        ),
        FieldKind::Email => validators::email(value),
        FieldKind::PatientId => validators::patient_id(value),
        FieldKind::Select { options } => validators::one_of(value, &spec.label, options),
    }
}
