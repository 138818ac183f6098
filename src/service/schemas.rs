use crate::error::{FormRulesError, Result};
use crate::models::{BillingRule, FieldKind, FieldSpec, FormSchema, InsuranceRule, PaymentStatus};
use crate::service::insurance::{COVERED, NOT_COVERED};

pub const PATIENT_REGISTRATION: &str = "patient_registration";
pub const EMERGENCY_INTAKE: &str = "emergency_intake";

pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];
pub const SEVERITIES: [&str; 4] = ["Low", "Medium", "High", "Critical"];

fn select(options: &[&str]) -> FieldKind {
    FieldKind::Select {
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}

/// 病人登记表 (含账单与保险)
pub fn patient_registration() -> FormSchema {
    let statuses: Vec<&str> = PaymentStatus::ALL.iter().map(|s| s.label()).collect();

    FormSchema {
        name: PATIENT_REGISTRATION.to_string(),
        fields: vec![
            FieldSpec::required("name", "Patient name", FieldKind::Text),
            FieldSpec::required("age", "Age", FieldKind::Age),
            FieldSpec::required("gender", "Gender", select(&GENDERS)),
            FieldSpec::optional("locality", "Locality", FieldKind::Text),
            FieldSpec::optional("email", "Email", FieldKind::Email),
            FieldSpec::required("condition_severity", "Condition severity", select(&SEVERITIES)),
            FieldSpec::optional("medical_history", "Medical history", FieldKind::Text),
            FieldSpec::required("bill_amount", "Bill amount", FieldKind::Money),
            FieldSpec::optional("amount_paid", "Amount paid", FieldKind::Money),
            FieldSpec::optional("outstanding_amount", "Outstanding amount", FieldKind::Money),
            FieldSpec::optional("payment_status", "Payment status", select(&statuses)),
            FieldSpec::optional("insurance_coverage", "Insurance coverage", select(&[COVERED, NOT_COVERED])),
            FieldSpec::optional("insurance_details", "Insurance details", FieldKind::Text),
        ],
        billing: Some(BillingRule {
            bill_field: "bill_amount".to_string(),
            paid_field: "amount_paid".to_string(),
            outstanding_field: Some("outstanding_amount".to_string()),
            status_field: Some("payment_status".to_string()),
        }),
        insurance: Some(InsuranceRule {
            selector_field: "insurance_coverage".to_string(),
            details_field: "insurance_details".to_string(),
        }),
    }
}

/// 急诊登记表
pub fn emergency_intake() -> FormSchema {
    FormSchema {
        name: EMERGENCY_INTAKE.to_string(),
        fields: vec![
            FieldSpec::required("patient_id", "Patient ID", FieldKind::PatientId),
            FieldSpec::required("name", "Patient name", FieldKind::Text),
            FieldSpec::required("priority", "Priority", select(&SEVERITIES)),
            FieldSpec::required("condition", "Condition", FieldKind::Text),
        ],
        billing: None,
        insurance: None,
    }
}

pub fn by_name(name: &str) -> Result<FormSchema> {
    match name {
        PATIENT_REGISTRATION => Ok(patient_registration()),
        EMERGENCY_INTAKE => Ok(emergency_intake()),
        other => Err(FormRulesError::UnknownForm(other.to_string())),
    }
}
