pub mod billing;
pub mod form;
pub mod insurance;
pub mod record;
pub mod result;

pub use billing::{BillingState, PaymentStatus};
pub use form::{BillingRule, FieldKind, FieldSpec, FormSchema, FormSubmission, FormValues, InsuranceRule};
pub use insurance::{DependentField, InsuranceSelection};
pub use record::{AuditReport, BillingSummary, PatientRecord, RecordFinding};
pub use result::{Check, FieldFailure, ValidationReport};
