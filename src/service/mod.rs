pub mod audit;
pub mod billing;
pub mod insurance;
pub mod orchestrator;
pub mod schemas;
pub mod validators;

pub use audit::RecordAuditor;
pub use billing::BillingDeriver;
pub use insurance::ConditionalRequirement;
pub use orchestrator::FormValidator;
