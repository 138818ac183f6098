pub mod adapter;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod records;
pub mod service;

pub use adapter::{FormController, FormSurface, MemoryForm};
pub use config::AppConfig;
pub use error::{FormRulesError, Result};
pub use service::{BillingDeriver, ConditionalRequirement, FormValidator, RecordAuditor};
