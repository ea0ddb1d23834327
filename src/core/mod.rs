//! Reference data and ownership calculations

pub mod company;
pub mod config;
pub mod format;
pub mod log;
pub mod ownership;
pub mod store;

// Re-export main types for cleaner imports
pub use company::{Company, CompanySnapshot, Market};
pub use ownership::{
    CompanyMetrics, OwnershipInput, OwnershipResult, company_metrics, compute_ownership,
};
pub use store::{CompanyLookup, ReferenceStore};
