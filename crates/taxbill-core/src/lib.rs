pub mod bill;
pub mod discount;
pub mod error;
pub mod fine;
pub mod session;
pub mod tax;
pub mod types;

pub use error::BillingError;
pub use types::*;

/// Standard result type for all billing operations
pub type BillingResult<T> = Result<T, BillingError>;
