use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BillingError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Total tax {total_tax} exceeds the discount limit of {limit}")]
    ExceedsDiscountLimit { total_tax: Decimal, limit: Decimal },

    #[error("Payment date {payment_date} must be after due date {due_date}")]
    PaymentNotLate {
        due_date: NaiveDate,
        payment_date: NaiveDate,
    },

    #[error("Cannot compute {stage}: {missing}")]
    StageNotReady {
        stage: &'static str,
        missing: &'static str,
    },
}
