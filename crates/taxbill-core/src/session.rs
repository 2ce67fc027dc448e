//! Caller-side state for a bill being worked on interactively.
//!
//! The resolvers are pure; this session is the one stateful component. It
//! caches each stage's result and clears everything downstream whenever an
//! upstream input changes, so a stale derived result can never be read
//! after an edit.

use chrono::NaiveDate;

use crate::discount::{self, BillAfterDiscount, DiscountInput};
use crate::fine::{self, FineInput, PaymentFine};
use crate::tax::{self, TaxBreakdown, TaxInput};
use crate::{types::Money, BillingError, BillingResult};

#[derive(Debug, Clone, Default)]
pub struct BillingSession {
    customer_id: Option<String>,
    base_tariff: Option<Money>,
    due_date: Option<NaiveDate>,
    payment_date: Option<NaiveDate>,
    advance_amount: Option<Money>,

    tax: Option<TaxBreakdown>,
    discount: Option<BillAfterDiscount>,
    fine: Option<PaymentFine>,
}

impl BillingSession {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Input setters; each clears the stages it invalidates ---------------

    pub fn set_customer_id(&mut self, customer_id: impl Into<String>) {
        self.customer_id = Some(customer_id.into());
    }

    pub fn set_base_tariff(&mut self, base_tariff: Money) {
        self.base_tariff = Some(base_tariff);
        self.tax = None;
        self.discount = None;
        self.fine = None;
    }

    pub fn set_due_date(&mut self, due_date: NaiveDate) {
        self.due_date = Some(due_date);
        self.fine = None;
    }

    pub fn set_payment_date(&mut self, payment_date: NaiveDate) {
        self.payment_date = Some(payment_date);
        self.fine = None;
    }

    pub fn set_advance_amount(&mut self, advance_amount: Money) {
        self.advance_amount = Some(advance_amount);
        self.fine = None;
    }

    /// Clear every input and derived result.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // -- Stage computations --------------------------------------------------

    pub fn calculate_tax(&mut self) -> BillingResult<&TaxBreakdown> {
        let base_tariff = self.base_tariff.ok_or(BillingError::StageNotReady {
            stage: "tax",
            missing: "base tariff",
        })?;
        let result = tax::calculate_tax(&TaxInput { base_tariff })?;
        Ok(self.tax.insert(result.result))
    }

    /// Derives the tax breakdown on demand; the source UI computed tax
    /// implicitly when the discount was requested.
    pub fn calculate_discount(&mut self) -> BillingResult<&BillAfterDiscount> {
        let total_tax = match self.tax.as_ref() {
            Some(tax) => tax.total_tax,
            None => self.calculate_tax()?.total_tax,
        };
        let result = discount::calculate_discount(&DiscountInput { total_tax })?;
        Ok(self.discount.insert(result.result))
    }

    pub fn calculate_fine(&mut self) -> BillingResult<&PaymentFine> {
        let bill_after_discount = self
            .discount
            .as_ref()
            .map(|d| d.bill_after_discount)
            .ok_or(BillingError::StageNotReady {
                stage: "fine",
                missing: "bill after discount (calculate the discount first)",
            })?;
        let (due_date, payment_date) = match (self.due_date, self.payment_date) {
            (Some(due), Some(payment)) => (due, payment),
            _ => {
                return Err(BillingError::StageNotReady {
                    stage: "fine",
                    missing: "both due date and payment date",
                });
            }
        };
        let result = fine::calculate_fine(&FineInput {
            bill_after_discount,
            due_date,
            payment_date,
            advance_amount: self.advance_amount,
        })?;
        Ok(self.fine.insert(result.result))
    }

    // -- Accessors for cached results ----------------------------------------

    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    pub fn tax(&self) -> Option<&TaxBreakdown> {
        self.tax.as_ref()
    }

    pub fn discount(&self) -> Option<&BillAfterDiscount> {
        self.discount.as_ref()
    }

    pub fn fine(&self) -> Option<&PaymentFine> {
        self.fine.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_discount_derives_tax_on_demand() {
        let mut session = BillingSession::new();
        session.set_base_tariff(dec!(1_000));

        let discount = session.calculate_discount().unwrap();
        assert_eq!(discount.bill_after_discount, dec!(1_155.20));
        assert_eq!(session.tax().unwrap().total_tax, dec!(1_216));
    }

    #[test]
    fn test_tax_without_base_tariff_not_ready() {
        let mut session = BillingSession::new();
        let err = session.calculate_discount().unwrap_err();
        match err {
            BillingError::StageNotReady { stage, .. } => assert_eq!(stage, "tax"),
            other => panic!("Expected StageNotReady, got {other:?}"),
        }
    }

    #[test]
    fn test_fine_before_discount_not_ready() {
        let mut session = BillingSession::new();
        session.set_base_tariff(dec!(1_000));
        session.set_due_date(date(2024, 1, 1));
        session.set_payment_date(date(2024, 1, 20));

        let err = session.calculate_fine().unwrap_err();
        assert!(matches!(
            err,
            BillingError::StageNotReady { stage: "fine", .. }
        ));
    }

    #[test]
    fn test_fine_without_dates_not_ready() {
        let mut session = BillingSession::new();
        session.set_base_tariff(dec!(1_000));
        session.calculate_discount().unwrap();

        let err = session.calculate_fine().unwrap_err();
        assert!(matches!(
            err,
            BillingError::StageNotReady { stage: "fine", .. }
        ));
    }

    #[test]
    fn test_full_interactive_flow() {
        let mut session = BillingSession::new();
        session.set_customer_id("C-1042");
        session.set_base_tariff(dec!(1_000));
        session.set_due_date(date(2024, 1, 1));
        session.set_payment_date(date(2024, 1, 20));
        session.set_advance_amount(dec!(200));

        session.calculate_discount().unwrap();
        let fine = session.calculate_fine().unwrap();
        assert_eq!(fine.fine_percent, 10);
        assert_eq!(fine.final_amount, dec!(1_070.72));
    }

    #[test]
    fn test_base_tariff_change_invalidates_downstream() {
        let mut session = BillingSession::new();
        session.set_base_tariff(dec!(1_000));
        session.set_due_date(date(2024, 1, 1));
        session.set_payment_date(date(2024, 1, 20));
        session.calculate_discount().unwrap();
        session.calculate_fine().unwrap();

        session.set_base_tariff(dec!(2_000));
        assert!(session.tax().is_none());
        assert!(session.discount().is_none());
        assert!(session.fine().is_none());
    }

    #[test]
    fn test_date_change_invalidates_fine_only() {
        let mut session = BillingSession::new();
        session.set_base_tariff(dec!(1_000));
        session.set_due_date(date(2024, 1, 1));
        session.set_payment_date(date(2024, 1, 20));
        session.calculate_discount().unwrap();
        session.calculate_fine().unwrap();

        session.set_payment_date(date(2024, 3, 15));
        assert!(session.discount().is_some());
        assert!(session.fine().is_none());

        // 74 days late lands in the top fine tier
        let fine = session.calculate_fine().unwrap();
        assert_eq!(fine.days_late, 74);
        assert_eq!(fine.fine_percent, 25);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = BillingSession::new();
        session.set_customer_id("C-1042");
        session.set_base_tariff(dec!(1_000));
        session.calculate_discount().unwrap();

        session.reset();
        assert!(session.customer_id().is_none());
        assert!(session.tax().is_none());
        assert!(session.discount().is_none());
        let err = session.calculate_discount().unwrap_err();
        assert!(matches!(err, BillingError::StageNotReady { .. }));
    }
}
