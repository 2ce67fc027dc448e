use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Billing resolvers
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_tax(input_json: String) -> NapiResult<String> {
    let input: taxbill_core::tax::TaxInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = taxbill_core::tax::calculate_tax(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_discount(input_json: String) -> NapiResult<String> {
    let input: taxbill_core::discount::DiscountInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = taxbill_core::discount::calculate_discount(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_fine(input_json: String) -> NapiResult<String> {
    let input: taxbill_core::fine::FineInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = taxbill_core::fine::calculate_fine(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_bill(input_json: String) -> NapiResult<String> {
    let input: taxbill_core::bill::BillInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = taxbill_core::bill::calculate_bill(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
