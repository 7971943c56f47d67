//! Monthly cost estimation
//!
//! One multiplication with validation around it: look up the unit price for
//! the selected (category, provider, option) triple and scale it by the
//! monthly usage amount. Deterministic: same inputs, same estimate.

use crate::catalog::{PriceCatalog, Provider, Unit};
use crate::error::{CostctlError, Result};
use serde::Serialize;

/// A computed cost estimate, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Estimate {
    pub provider: Provider,
    pub category: String,
    pub option: String,
    pub unit: Unit,
    pub unit_price: f64,
    pub usage_amount: f64,
    pub monthly_cost: f64,
}

/// Estimate the monthly cost for a catalog selection.
///
/// `usage_amount` is hours/month or GB/month depending on the category's
/// unit. Zero usage is valid and yields a zero-cost estimate; whether to
/// show that to the user is the caller's call. Negative or non-finite usage
/// is rejected with `InvalidUsage`, unknown selections with `NotFound`.
pub fn estimate(
    catalog: &PriceCatalog,
    provider: Provider,
    category: &str,
    option: &str,
    usage_amount: f64,
) -> Result<Estimate> {
    if !usage_amount.is_finite() {
        return Err(CostctlError::InvalidUsage {
            value: usage_amount,
            reason: "usage amount must be a finite number",
        });
    }
    if usage_amount < 0.0 {
        return Err(CostctlError::InvalidUsage {
            value: usage_amount,
            reason: "usage amount must not be negative",
        });
    }

    let unit_price = catalog.unit_price(category, provider, option)?;
    let unit = catalog.unit(category)?;

    Ok(Estimate {
        provider,
        category: category.to_string(),
        option: option.to_string(),
        unit,
        unit_price,
        usage_amount,
        monthly_cost: unit_price * usage_amount,
    })
}
