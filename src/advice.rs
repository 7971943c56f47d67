//! Migration and optimization advice
//!
//! Fixed rule tables keyed on the category's advice class plus a per-provider
//! closing reminder. The composition order is stable: category items first,
//! provider reminder last, so output is deterministic for a given input.
//!
//! Thresholds: compute usage at or above 730 hours/month is treated as 24/7
//! (730 itself counts); object storage strictly above 500 GB counts as a
//! large footprint (500 itself does not).

use crate::catalog::{CategoryKind, PriceCatalog, Provider};

/// Hours in an average month; at or above this, compute looks 24/7.
pub const CONTINUOUS_HOURS_PER_MONTH: f64 = 730.0;

/// Above this many GB, storage counts as a large footprint.
pub const LARGE_STORAGE_GB: f64 = 500.0;

impl CategoryKind {
    /// Category-specific advice fragments for a usage amount, in fixed order.
    fn advice(&self, usage_amount: f64) -> Vec<&'static str> {
        match self {
            CategoryKind::Compute => {
                let branch = if usage_amount >= CONTINUOUS_HOURS_PER_MONTH {
                    "This workload looks like it's running 24/7. Consider reserved \
                     instances, savings plans, or Azure reserved VMs."
                } else {
                    "Since usage is not 24/7, consider auto-scaling or serverless \
                     (AWS Lambda / Azure Functions)."
                };
                vec![
                    branch,
                    "Right-size the instance based on real CPU and memory metrics. \
                     Oversized VMs waste money.",
                ]
            }
            CategoryKind::ObjectStorage => {
                let branch = if usage_amount > LARGE_STORAGE_GB {
                    "For large storage footprints, consider tiering: move infrequently \
                     accessed data to S3 IA / Glacier or Blob Cool / Archive."
                } else {
                    "For smaller datasets, staying on standard tiers may be simplest \
                     while you grow."
                };
                vec![
                    branch,
                    "Enable lifecycle policies to automatically move older objects to \
                     cheaper tiers.",
                ]
            }
            CategoryKind::ManagedDatabase => vec![
                "Consider whether you really need high availability / Multi-AZ for \
                 non-critical workloads.",
                "Scale down during off-hours or explore serverless database options \
                 where available.",
            ],
            CategoryKind::Other => vec![],
        }
    }
}

impl Provider {
    /// Closing reminder pointing at the provider's cost-management tooling.
    fn cost_tooling_reminder(&self) -> &'static str {
        match self {
            Provider::Aws => {
                "Use the AWS Pricing Calculator and Cost Explorer for more precise \
                 multi-service estimates."
            }
            Provider::Azure => {
                "Use the Azure Pricing Calculator and Cost Management + Billing for \
                 detailed estimates."
            }
        }
    }
}

/// Build the ordered advice list for a selection.
///
/// Never fails: a category the catalog doesn't know contributes no
/// category-specific items, and the provider reminder always closes the
/// list, so the result has at least one entry.
pub fn advise_for(
    catalog: &PriceCatalog,
    provider: Provider,
    category: &str,
    usage_amount: f64,
) -> Vec<String> {
    let mut advice: Vec<String> = catalog
        .kind(category)
        .advice(usage_amount)
        .into_iter()
        .map(str::to_string)
        .collect();
    advice.push(provider.cost_tooling_reminder().to_string());
    advice
}
