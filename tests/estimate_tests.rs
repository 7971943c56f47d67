//! Integration tests for the estimation engine
//!
//! Covers the concrete pricing scenarios, the error taxonomy (NotFound /
//! InvalidUsage), and determinism of repeated estimates.

use costctl::{estimate, CostctlError, PriceCatalog, Provider, Unit};

#[test]
fn test_aws_t3_micro_full_month() {
    let catalog = PriceCatalog::builtin();
    let est = estimate(
        &catalog,
        Provider::Aws,
        "Compute (VMs / EC2)",
        "t3.micro (US-East-1)",
        730.0,
    )
    .unwrap();

    assert!((est.unit_price - 0.0104).abs() < 1e-12);
    assert!((est.monthly_cost - 7.592).abs() < 1e-9);
    assert_eq!(est.unit, Unit::PerHour);
    assert_eq!(est.provider, Provider::Aws);
}

#[test]
fn test_azure_blob_cool_100_gb() {
    let catalog = PriceCatalog::builtin();
    let est = estimate(
        &catalog,
        Provider::Azure,
        "Object Storage (S3 / Blob)",
        "Blob Cool (LRS)",
        100.0,
    )
    .unwrap();

    assert!((est.unit_price - 0.01).abs() < 1e-12);
    assert!((est.monthly_cost - 1.00).abs() < 1e-9);
    assert_eq!(est.unit, Unit::PerGbMonth);
}

#[test]
fn test_every_catalog_triple_estimates() {
    // Every valid (category, provider, option) triple must estimate without
    // error and produce a non-negative cost
    let catalog = PriceCatalog::builtin();
    for category in catalog.categories() {
        for provider in catalog.providers(category).unwrap() {
            for option in catalog.options(category, provider).unwrap() {
                let est = estimate(&catalog, provider, category, option, 42.5).unwrap();
                assert!(est.unit_price >= 0.0);
                assert!(est.monthly_cost >= 0.0);
                assert!(
                    (est.monthly_cost - est.unit_price * 42.5).abs() < 1e-9,
                    "cost mismatch for {}/{}/{}",
                    category,
                    provider,
                    option
                );
            }
        }
    }
}

#[test]
fn test_unknown_category_fails() {
    let catalog = PriceCatalog::builtin();
    let err = estimate(&catalog, Provider::Aws, "Lambda", "128MB", 10.0).unwrap_err();
    assert!(matches!(
        err,
        CostctlError::NotFound { what: "category", .. }
    ));
}

#[test]
fn test_provider_without_category_entry_fails() {
    // A category that exists but a provider/option combination that does not
    let catalog = PriceCatalog::builtin();
    let err = estimate(
        &catalog,
        Provider::Azure,
        "Compute (VMs / EC2)",
        "t3.micro (US-East-1)", // AWS option, Azure provider
        10.0,
    )
    .unwrap_err();
    assert!(matches!(err, CostctlError::NotFound { .. }));
}

#[test]
fn test_negative_usage_rejected() {
    let catalog = PriceCatalog::builtin();
    let err = estimate(
        &catalog,
        Provider::Aws,
        "Compute (VMs / EC2)",
        "t3.micro (US-East-1)",
        -0.001,
    )
    .unwrap_err();
    assert!(matches!(err, CostctlError::InvalidUsage { .. }));
}

#[test]
fn test_zero_usage_estimates_to_zero() {
    let catalog = PriceCatalog::builtin();
    let est = estimate(
        &catalog,
        Provider::Aws,
        "Managed Database (RDS / Azure SQL)",
        "RDS t3.micro (Multi-AZ)",
        0.0,
    )
    .unwrap();
    assert_eq!(est.monthly_cost, 0.0);
}

#[test]
fn test_repeated_estimates_are_identical() {
    let catalog = PriceCatalog::builtin();
    let a = estimate(
        &catalog,
        Provider::Azure,
        "Compute (VMs / EC2)",
        "B2s (East US)",
        123.456,
    )
    .unwrap();
    let b = estimate(
        &catalog,
        Provider::Azure,
        "Compute (VMs / EC2)",
        "B2s (East US)",
        123.456,
    )
    .unwrap();

    // Bit-identical: the catalog is immutable and the math is deterministic
    assert_eq!(a.monthly_cost.to_bits(), b.monthly_cost.to_bits());
    assert_eq!(a.unit_price.to_bits(), b.unit_price.to_bits());
}

#[test]
fn test_estimate_serializes_to_json() {
    let catalog = PriceCatalog::builtin();
    let est = estimate(
        &catalog,
        Provider::Aws,
        "Compute (VMs / EC2)",
        "t3.micro (US-East-1)",
        730.0,
    )
    .unwrap();

    let json = serde_json::to_value(&est).unwrap();
    assert_eq!(json["provider"], "aws");
    assert_eq!(json["option"], "t3.micro (US-East-1)");
    assert!((json["monthly_cost"].as_f64().unwrap() - 7.592).abs() < 1e-9);
}
