//! Immutable price catalog: category -> provider -> option -> unit price
//!
//! The catalog is built once at startup (either the compiled-in sample table
//! or a TOML pricing file, see `config.rs`) and never mutated afterwards.
//! All accessors take `&self` and do pure reads, so a catalog can be shared
//! across threads without synchronization.
//!
//! Prices are sample on-demand rates (US regions, as of entry) and are meant
//! for rough estimation. For production workloads, pull live prices from the
//! AWS/Azure pricing APIs.

use crate::error::{ConfigError, CostctlError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cloud providers with entries in the catalog.
///
/// Extending this enum is the expected way to add a provider: the catalog,
/// advice composition, and CLI all dispatch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Aws,
    Azure,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Aws => write!(f, "AWS"),
            Provider::Azure => write!(f, "Azure"),
        }
    }
}

impl FromStr for Provider {
    type Err = CostctlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "aws" => Ok(Provider::Aws),
            "azure" => Ok(Provider::Azure),
            _ => Err(CostctlError::not_found("provider", s)),
        }
    }
}

/// Unit of measure for a service category's usage quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Unit {
    PerHour,
    PerGbMonth,
}

impl Unit {
    /// Label for a unit price, e.g. "$0.0104 per hour".
    pub fn label(&self) -> &'static str {
        match self {
            Unit::PerHour => "per hour",
            Unit::PerGbMonth => "per GB-month",
        }
    }

    /// Label for the usage quantity itself, e.g. "730 hours".
    pub fn quantity_label(&self) -> &'static str {
        match self {
            Unit::PerHour => "hours",
            Unit::PerGbMonth => "GB",
        }
    }

    /// Default monthly usage the CLI suggests when none is given
    /// (730 hours is 24/7 for an average month).
    pub fn default_usage(&self) -> f64 {
        match self {
            Unit::PerHour => 730.0,
            Unit::PerGbMonth => 100.0,
        }
    }
}

/// Advice dispatch class for a category.
///
/// `Other` is a defined no-op: categories added via a pricing file that
/// don't fit the three built-in classes get no category-specific advice,
/// only the provider closing reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKind {
    Compute,
    ObjectStorage,
    ManagedDatabase,
    #[default]
    Other,
}

/// A single priced option, e.g. "t3.micro (US-East-1)" at $0.0104/hour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceOption {
    pub name: String,
    pub unit_price: f64,
}

/// All options one provider offers within a category, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderPrices {
    pub provider: Provider,
    #[serde(rename = "option")]
    pub options: Vec<PriceOption>,
}

/// One service category: a unit of measure, an advice class, and a price
/// table per provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub name: String,
    #[serde(default)]
    pub kind: CategoryKind,
    pub unit: Unit,
    #[serde(rename = "price")]
    pub prices: Vec<ProviderPrices>,
}

impl ServiceCategory {
    fn provider_prices(&self, provider: Provider) -> Result<&ProviderPrices> {
        self.prices
            .iter()
            .find(|p| p.provider == provider)
            .ok_or_else(|| CostctlError::not_found("provider", provider.to_string()))
    }
}

/// The immutable price catalog.
///
/// Categories keep their declaration order; option lists keep theirs. The
/// CLI relies on this so menus render in a stable order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceCatalog {
    #[serde(rename = "category")]
    categories: Vec<ServiceCategory>,
}

impl PriceCatalog {
    /// Build a catalog from pre-validated categories.
    ///
    /// Fails if the data violates the catalog invariants (see `validate`).
    pub fn new(categories: Vec<ServiceCategory>) -> Result<Self> {
        let catalog = Self { categories };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The compiled-in sample price table.
    ///
    /// Approximate on-demand prices; a production deployment would load a
    /// maintained pricing file instead (see `config::load`).
    pub fn builtin() -> Self {
        let categories = vec![
            ServiceCategory {
                name: "Compute (VMs / EC2)".to_string(),
                kind: CategoryKind::Compute,
                unit: Unit::PerHour,
                prices: vec![
                    ProviderPrices {
                        provider: Provider::Aws,
                        options: vec![
                            PriceOption {
                                name: "t3.micro (US-East-1)".to_string(),
                                unit_price: 0.0104,
                            },
                            PriceOption {
                                name: "t3.small (US-East-1)".to_string(),
                                unit_price: 0.0208,
                            },
                        ],
                    },
                    ProviderPrices {
                        provider: Provider::Azure,
                        options: vec![
                            PriceOption {
                                name: "B1s (East US)".to_string(),
                                unit_price: 0.012,
                            },
                            PriceOption {
                                name: "B2s (East US)".to_string(),
                                unit_price: 0.024,
                            },
                        ],
                    },
                ],
            },
            ServiceCategory {
                name: "Object Storage (S3 / Blob)".to_string(),
                kind: CategoryKind::ObjectStorage,
                unit: Unit::PerGbMonth,
                prices: vec![
                    ProviderPrices {
                        provider: Provider::Aws,
                        options: vec![
                            PriceOption {
                                name: "S3 Standard (US-East-1)".to_string(),
                                unit_price: 0.023,
                            },
                            PriceOption {
                                name: "S3 Infrequent Access".to_string(),
                                unit_price: 0.0125,
                            },
                        ],
                    },
                    ProviderPrices {
                        provider: Provider::Azure,
                        options: vec![
                            PriceOption {
                                name: "Blob Hot (LRS)".to_string(),
                                unit_price: 0.0184,
                            },
                            PriceOption {
                                name: "Blob Cool (LRS)".to_string(),
                                unit_price: 0.01,
                            },
                        ],
                    },
                ],
            },
            ServiceCategory {
                name: "Managed Database (RDS / Azure SQL)".to_string(),
                kind: CategoryKind::ManagedDatabase,
                unit: Unit::PerHour,
                prices: vec![
                    ProviderPrices {
                        provider: Provider::Aws,
                        options: vec![PriceOption {
                            name: "RDS t3.micro (Multi-AZ)".to_string(),
                            unit_price: 0.034,
                        }],
                    },
                    ProviderPrices {
                        provider: Provider::Azure,
                        options: vec![PriceOption {
                            name: "Azure SQL Basic".to_string(),
                            unit_price: 0.021,
                        }],
                    },
                ],
            },
        ];

        // Builtin data satisfies the invariants by construction; tests
        // re-check via validate().
        Self { categories }
    }

    /// Check the catalog invariants: at least one category, every category
    /// has at least one provider with at least one option, and every unit
    /// price is finite and non-negative.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::MissingField("category".to_string()));
        }
        for category in &self.categories {
            if category.name.is_empty() {
                return Err(ConfigError::MissingField("category.name".to_string()));
            }
            if category.prices.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("category \"{}\"", category.name),
                    reason: "must define at least one provider".to_string(),
                });
            }
            for prices in &category.prices {
                if prices.options.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: format!("category \"{}\" / {}", category.name, prices.provider),
                        reason: "must define at least one option".to_string(),
                    });
                }
                for option in &prices.options {
                    if option.name.is_empty() {
                        return Err(ConfigError::MissingField(format!(
                            "option name in category \"{}\"",
                            category.name
                        )));
                    }
                    if !option.unit_price.is_finite() || option.unit_price < 0.0 {
                        return Err(ConfigError::InvalidValue {
                            field: format!("unit_price for \"{}\"", option.name),
                            reason: format!(
                                "must be finite and non-negative, got {}",
                                option.unit_price
                            ),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Ordered category names. Never empty for a validated catalog.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Providers defined for a category, in declaration order.
    pub fn providers(&self, category: &str) -> Result<Vec<Provider>> {
        let category = self.category(category)?;
        Ok(category.prices.iter().map(|p| p.provider).collect())
    }

    /// Ordered option names for a (category, provider) pair.
    pub fn options(&self, category: &str, provider: Provider) -> Result<Vec<&str>> {
        let prices = self.category(category)?.provider_prices(provider)?;
        Ok(prices.options.iter().map(|o| o.name.as_str()).collect())
    }

    /// Unit price for a (category, provider, option) triple.
    pub fn unit_price(&self, category: &str, provider: Provider, option: &str) -> Result<f64> {
        let prices = self.category(category)?.provider_prices(provider)?;
        prices
            .options
            .iter()
            .find(|o| o.name == option)
            .map(|o| o.unit_price)
            .ok_or_else(|| CostctlError::not_found("option", option))
    }

    /// Unit of measure for a category.
    pub fn unit(&self, category: &str) -> Result<Unit> {
        Ok(self.category(category)?.unit)
    }

    /// Advice class for a category. Unknown categories map to
    /// `CategoryKind::Other` so advice generation never fails on a
    /// category the table doesn't know.
    pub fn kind(&self, category: &str) -> CategoryKind {
        self.category(category)
            .map(|c| c.kind)
            .unwrap_or(CategoryKind::Other)
    }

    fn category(&self, name: &str) -> Result<&ServiceCategory> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CostctlError::not_found("category", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_satisfies_invariants() {
        assert!(PriceCatalog::builtin().validate().is_ok());
    }

    #[test]
    fn test_builtin_category_order() {
        let catalog = PriceCatalog::builtin();
        assert_eq!(
            catalog.categories(),
            vec![
                "Compute (VMs / EC2)",
                "Object Storage (S3 / Blob)",
                "Managed Database (RDS / Azure SQL)",
            ]
        );
    }

    #[test]
    fn test_builtin_prices() {
        let catalog = PriceCatalog::builtin();
        let price = catalog
            .unit_price("Compute (VMs / EC2)", Provider::Aws, "t3.micro (US-East-1)")
            .unwrap();
        assert!((price - 0.0104).abs() < 1e-12);

        let price = catalog
            .unit_price("Object Storage (S3 / Blob)", Provider::Azure, "Blob Cool (LRS)")
            .unwrap();
        assert!((price - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_category_is_not_found() {
        let catalog = PriceCatalog::builtin();
        let err = catalog.providers("Quantum Compute").unwrap_err();
        assert!(matches!(err, CostctlError::NotFound { what: "category", .. }));
    }

    #[test]
    fn test_unknown_option_is_not_found() {
        let catalog = PriceCatalog::builtin();
        let err = catalog
            .unit_price("Compute (VMs / EC2)", Provider::Aws, "m5.24xlarge")
            .unwrap_err();
        assert!(matches!(err, CostctlError::NotFound { what: "option", .. }));
    }

    #[test]
    fn test_units_per_category() {
        let catalog = PriceCatalog::builtin();
        assert_eq!(catalog.unit("Compute (VMs / EC2)").unwrap(), Unit::PerHour);
        assert_eq!(
            catalog.unit("Object Storage (S3 / Blob)").unwrap(),
            Unit::PerGbMonth
        );
        assert_eq!(
            catalog.unit("Managed Database (RDS / Azure SQL)").unwrap(),
            Unit::PerHour
        );
    }

    #[test]
    fn test_unknown_category_kind_is_other() {
        let catalog = PriceCatalog::builtin();
        assert_eq!(catalog.kind("Quantum Compute"), CategoryKind::Other);
        assert_eq!(catalog.kind("Compute (VMs / EC2)"), CategoryKind::Compute);
    }

    #[test]
    fn test_provider_round_trip() {
        assert_eq!("aws".parse::<Provider>().unwrap(), Provider::Aws);
        assert_eq!("Azure".parse::<Provider>().unwrap(), Provider::Azure);
        assert_eq!(Provider::Aws.to_string(), "AWS");
        assert!("gcp".parse::<Provider>().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let categories = vec![ServiceCategory {
            name: "Compute".to_string(),
            kind: CategoryKind::Compute,
            unit: Unit::PerHour,
            prices: vec![ProviderPrices {
                provider: Provider::Aws,
                options: vec![PriceOption {
                    name: "t3.nano".to_string(),
                    unit_price: -0.01,
                }],
            }],
        }];
        assert!(PriceCatalog::new(categories).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_catalog() {
        assert!(PriceCatalog::new(vec![]).is_err());
    }

    #[test]
    fn test_validate_rejects_provider_without_options() {
        let categories = vec![ServiceCategory {
            name: "Compute".to_string(),
            kind: CategoryKind::Compute,
            unit: Unit::PerHour,
            prices: vec![ProviderPrices {
                provider: Provider::Azure,
                options: vec![],
            }],
        }];
        assert!(PriceCatalog::new(categories).is_err());
    }
}
