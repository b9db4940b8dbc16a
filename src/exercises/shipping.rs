//! Shipping cost calculators.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Flat rates for each package class.
pub const SMALL_PACKAGE_COST: f64 = 5.0;
pub const MEDIUM_PACKAGE_COST: f64 = 10.0;
pub const LARGE_PACKAGE_COST: f64 = 20.0;

const SMALL_MAX_WEIGHT: f64 = 1.0;
const SMALL_MAX_DIMENSION: f64 = 10.0;
const MEDIUM_MAX_WEIGHT: f64 = 5.0;
const MEDIUM_MAX_DIMENSION: f64 = 30.0;

/// Upper bounds of the light and medium weight tiers for item shipping.
const LIGHT_ITEM_MAX_WEIGHT: f64 = 5.0;
const MEDIUM_ITEM_MAX_WEIGHT: f64 = 10.0;

/// Errors from [`calculate_items_shipping_cost`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShippingError {
    #[error("Unsupported shipping method '{0}', expected 'standard' or 'express'")]
    UnsupportedMethod(String),
}

/// One item to ship. Only its weight matters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    pub weight: f64,
}

impl Parcel {
    /// A parcel weighing `weight`.
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

/// Delivery speed. Parses from `"standard"` or `"express"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    Standard,
    Express,
}

impl ShippingMethod {
    /// Cost of a single item of `weight` with this method.
    pub fn item_cost(&self, weight: f64) -> f64 {
        let tiers = match self {
            Self::Standard => [10.0, 15.0, 20.0],
            Self::Express => [20.0, 30.0, 40.0],
        };
        if weight <= LIGHT_ITEM_MAX_WEIGHT {
            tiers[0]
        } else if weight <= MEDIUM_ITEM_MAX_WEIGHT {
            tiers[1]
        } else {
            tiers[2]
        }
    }
}

impl FromStr for ShippingMethod {
    type Err = ShippingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "express" => Ok(Self::Express),
            other => Err(ShippingError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Flat-rate cost by package class.
///
/// Small: weight up to 1 and every dimension up to 10. Medium: weight above
/// 1 up to 5 and every dimension above 10 up to 30. Anything else is large.
pub fn calculate_shipping_cost(weight: f64, length: f64, width: f64, height: f64) -> f64 {
    let dims = [length, width, height];
    let small = weight <= SMALL_MAX_WEIGHT && dims.iter().all(|&d| d <= SMALL_MAX_DIMENSION);
    let medium = weight > SMALL_MAX_WEIGHT
        && weight <= MEDIUM_MAX_WEIGHT
        && dims
            .iter()
            .all(|&d| d > SMALL_MAX_DIMENSION && d <= MEDIUM_MAX_DIMENSION);

    if small {
        SMALL_PACKAGE_COST
    } else if medium {
        MEDIUM_PACKAGE_COST
    } else {
        LARGE_PACKAGE_COST
    }
}

/// Total cost of shipping every item with `method`.
pub fn items_shipping_cost(items: &[Parcel], method: ShippingMethod) -> f64 {
    items.iter().map(|item| method.item_cost(item.weight)).sum()
}

/// Like [`items_shipping_cost`], with the method given by name.
///
/// Fails with [`ShippingError::UnsupportedMethod`] for anything other than
/// `"standard"` or `"express"`, even when `items` is empty.
pub fn calculate_items_shipping_cost(items: &[Parcel], method: &str) -> Result<f64, ShippingError> {
    let method: ShippingMethod = method.parse()?;
    Ok(items_shipping_cost(items, method))
}
