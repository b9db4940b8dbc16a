//! Discounts, order totals and product categories.

use serde::{Deserialize, Serialize};

/// Orders below this total get no discount.
pub const TOTAL_DISCOUNT_THRESHOLD: f64 = 100.0;
/// Orders above this total get the higher rate.
pub const TOTAL_DISCOUNT_UPPER: f64 = 500.0;
/// Discount rates for the two total tiers.
pub const TOTAL_DISCOUNT_LOW_RATE: f64 = 0.10;
pub const TOTAL_DISCOUNT_HIGH_RATE: f64 = 0.20;

/// Largest quantity with no discount.
pub const QUANTITY_NO_DISCOUNT_MAX: u32 = 5;
/// Largest quantity with the 5% discount.
pub const QUANTITY_LOW_DISCOUNT_MAX: u32 = 10;

/// One line of an order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub quantity: u32,
    pub price: f64,
}

impl OrderItem {
    /// An order line of `quantity` units at `price` each.
    pub fn new(quantity: u32, price: f64) -> Self {
        Self { quantity, price }
    }

    /// Line total after the quantity discount for this line.
    pub fn total(&self) -> f64 {
        let discount = calculate_quantity_discount(self.quantity);
        f64::from(self.quantity) * self.price * discount.multiplier()
    }
}

crate::label_enum! {
    /// Discount tier for a quantity of one item.
    pub enum QuantityDiscount {
        NoDiscount => "No Discount",
        FivePercent => "5% Discount",
        TenPercent => "10% Discount",
    }
}

impl QuantityDiscount {
    /// Factor applied to the undiscounted line price.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::NoDiscount => 1.0,
            Self::FivePercent => 0.95,
            Self::TenPercent => 0.9,
        }
    }
}

crate::label_enum! {
    /// Price band of a product.
    pub enum ProductCategory {
        A => "Category A",
        B => "Category B",
        C => "Category C",
        D => "Category D",
    }
}

/// Discount amount for an order total: nothing below 100, 10% from 100 up
/// to and including 500, 20% above that.
pub fn calculate_total_discount(total: f64) -> f64 {
    if total < TOTAL_DISCOUNT_THRESHOLD {
        0.0
    } else if total <= TOTAL_DISCOUNT_UPPER {
        total * TOTAL_DISCOUNT_LOW_RATE
    } else {
        total * TOTAL_DISCOUNT_HIGH_RATE
    }
}

/// Discount tier for buying `quantity` units: none up to 5, 5% up to 10,
/// 10% above that.
pub fn calculate_quantity_discount(quantity: u32) -> QuantityDiscount {
    if quantity <= QUANTITY_NO_DISCOUNT_MAX {
        QuantityDiscount::NoDiscount
    } else if quantity <= QUANTITY_LOW_DISCOUNT_MAX {
        QuantityDiscount::FivePercent
    } else {
        QuantityDiscount::TenPercent
    }
}

/// Sum of line totals. Each line is discounted by its own quantity, so a
/// single order can mix rates.
pub fn calculate_order_total(items: &[OrderItem]) -> f64 {
    items.iter().map(OrderItem::total).sum()
}

/// Category by whole price: A for 10 to 50, B up to 100, C up to 200, D
/// for anything else, including prices below 10.
pub fn categorize_product(price: u32) -> ProductCategory {
    match price {
        10..=50 => ProductCategory::A,
        51..=100 => ProductCategory::B,
        101..=200 => ProductCategory::C,
        _ => ProductCategory::D,
    }
}
