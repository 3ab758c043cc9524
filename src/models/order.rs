use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::services::order_calculator::parse_price;
use crate::utils::validation::{validate_product_image, validate_product_name};

pub const DEFAULT_PRODUCT_NAME: &str = "Cake";
pub const DEFAULT_UNIT_PRICE: &str = "38000";

/// Flat delivery fee, in the same unit as the unit price.
pub const DELIVERY_FEE: u64 = 10_000;

pub const MIN_QUANTITY: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "reference", rename_all = "snake_case")]
pub enum ProductImage {
    #[default]
    Placeholder,
    Asset(String),
}

impl std::fmt::Display for ProductImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductImage::Placeholder => write!(f, "placeholder"),
            ProductImage::Asset(reference) => write!(f, "{}", reference),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    Cash,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "Cash"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Inputs handed to the order screen by whoever opened it.
///
/// Missing inputs take the named defaults. The price string is parsed once,
/// leniently, when the params are built.
#[derive(Debug, Clone, Validate)]
pub struct OrderParams {
    #[validate(length(min = 1, max = 100, message = "Product name must be 1-100 characters"))]
    #[validate(custom = "validate_product_name")]
    product_name: String,

    #[validate(custom = "validate_product_image")]
    product_image: ProductImage,

    raw_unit_price: String,

    unit_price: u64,
}

impl OrderParams {
    pub fn new(
        product_name: Option<String>,
        product_image: Option<String>,
        unit_price: Option<String>,
    ) -> Result<Self, OrderError> {
        let raw_unit_price = unit_price.unwrap_or_else(|| DEFAULT_UNIT_PRICE.to_string());

        let params = Self {
            product_name: product_name.unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string()),
            product_image: product_image.map(ProductImage::Asset).unwrap_or_default(),
            unit_price: parse_price(&raw_unit_price),
            raw_unit_price,
        };

        params.validate()?;
        tracing::debug!(
            "Order params: product '{}', unit price {}",
            params.product_name,
            params.unit_price
        );
        Ok(params)
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn product_image(&self) -> &ProductImage {
        &self.product_image
    }

    pub fn raw_unit_price(&self) -> &str {
        &self.raw_unit_price
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }
}

impl Default for OrderParams {
    fn default() -> Self {
        Self {
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            product_image: ProductImage::Placeholder,
            raw_unit_price: DEFAULT_UNIT_PRICE.to_string(),
            unit_price: parse_price(DEFAULT_UNIT_PRICE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub line_total: u64,
    pub grand_total: u64,
}

/// Display strings for the payment summary block and the payment method row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentSummary {
    pub product_name: String,
    pub quantity: String,
    pub price: String,
    pub delivery_fee: String,
    pub total_payment: String,
    pub payment_method: PaymentMethod,
    pub payment_method_amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub product_name: String,
    pub product_image: ProductImage,
    pub unit_price: u64,
    pub quantity: u32,
    pub delivery_fee: u64,
    pub line_total: u64,
    pub grand_total: u64,
    pub payment_method: PaymentMethod,
    pub placed_at: DateTime<Utc>,
}

impl OrderReceipt {
    pub fn new(params: &OrderParams, quantity: u32, totals: OrderTotals) -> Self {
        Self {
            order_id: Uuid::new_v4(),
            product_name: params.product_name().to_string(),
            product_image: params.product_image().clone(),
            unit_price: params.unit_price(),
            quantity,
            delivery_fee: DELIVERY_FEE,
            line_total: totals.line_total,
            grand_total: totals.grand_total,
            payment_method: PaymentMethod::Cash,
            placed_at: Utc::now(),
        }
    }
}
