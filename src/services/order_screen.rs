use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    models::order::{OrderParams, OrderReceipt, OrderTotals, PaymentMethod, PaymentSummary, DELIVERY_FEE},
    services::{
        navigation::Navigator,
        order_calculator::{compute_totals, QuantityState},
    },
    utils::formatting::format_currency,
};

/// State behind the order screen: fixed params plus the quantity stepper.
pub struct OrderScreen {
    params: OrderParams,
    quantity: QuantityState,
    navigator: Arc<dyn Navigator>,
}

impl OrderScreen {
    pub fn new(params: OrderParams, navigator: Arc<dyn Navigator>) -> Self {
        info!(
            "Opening order screen for '{}' at {}",
            params.product_name(),
            format_currency(params.unit_price())
        );
        Self {
            params,
            quantity: QuantityState::new(),
            navigator,
        }
    }

    pub fn params(&self) -> &OrderParams {
        &self.params
    }

    pub fn quantity(&self) -> u32 {
        self.quantity.value()
    }

    pub fn unit_price(&self) -> u64 {
        self.params.unit_price()
    }

    pub fn increment(&mut self) -> u32 {
        self.quantity = self.quantity.increment();
        debug!("Quantity incremented to {}", self.quantity.value());
        self.quantity.value()
    }

    pub fn decrement(&mut self) -> u32 {
        let before = self.quantity.value();
        self.quantity = self.quantity.decrement();
        if before == self.quantity.value() {
            debug!("Quantity already at minimum ({})", before);
        } else {
            debug!("Quantity decremented to {}", self.quantity.value());
        }
        self.quantity.value()
    }

    /// Derived from the current quantity on every call.
    pub fn totals(&self) -> OrderTotals {
        compute_totals(self.unit_price(), self.quantity(), DELIVERY_FEE)
    }

    pub fn summary(&self) -> PaymentSummary {
        let totals = self.totals();
        let total_payment = format_currency(totals.grand_total);

        PaymentSummary {
            product_name: self.params.product_name().to_string(),
            quantity: self.quantity().to_string(),
            price: format_currency(self.unit_price()),
            delivery_fee: format_currency(DELIVERY_FEE),
            payment_method_amount: total_payment.clone(),
            total_payment,
            payment_method: PaymentMethod::Cash,
        }
    }

    pub fn go_back(&self) {
        info!("Leaving order screen");
        self.navigator.go_back();
    }

    pub fn place_order(&self) -> OrderReceipt {
        let receipt = OrderReceipt::new(&self.params, self.quantity(), self.totals());
        info!(
            "Order {} placed: {} x '{}' for {}",
            receipt.order_id,
            receipt.quantity,
            receipt.product_name,
            format_currency(receipt.grand_total)
        );
        receipt
    }
}
