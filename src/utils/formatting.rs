use chrono::{DateTime, Local, Utc};
use console::style;
use tabled::{Table, Tabled, settings::{Style, Alignment}};

use crate::models::order::{OrderParams, OrderReceipt, PaymentSummary};

pub const CURRENCY_PREFIX: &str = "Rp ";

#[derive(Tabled)]
struct PaymentRow {
    #[tabled(rename = "Payment Summary")]
    label: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Rupiah display: whole units, `.` between groups of three digits.
pub fn format_currency(amount: u64) -> String {
    format!("{}{}", CURRENCY_PREFIX, group_thousands(amount))
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    grouped
}

pub fn format_payment_summary(summary: &PaymentSummary) -> String {
    let rows = vec![
        PaymentRow {
            label: "Price",
            amount: summary.price.clone(),
        },
        PaymentRow {
            label: "Delivery Fee",
            amount: summary.delivery_fee.clone(),
        },
        PaymentRow {
            label: "Total Payment",
            amount: summary.total_payment.clone(),
        },
    ];

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Alignment::left());

    table.to_string()
}

pub fn format_order_screen(params: &OrderParams, summary: &PaymentSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n\n", style("Order").bold().cyan()));
    output.push_str(&format!("{}: {}\n", style("Product").bold(), style(&summary.product_name).green()));
    output.push_str(&format!("{}: {}\n", style("Image").bold(), style(params.product_image()).dim()));
    output.push_str(&format!(
        "{}: [-] {} [+]\n\n",
        style("Quantity").bold(),
        style(&summary.quantity).yellow()
    ));

    output.push_str(&format_payment_summary(summary));
    output.push_str("\n\n");

    output.push_str(&format!(
        "{}: {}\n",
        style(summary.payment_method).bold(),
        style(&summary.payment_method_amount).green()
    ));

    output
}

pub fn format_receipt(receipt: &OrderReceipt) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", style("Order ID").bold(), style(&receipt.order_id).cyan()));
    output.push_str(&format!("{}: {}\n", style("Product").bold(), style(&receipt.product_name).green()));
    output.push_str(&format!("{}: {}\n", style("Quantity").bold(), receipt.quantity));
    output.push_str(&format!("{}: {}\n", style("Price").bold(), format_currency(receipt.unit_price)));
    output.push_str(&format!("{}: {}\n", style("Delivery Fee").bold(), format_currency(receipt.delivery_fee)));
    output.push_str(&format!(
        "{}: {}\n",
        style("Total Payment").bold(),
        style(format_currency(receipt.grand_total)).green()
    ));
    output.push_str(&format!("{}: {}\n", style("Payment Method").bold(), receipt.payment_method));
    output.push_str(&format!("{}: {}\n", style("Placed").bold(), style(format_date(&receipt.placed_at)).dim()));

    output
}

pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}
