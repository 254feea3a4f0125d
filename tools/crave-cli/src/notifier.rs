//! Console "order placed" notification.

use chrono::{DateTime, Local};
use crave_commerce::checkout::{OrderNotifier, OrderSummary};
use serde::Serialize;

use crate::output::Output;

const CONFIRMATION: &str =
    "Rawr! Order placed successfully! Your cave cravings are being prepared.";

/// Prints a confirmation for each placed order.
pub struct ConsoleNotifier {
    output: Output,
    currency_symbol: String,
}

#[derive(Serialize)]
struct OrderPlaced<'a> {
    message: &'static str,
    placed_at: DateTime<Local>,
    order: &'a OrderSummary,
}

impl ConsoleNotifier {
    pub fn new(output: Output, currency_symbol: impl Into<String>) -> Self {
        Self {
            output,
            currency_symbol: currency_symbol.into(),
        }
    }
}

impl OrderNotifier for ConsoleNotifier {
    fn order_placed(&self, summary: &OrderSummary) {
        let placed_at = Local::now();

        if self.output.is_json() {
            self.output.json(&OrderPlaced {
                message: CONFIRMATION,
                placed_at,
                order: summary,
            });
            return;
        }

        self.output.success(CONFIRMATION);
        self.output
            .kv("placed at", &placed_at.format("%Y-%m-%d %H:%M:%S").to_string());
        for line in &summary.lines {
            self.output.list_item(&format!(
                "{} x{} = {}",
                line.item_id,
                line.quantity,
                line.total.display_with(&self.currency_symbol)
            ));
        }
        self.output.kv("items", &summary.item_count.to_string());
        self.output
            .kv("total", &summary.subtotal.display_with(&self.currency_symbol));
    }
}
