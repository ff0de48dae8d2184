//! Text formatting shared by the pages.

use num_format::{Locale, ToFormattedString};

use crate::model::order::Order;

/// Currency prefix for every amount shown in the client.
pub const CURRENCY: &str = "₨";

/// `₨1,234.50`. Rounds to cents; non-finite input renders as zero.
pub fn format_amount(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let nonzero = fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if value < 0.0 && nonzero { "-" } else { "" };
    format!("{}{}{}.{}", sign, CURRENCY, group_thousands(whole), cents)
}

/// Inserts the `en` locale separator every three digits.
fn group_thousands(digits: &str) -> String {
    let separator = Locale::en.separator();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}

pub fn format_count(count: usize) -> String {
    count.to_formatted_string(&Locale::en)
}

impl Order {
    /// First eight characters of the id, or `...` when there is none.
    pub fn short_id(&self) -> String {
        if self.id.is_empty() {
            "...".to_string()
        } else {
            self.id.chars().take(8).collect()
        }
    }

    /// `m/d/yyyy`, or `N/A` when the order has no usable timestamp.
    pub fn display_date(&self) -> String {
        self.created_at_utc()
            .map(|at| at.format("%-m/%-d/%Y").to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Status shown on badges; the raw value when it is not a known status.
    pub fn status_label(&self) -> &str {
        match (self.status(), self.status.as_deref()) {
            (Some(status), _) => status.label(),
            (None, Some(raw)) if !raw.is_empty() => raw,
            _ => "Unknown",
        }
    }

    pub fn display_amount(&self) -> String {
        format_amount(self.amount())
    }
}
