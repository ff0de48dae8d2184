use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{lenient, lenient_id, Reference, Timestamp};

/// Lifecycle states an order can be in on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Completed,
    Rejected,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Completed,
        OrderStatus::Rejected,
        OrderStatus::Cancelled,
    ];

    /// Wire name, exactly as the API spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Completed => "completed",
            OrderStatus::Rejected => "rejected",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Case-sensitive: `"Completed"` is not a known status.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Accepted => "Accepted",
            OrderStatus::Completed => "Completed",
            OrderStatus::Rejected => "Rejected",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Orders that ended without a sale.
    pub fn is_negative(self) -> bool {
        matches!(self, OrderStatus::Rejected | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order as returned by the orders endpoints.
///
/// `status` is kept as the raw string so that values outside
/// [`OrderStatus`] survive decoding; use [`Order::status`] for the typed
/// view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient")]
    pub consumer: Option<Reference>,
}

impl Order {
    pub fn status(&self) -> Option<OrderStatus> {
        self.status.as_deref().and_then(OrderStatus::parse)
    }

    /// Missing or non-numeric amounts count as zero.
    pub fn amount(&self) -> f64 {
        self.total_amount.unwrap_or(0.0)
    }

    /// Only an explicit `cancelled` or `rejected` status removes an order
    /// from earnings; a missing status still counts.
    pub fn counts_toward_revenue(&self) -> bool {
        !self.status().is_some_and(OrderStatus::is_negative)
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_ref().and_then(Timestamp::to_utc)
    }

    /// Sort key for recency; unparseable timestamps sort as the oldest.
    pub fn recency_key(&self) -> DateTime<Utc> {
        self.created_at_utc().unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    pub fn consumer_name(&self) -> &str {
        self.consumer
            .as_ref()
            .and_then(Reference::name)
            .unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Order {
        serde_json::from_value(value).expect("orders decode leniently")
    }

    #[test]
    fn decodes_full_order() {
        let order = decode(json!({
            "_id": "65f1a2b3c4d5e6f708192a3b",
            "status": "completed",
            "totalAmount": 42.5,
            "createdAt": "2024-03-01T10:00:00.000Z",
            "consumer": { "_id": "c1", "name": "Ravi" }
        }));

        assert_eq!(order.id, "65f1a2b3c4d5e6f708192a3b");
        assert_eq!(order.status(), Some(OrderStatus::Completed));
        assert_eq!(order.amount(), 42.5);
        assert_eq!(order.consumer_name(), "Ravi");
        assert!(order.created_at_utc().is_some());
    }

    #[test]
    fn malformed_fields_read_as_absent() {
        let order = decode(json!({
            "id": 17,
            "status": 3,
            "totalAmount": "12.00",
            "createdAt": { "$date": 0 },
            "consumer": 99
        }));

        assert_eq!(order.id, "17");
        assert_eq!(order.status, None);
        assert_eq!(order.amount(), 0.0);
        assert_eq!(order.created_at, None);
        assert_eq!(order.consumer_name(), "Unknown");
    }

    #[test]
    fn empty_object_is_a_valid_order() {
        let order = decode(json!({}));
        assert_eq!(order, Order::default());
        assert!(order.counts_toward_revenue());
        assert_eq!(order.recency_key(), DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn status_match_is_case_sensitive() {
        assert_eq!(OrderStatus::parse("cancelled"), Some(OrderStatus::Cancelled));
        assert_eq!(OrderStatus::parse("Cancelled"), None);

        let shouting = decode(json!({ "status": "CANCELLED", "totalAmount": 8 }));
        assert!(shouting.counts_toward_revenue());
    }

    #[test]
    fn negative_statuses_leave_revenue() {
        for status in OrderStatus::ALL {
            let order = decode(json!({ "status": status.as_str() }));
            assert_eq!(order.counts_toward_revenue(), !status.is_negative(), "{status}");
        }
    }

    #[test]
    fn epoch_millis_and_spaced_dates_are_dated() {
        let millis = decode(json!({ "createdAt": 1709287200000_i64 }));
        let spaced = decode(json!({ "createdAt": "2024-03-01 10:00:00" }));

        assert!(millis.created_at_utc().is_some());
        assert_eq!(millis.created_at_utc(), spaced.created_at_utc());
    }

    #[test]
    fn unpopulated_consumer_has_no_name() {
        let order = decode(json!({ "consumer": "c1" }));
        assert_eq!(order.consumer_name(), "Unknown");
    }
}
