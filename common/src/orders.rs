//! Order view models: dashboard aggregates and the status filter used by the
//! order list.

use std::cmp::Reverse;

use crate::model::order::{Order, OrderStatus};

/// How many orders the dashboard's "recent orders" table shows.
pub const RECENT_LIMIT: usize = 5;

/// Summary metrics for a set of orders. Recomputed on every change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateSummary {
    pub total_count: usize,
    /// Sum of amounts over orders that were not cancelled or rejected.
    pub total_revenue: f64,
    /// Up to [`RECENT_LIMIT`] orders, newest first.
    pub recent: Vec<Order>,
}

pub fn aggregate(orders: &[Order]) -> AggregateSummary {
    let total_revenue = orders
        .iter()
        .filter(|order| order.counts_toward_revenue())
        .fold(0.0, |sum, order| sum + order.amount());

    let mut recent = orders.to_vec();
    recent.sort_by_key(|order| Reverse(order.recency_key()));
    recent.truncate(RECENT_LIMIT);

    AggregateSummary {
        total_count: orders.len(),
        total_revenue,
        recent,
    }
}

/// Status selection of the order list. `All` is a UI-only value and never
/// appears on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    /// Filter buttons, in display order.
    pub const CHOICES: [StatusFilter; 6] = [
        StatusFilter::All,
        StatusFilter::Only(OrderStatus::Pending),
        StatusFilter::Only(OrderStatus::Accepted),
        StatusFilter::Only(OrderStatus::Completed),
        StatusFilter::Only(OrderStatus::Rejected),
        StatusFilter::Only(OrderStatus::Cancelled),
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "all" => Some(StatusFilter::All),
            other => OrderStatus::parse(other).map(StatusFilter::Only),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn matches(self, order: &Order) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => order.status.as_deref() == Some(status.as_str()),
        }
    }
}

/// Orders matching `status`, in their original order.
pub fn filter(orders: &[Order], status: StatusFilter) -> Vec<Order> {
    match status {
        StatusFilter::All => orders.to_vec(),
        StatusFilter::Only(_) => orders
            .iter()
            .filter(|order| status.matches(order))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize, normalize_entries, ORDER_KEYS};
    use serde_json::{json, Value};

    fn orders(raw: Value) -> Vec<Order> {
        normalize_entries(&raw, ORDER_KEYS)
    }

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|order| order.id.as_str()).collect()
    }

    #[test]
    fn revenue_excludes_cancelled_and_rejected() {
        let summary = aggregate(&orders(json!([
            { "status": "completed", "totalAmount": 10 },
            { "status": "cancelled", "totalAmount": 50 },
            { "status": "pending", "totalAmount": 5 }
        ])));

        assert_eq!(summary.total_count, 3);
        assert_eq!(summary.total_revenue, 15.0);
    }

    #[test]
    fn missing_status_counts_and_missing_amount_is_zero() {
        let summary = aggregate(&orders(json!([
            { "totalAmount": 7.25 },
            { "status": "rejected", "totalAmount": 100 },
            { "status": "accepted" },
            { "status": "completed", "totalAmount": "3" }
        ])));

        assert_eq!(summary.total_count, 4);
        assert_eq!(summary.total_revenue, 7.25);
    }

    #[test]
    fn entries_that_are_not_objects_still_count() {
        let raw = json!([null, { "status": "pending", "totalAmount": 5 }]);
        let summary = aggregate(&orders(raw.clone()));

        assert_eq!(summary.total_count, normalize(&raw, ORDER_KEYS).len());
        assert_eq!(summary.total_count, 2);
        assert_eq!(summary.total_revenue, 5.0);
        assert!(summary.recent.contains(&Order::default()));
    }

    #[test]
    fn empty_input() {
        let summary = aggregate(&[]);
        assert_eq!(summary, AggregateSummary::default());
        assert!(summary.total_revenue.is_sign_positive());
    }

    #[test]
    fn recent_is_newest_first_and_capped() {
        let summary = aggregate(&orders(json!([
            { "_id": "a", "createdAt": "2024-01-01T00:00:00Z" },
            { "_id": "b", "createdAt": "2024-01-05T00:00:00Z" },
            { "_id": "c", "createdAt": "2024-01-03T00:00:00Z" },
            { "_id": "d", "createdAt": "2024-01-07T00:00:00Z" },
            { "_id": "e", "createdAt": "2024-01-02T00:00:00Z" },
            { "_id": "f", "createdAt": "2024-01-06T00:00:00Z" },
            { "_id": "g", "createdAt": "2024-01-04T00:00:00Z" }
        ])));

        assert_eq!(summary.total_count, 7);
        assert_eq!(ids(&summary.recent), ["d", "f", "b", "g", "c"]);
        assert!(summary
            .recent
            .windows(2)
            .all(|pair| pair[0].recency_key() >= pair[1].recency_key()));
    }

    #[test]
    fn undated_orders_sort_last() {
        let summary = aggregate(&orders(json!([
            { "_id": "undated" },
            { "_id": "garbled", "createdAt": "not a date" },
            { "_id": "dated", "createdAt": "2023-12-31T23:59:59Z" }
        ])));

        assert_eq!(summary.recent[0].id, "dated");
        assert_eq!(summary.recent.len(), 3);
    }

    #[test]
    fn spaced_and_epoch_timestamps_sort_by_time() {
        let summary = aggregate(&orders(json!([
            { "_id": "space", "createdAt": "2024-03-01 10:00:00" },
            { "_id": "millis", "createdAt": 1709287200000_i64 },
            { "_id": "old", "createdAt": "2020-01-01T00:00:00Z" }
        ])));

        assert_eq!(ids(&summary.recent), ["space", "millis", "old"]);
    }

    #[test]
    fn aggregate_does_not_reorder_input() {
        let input = orders(json!([
            { "_id": "old", "createdAt": "2024-01-01" },
            { "_id": "new", "createdAt": "2024-02-01" }
        ]));
        let _ = aggregate(&input);
        assert_eq!(ids(&input), ["old", "new"]);
    }

    fn mixed() -> Vec<Order> {
        orders(json!([
            { "_id": "1", "status": "pending" },
            { "_id": "2", "status": "completed" },
            { "_id": "3" },
            { "_id": "4", "status": "pending" },
            { "_id": "5", "status": "Pending" },
            { "_id": "6", "status": "cancelled" }
        ]))
    }

    #[test]
    fn filter_all_is_identity() {
        let input = mixed();
        assert_eq!(filter(&input, StatusFilter::All), input);
    }

    #[test]
    fn filter_is_stable_and_exact() {
        let pending = filter(&mixed(), StatusFilter::Only(OrderStatus::Pending));
        assert_eq!(ids(&pending), ["1", "4"]);

        let accepted = filter(&mixed(), StatusFilter::Only(OrderStatus::Accepted));
        assert!(accepted.is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        for choice in StatusFilter::CHOICES {
            let once = filter(&mixed(), choice);
            assert_eq!(filter(&once, choice), once, "{}", choice.as_str());
        }
    }

    #[test]
    fn status_filter_parse_round_trips_choices() {
        for choice in StatusFilter::CHOICES {
            assert_eq!(StatusFilter::parse(choice.as_str()), Some(choice));
        }
        assert_eq!(StatusFilter::parse("All"), None);
        assert_eq!(StatusFilter::default(), StatusFilter::All);
        assert_eq!(StatusFilter::Only(OrderStatus::Rejected).label(), "Rejected");
    }
}
