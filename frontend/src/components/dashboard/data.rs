//! What the dashboard has loaded, and for which farmer.

use common::model::order::Order;
use common::model::product::Product;

#[derive(Debug, Default)]
pub struct FarmerData {
    /// Farmer id the fields below belong to.
    farmer_id: Option<String>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub products_loading: bool,
    pub orders_loading: bool,
}

impl FarmerData {
    /// Switches to `farmer_id`, dropping data loaded for anyone else.
    /// Returns whether a fetch is needed.
    pub fn begin(&mut self, farmer_id: Option<&str>) -> bool {
        if self.farmer_id.as_deref() == farmer_id {
            return false;
        }
        *self = FarmerData {
            farmer_id: farmer_id.map(str::to_string),
            products_loading: farmer_id.is_some(),
            orders_loading: farmer_id.is_some(),
            ..FarmerData::default()
        };
        farmer_id.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.products_loading || self.orders_loading
    }

    fn is_current(&self, farmer_id: &str) -> bool {
        self.farmer_id.as_deref() == Some(farmer_id)
    }

    /// `None` clears the loading flag after a failed fetch. Responses for a
    /// farmer other than the current one are ignored; returns whether the
    /// response was applied.
    pub fn products_loaded(&mut self, farmer_id: &str, products: Option<Vec<Product>>) -> bool {
        if !self.is_current(farmer_id) {
            return false;
        }
        if let Some(products) = products {
            self.products = products;
        }
        self.products_loading = false;
        true
    }

    pub fn orders_loaded(&mut self, farmer_id: &str, orders: Option<Vec<Order>>) -> bool {
        if !self.is_current(farmer_id) {
            return false;
        }
        if let Some(orders) = orders {
            self.orders = orders;
        }
        self.orders_loading = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            ..Order::default()
        }
    }

    #[test]
    fn begin_only_fetches_for_a_new_farmer() {
        let mut data = FarmerData::default();
        assert!(!data.begin(None));
        assert!(data.begin(Some("f1")));
        assert!(data.is_loading());
        assert!(!data.begin(Some("f1")));
    }

    #[test]
    fn switching_farmer_clears_previous_data() {
        let mut data = FarmerData::default();
        data.begin(Some("f1"));
        data.orders_loaded("f1", Some(vec![order("o1")]));
        data.products_loaded("f1", Some(Vec::new()));

        assert!(data.begin(Some("f2")));
        assert!(data.orders.is_empty());

        data.orders_loaded("f2", Some(vec![order("o2")]));
        assert!(!data.begin(None));
        assert!(data.orders.is_empty());
        assert!(!data.is_loading());
    }

    #[test]
    fn responses_for_an_earlier_farmer_are_ignored() {
        let mut data = FarmerData::default();
        data.begin(Some("f1"));
        data.begin(Some("f2"));

        assert!(!data.orders_loaded("f1", Some(vec![order("stale")])));
        assert!(data.orders.is_empty());
        assert!(data.orders_loading);

        assert!(data.orders_loaded("f2", Some(vec![order("fresh")])));
        assert_eq!(data.orders[0].id, "fresh");
        assert!(data.products_loaded("f2", None));
        assert!(!data.is_loading());
    }
}
