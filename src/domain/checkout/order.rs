use serde::{Deserialize, Serialize};

use super::errors::OrderError;
use super::order_item::OrderItem;

// ============================================================================
// Order Entity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.id.trim().is_empty() {
            return Err(OrderError::EmptyId);
        }
        if self.customer_id.trim().is_empty() {
            return Err(OrderError::EmptyCustomerId);
        }
        if self.items.is_empty() {
            return Err(OrderError::EmptyItems);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::total).sum()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, quantity: u32) -> OrderItem {
        OrderItem::new(id, format!("Item {id}"), price, "p1", quantity).unwrap()
    }

    #[test]
    fn test_order_validation() {
        assert_eq!(Order::new("", "123", vec![item("1", 10.0, 1)]).unwrap_err(), OrderError::EmptyId);
        assert_eq!(Order::new("123", "", vec![item("1", 10.0, 1)]).unwrap_err(), OrderError::EmptyCustomerId);
        assert_eq!(Order::new("123", "123", vec![]).unwrap_err(), OrderError::EmptyItems);
    }

    #[test]
    fn test_order_total() {
        let order = Order::new("o1", "c1", vec![item("i1", 100.0, 2)]).unwrap();
        assert_eq!(order.total(), 200.0);

        let order = Order::new("o1", "c1", vec![item("i1", 100.0, 2), item("i2", 200.0, 2)]).unwrap();
        assert_eq!(order.total(), 600.0);
    }

    #[test]
    fn test_add_item_updates_total() {
        let mut order = Order::new("1", "1", vec![item("1", 10.5, 5)]).unwrap();
        order.add_item(item("2", 10.5, 10));

        assert_eq!(order.items().len(), 2);
        assert_eq!(order.total(), 157.5);
    }
}
