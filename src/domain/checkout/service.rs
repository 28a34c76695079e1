use uuid::Uuid;

use crate::domain::customer::Customer;

use super::errors::OrderError;
use super::order::Order;
use super::order_item::OrderItem;

// ============================================================================
// Order Service
// ============================================================================

pub struct OrderService;

impl OrderService {
    /// Sum of the totals of all given orders
    pub fn total(orders: &[Order]) -> f64 {
        orders.iter().map(Order::total).sum()
    }

    /// Place an order for the customer, crediting half its total as reward points
    pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> Result<Order, OrderError> {
        if items.is_empty() {
            return Err(OrderError::NothingToPlace);
        }

        let order = Order::new(Uuid::new_v4().to_string(), customer.id(), items)?;
        customer.add_reward_points(order.total() / 2.0);

        tracing::debug!(
            order_id = %order.id(),
            customer_id = %customer.id(),
            total = order.total(),
            "Order placed"
        );

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_order_credits_reward_points() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        let item = OrderItem::new("i1", "Item 1", 10.0, "p1", 1).unwrap();

        let order = OrderService::place_order(&mut customer, vec![item]).unwrap();

        assert_eq!(customer.reward_points(), 5.0);
        assert_eq!(order.total(), 10.0);
        assert_eq!(order.customer_id(), "c1");
    }

    #[test]
    fn test_place_order_without_items_fails() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();

        let result = OrderService::place_order(&mut customer, vec![]);

        assert_eq!(result.unwrap_err(), OrderError::NothingToPlace);
        assert_eq!(customer.reward_points(), 0.0);
    }

    #[test]
    fn test_total_of_all_orders() {
        let item1 = OrderItem::new("i1", "Item 1", 100.0, "p1", 1).unwrap();
        let item2 = OrderItem::new("i2", "Item 2", 200.0, "p2", 2).unwrap();

        let order1 = Order::new("o1", "c1", vec![item1]).unwrap();
        let order2 = Order::new("o2", "c1", vec![item2]).unwrap();

        assert_eq!(OrderService::total(&[order1, order2]), 500.0);
    }
}
