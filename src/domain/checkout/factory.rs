use uuid::Uuid;

use super::errors::OrderError;
use super::order::Order;
use super::order_item::OrderItem;

// ============================================================================
// Order Factory
// ============================================================================

#[derive(Debug, Clone)]
pub struct OrderItemProps {
    pub name: String,
    pub product_id: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone)]
pub struct OrderProps {
    pub customer_id: String,
    pub items: Vec<OrderItemProps>,
}

pub struct OrderFactory;

impl OrderFactory {
    /// Build an order, giving it and each item a fresh id
    pub fn create(props: OrderProps) -> Result<Order, OrderError> {
        let items = props
            .items
            .into_iter()
            .map(|item| {
                OrderItem::new(
                    Uuid::new_v4().to_string(),
                    item.name,
                    item.price,
                    item.product_id,
                    item.quantity,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Order::new(Uuid::new_v4().to_string(), props.customer_id, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_order() {
        let customer_id = Uuid::new_v4().to_string();
        let props = OrderProps {
            customer_id: customer_id.clone(),
            items: vec![OrderItemProps {
                name: "Product 1".to_string(),
                product_id: Uuid::new_v4().to_string(),
                quantity: 1,
                price: 100.0,
            }],
        };

        let order = OrderFactory::create(props).unwrap();

        assert!(Uuid::parse_str(order.id()).is_ok());
        assert_eq!(order.customer_id(), customer_id);
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.total(), 100.0);
    }

    #[test]
    fn test_create_order_with_invalid_item_fails() {
        let props = OrderProps {
            customer_id: "c1".to_string(),
            items: vec![OrderItemProps {
                name: "Product 1".to_string(),
                product_id: "p1".to_string(),
                quantity: 0,
                price: 100.0,
            }],
        };

        assert_eq!(OrderFactory::create(props).unwrap_err(), OrderError::InvalidQuantity);
    }
}
