use anyhow::{Context, Result};

use crate::event_dispatch::{EventDispatcher, EventEnvelope};

use super::entity::Product;
use super::errors::ProductError;
use super::events::ProductCreatedEvent;
use super::factory::ProductFactory;

// ============================================================================
// Product Service
// ============================================================================

pub struct ProductService<'a> {
    dispatcher: &'a EventDispatcher,
}

impl<'a> ProductService<'a> {
    pub fn new(dispatcher: &'a EventDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Create a product and raise `ProductCreatedEvent`
    pub fn create(&self, name: &str, description: &str, price: f64) -> Result<Product> {
        let product = ProductFactory::create(name, price)?;

        tracing::debug!(product_id = %product.id(), price, "Product created");

        let event = EventEnvelope::new(ProductCreatedEvent {
            name: product.name().to_string(),
            description: description.to_string(),
            price: product.price(),
        });
        self.dispatcher
            .notify(&event)
            .with_context(|| format!("Failed to notify creation of product {}", product.id()))?;

        Ok(product)
    }

    /// Raise every price by `percentage` percent
    ///
    /// Either all products are updated or none is.
    pub fn increase_price(products: &mut [Product], percentage: f64) -> Result<(), ProductError> {
        if percentage.is_nan() || percentage < 0.0 {
            return Err(ProductError::NegativePercentage(percentage));
        }

        let factor = 1.0 + percentage / 100.0;
        for product in products.iter_mut() {
            product.change_price(product.price() * factor)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::event_dispatch::EventHandler;

    #[derive(Default)]
    struct Recorder {
        received: Mutex<Vec<ProductCreatedEvent>>,
    }

    impl EventHandler<ProductCreatedEvent> for Recorder {
        fn handle(&self, event: &EventEnvelope<ProductCreatedEvent>) -> anyhow::Result<()> {
            self.received.lock().unwrap().push(event.event_data.clone());
            Ok(())
        }
    }

    #[test]
    fn test_create_raises_product_created() {
        let recorder = Arc::new(Recorder::default());
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(recorder.clone() as Arc<dyn EventHandler<ProductCreatedEvent>>);

        let product = ProductService::new(&dispatcher)
            .create("Product 1", "Product 1 description", 10.0)
            .unwrap();

        assert_eq!(product.name(), "Product 1");

        let received = recorder.received.lock().unwrap();
        assert_eq!(
            *received,
            vec![ProductCreatedEvent {
                name: "Product 1".to_string(),
                description: "Product 1 description".to_string(),
                price: 10.0,
            }]
        );
    }

    #[test]
    fn test_increase_price_of_all_products() {
        let mut products = vec![
            Product::new("a", "Product 1", 10.0).unwrap(),
            Product::new("b", "Product 2", 20.0).unwrap(),
        ];

        ProductService::increase_price(&mut products, 100.0).unwrap();

        assert_eq!(products[0].price(), 20.0);
        assert_eq!(products[1].price(), 40.0);
    }

    #[test]
    fn test_increase_price_rejects_negative_percentage() {
        let mut products = vec![Product::new("a", "Product 1", 10.0).unwrap()];

        let result = ProductService::increase_price(&mut products, -10.0);

        assert_eq!(result.unwrap_err(), ProductError::NegativePercentage(-10.0));
        assert_eq!(products[0].price(), 10.0);
    }
}
