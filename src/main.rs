use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ddd_events::domain::checkout::{OrderItemProps, OrderFactory, OrderProps, OrderService};
use ddd_events::domain::customer::{
    Address, AddressChangedEvent, CustomerCreatedEvent, CustomerService,
    LogWhenAddressIsChangedHandler, LogWhenCustomerIsCreatedFirstHandler,
    LogWhenCustomerIsCreatedSecondHandler,
};
use ddd_events::domain::product::{
    EmailConfig, ProductCreatedEvent, ProductService, SendEmailWhenProductIsCreatedHandler,
};
use ddd_events::event_dispatch::{EventDispatcher, EventHandler};
use ddd_events::metrics::DispatchMetrics;

fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=trace cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,ddd_events=debug")),
        )
        .init();

    tracing::info!("Starting domain events demo");

    // === 1. Build the dispatcher and register handlers ===
    let metrics = Arc::new(DispatchMetrics::new()?);
    let mut dispatcher = EventDispatcher::new().with_metrics(metrics.clone());

    dispatcher.register(
        Arc::new(SendEmailWhenProductIsCreatedHandler::new(EmailConfig::default()))
            as Arc<dyn EventHandler<ProductCreatedEvent>>,
    );
    dispatcher.register(
        Arc::new(LogWhenCustomerIsCreatedFirstHandler) as Arc<dyn EventHandler<CustomerCreatedEvent>>,
    );
    dispatcher.register(
        Arc::new(LogWhenCustomerIsCreatedSecondHandler) as Arc<dyn EventHandler<CustomerCreatedEvent>>,
    );
    dispatcher.register(
        Arc::new(LogWhenAddressIsChangedHandler) as Arc<dyn EventHandler<AddressChangedEvent>>,
    );

    tracing::info!(registry = ?dispatcher, "Handlers registered");

    // === 2. Customer lifecycle ===
    let customers = CustomerService::new(&dispatcher);
    let mut customer = customers.create("Epaminondas")?;
    customers.change_address(
        &mut customer,
        Address::new("Rua XV de Novembro", 512, "89023-000", "Blumenau")?,
    )?;
    customer.activate()?;

    // === 3. Product catalog ===
    let products = ProductService::new(&dispatcher);
    let keychain = products.create("Chaveiro", "Metal keychain", 10.5)?;

    // === 4. Checkout ===
    let order = OrderFactory::create(OrderProps {
        customer_id: customer.id().to_string(),
        items: vec![OrderItemProps {
            name: keychain.name().to_string(),
            product_id: keychain.id().to_string(),
            quantity: 5,
            price: keychain.price(),
        }],
    })?;
    let placed = OrderService::place_order(&mut customer, order.items().to_vec())?;

    tracing::info!(
        order_id = %placed.id(),
        total = placed.total(),
        reward_points = customer.reward_points(),
        "Order placed"
    );

    // === 5. Tear down ===
    dispatcher.unregister_all();

    tracing::info!(
        metric_families = metrics.registry().gather().len(),
        "Demo complete"
    );

    Ok(())
}
