// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Id is required")]
    EmptyId,

    #[error("Customer id is required")]
    EmptyCustomerId,

    #[error("Items are required")]
    EmptyItems,

    #[error("Quantity must be greater than 0")]
    InvalidQuantity,

    #[error("Price must be greater than zero")]
    InvalidPrice,

    #[error("Order must have at least one item")]
    NothingToPlace,
}
