// ============================================================================
// Product Business Rule Errors
// ============================================================================

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("Id is required")]
    EmptyId,

    #[error("Name is required")]
    EmptyName,

    #[error("Price must be greater than zero")]
    InvalidPrice,

    #[error("Percentage must not be negative: {0}")]
    NegativePercentage(f64),
}
