// ============================================================================
// Customer Business Rule Errors
// ============================================================================

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CustomerError {
    #[error("Id is required")]
    EmptyId,

    #[error("Name is required")]
    EmptyName,

    #[error("Address is mandatory to activate a customer")]
    AddressRequired,

    #[error("Street is required")]
    EmptyStreet,

    #[error("Number is required")]
    EmptyNumber,

    #[error("Zip is required")]
    EmptyZip,

    #[error("City is required")]
    EmptyCity,
}
