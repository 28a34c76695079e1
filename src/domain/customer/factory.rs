use uuid::Uuid;

use super::entity::Customer;
use super::errors::CustomerError;
use super::value_objects::Address;

// ============================================================================
// Customer Factory
// ============================================================================

pub struct CustomerFactory;

impl CustomerFactory {
    pub fn create(name: impl Into<String>) -> Result<Customer, CustomerError> {
        Customer::new(Uuid::new_v4().to_string(), name)
    }

    pub fn create_with_address(
        name: impl Into<String>,
        address: Address,
    ) -> Result<Customer, CustomerError> {
        let mut customer = Self::create(name)?;
        customer.change_address(address)?;
        Ok(customer)
    }
}
