use serde::{Deserialize, Serialize};

use super::errors::CustomerError;
use super::value_objects::Address;

// ============================================================================
// Customer Entity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: f64,
}

impl Customer {
    /// New customers start inactive, without address or reward points
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0.0,
        };
        customer.validate()?;
        Ok(customer)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.id.trim().is_empty() {
            return Err(CustomerError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(CustomerError::EmptyName);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> f64 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) -> Result<(), CustomerError> {
        address.validate()?;
        self.address = Some(address);
        Ok(())
    }

    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: f64) {
        self.reward_points += points;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_address() -> Address {
        Address::new("Street 1", 123, "13330-250", "São Paulo").unwrap()
    }

    #[test]
    fn test_customer_creation() {
        let customer = Customer::new("123", "John").unwrap();

        assert_eq!(customer.id(), "123");
        assert_eq!(customer.name(), "John");
        assert!(!customer.is_active());
        assert!(customer.address().is_none());
        assert_eq!(customer.reward_points(), 0.0);
    }

    #[test]
    fn test_customer_requires_id_and_name() {
        assert_eq!(Customer::new("", "John").unwrap_err(), CustomerError::EmptyId);
        assert_eq!(Customer::new("123", "").unwrap_err(), CustomerError::EmptyName);
    }

    #[test]
    fn test_change_name() {
        let mut customer = Customer::new("123", "John").unwrap();
        customer.change_name("Jane").unwrap();
        assert_eq!(customer.name(), "Jane");

        assert_eq!(customer.change_name(" ").unwrap_err(), CustomerError::EmptyName);
        assert_eq!(customer.name(), "Jane"); // unchanged
    }

    #[test]
    fn test_activate_requires_address() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();
        assert_eq!(customer.activate().unwrap_err(), CustomerError::AddressRequired);

        customer.change_address(create_test_address()).unwrap();
        customer.activate().unwrap();
        assert!(customer.is_active());
    }

    #[test]
    fn test_deactivate() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();
        customer.change_address(create_test_address()).unwrap();
        customer.activate().unwrap();

        customer.deactivate();
        assert!(!customer.is_active());
    }

    #[test]
    fn test_invalid_address_is_rejected() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();
        let mut address = create_test_address();
        address.city = String::new();

        assert_eq!(customer.change_address(address).unwrap_err(), CustomerError::EmptyCity);
        assert!(customer.address().is_none());
    }

    #[test]
    fn test_add_reward_points() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();

        customer.add_reward_points(10.0);
        assert_eq!(customer.reward_points(), 10.0);

        customer.add_reward_points(10.0);
        assert_eq!(customer.reward_points(), 20.0);
    }
}
