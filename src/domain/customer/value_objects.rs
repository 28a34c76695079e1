use serde::{Deserialize, Serialize};

use super::errors::CustomerError;

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Customer address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: u32,
    pub zip: String,
    pub city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, CustomerError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    pub fn validate(&self) -> Result<(), CustomerError> {
        if self.street.trim().is_empty() {
            return Err(CustomerError::EmptyStreet);
        }
        if self.number == 0 {
            return Err(CustomerError::EmptyNumber);
        }
        if self.zip.trim().is_empty() {
            return Err(CustomerError::EmptyZip);
        }
        if self.city.trim().is_empty() {
            return Err(CustomerError::EmptyCity);
        }
        Ok(())
    }

    /// "street, number - city, zip", as shown in change notices
    pub fn notice_line(&self) -> String {
        format!("{}, {} - {}, {}", self.street, self.number, self.city, self.zip)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_creation() {
        let address = Address::new("Rua XV de Novembro", 512, "89023-000", "Blumenau").unwrap();

        assert_eq!(address.street, "Rua XV de Novembro");
        assert_eq!(address.number, 512);
        assert_eq!(address.to_string(), "Rua XV de Novembro, 512, 89023-000 Blumenau");
        assert_eq!(address.notice_line(), "Rua XV de Novembro, 512 - Blumenau, 89023-000");
    }

    #[test]
    fn test_address_requires_every_field() {
        assert!(matches!(Address::new("", 1, "z", "c"), Err(CustomerError::EmptyStreet)));
        assert!(matches!(Address::new("s", 0, "z", "c"), Err(CustomerError::EmptyNumber)));
        assert!(matches!(Address::new("s", 1, " ", "c"), Err(CustomerError::EmptyZip)));
        assert!(matches!(Address::new("s", 1, "z", ""), Err(CustomerError::EmptyCity)));
    }

    #[test]
    fn test_address_equality_is_structural() {
        let a = Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap();
        let b = Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap();
        assert_eq!(a, b);
    }
}
