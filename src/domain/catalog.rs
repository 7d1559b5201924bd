use std::fmt;

use bigdecimal::BigDecimal;
use uuid::Uuid;

use super::errors::DomainError;

/// A product on offer, keyed by its universal product code.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub upc: String,
    pub name: String,
    pub manufacturer: String,
    pub style: String,
    pub unit_list_price: BigDecimal,
    pub units_in_stock: i32,
}

impl Product {
    pub fn new(
        upc: impl Into<String>,
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        style: impl Into<String>,
        unit_list_price: BigDecimal,
        units_in_stock: i32,
    ) -> Self {
        Self {
            upc: upc.into(),
            name: name.into(),
            manufacturer: manufacturer.into(),
            style: style.into(),
            unit_list_price,
            units_in_stock,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.units_in_stock > 0
    }

    /// The quantity that can actually be sold for a request: the request
    /// itself, or whatever is left when the request exceeds stock.
    pub fn available_quantity(&self, requested: i32) -> i32 {
        requested.min(self.units_in_stock).max(0)
    }

    /// Takes `quantity` units out of stock.
    pub fn remove_stock(&mut self, quantity: i32) -> Result<(), DomainError> {
        if quantity <= 0 {
            return Err(DomainError::InvalidInput(format!(
                "quantity must be positive, got {quantity}"
            )));
        }
        if quantity > self.units_in_stock {
            return Err(DomainError::InsufficientStock {
                upc: self.upc.clone(),
                requested: quantity,
                available: self.units_in_stock,
            });
        }
        self.units_in_stock -= quantity;
        Ok(())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product {{upc: {}, name: {}, mfgr: {}, model: {}, price: {}, stock: {}}}",
            self.upc,
            self.name,
            self.manufacturer,
            self.style,
            self.unit_list_price,
            self.units_in_stock
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Assigned by the store when the customer is persisted.
    pub id: Option<Uuid>,
    pub last_name: String,
    pub first_name: String,
    pub street: String,
    pub zip: String,
    pub phone: String,
}

impl Customer {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        street: impl Into<String>,
        zip: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            last_name: last_name.into(),
            first_name: first_name.into(),
            street: street.into(),
            zip: zip.into(),
            phone: phone.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.map(|id| id.to_string());
        write!(
            f,
            "Customer {{id: {}, name: {}, street: {}, zip: {}, phone: {}}}",
            id.as_deref().unwrap_or("<unassigned>"),
            self.full_name(),
            self.street,
            self.zip,
            self.phone
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn hammer(stock: i32) -> Product {
        Product::new(
            "076174517163",
            "16 oz. hickory hammer",
            "Stanely Tools",
            "1",
            BigDecimal::from_str("9.97").expect("valid decimal"),
            stock,
        )
    }

    #[test]
    fn available_quantity_passes_through_when_stock_suffices() {
        assert_eq!(hammer(50).available_quantity(10), 10);
    }

    #[test]
    fn available_quantity_clamps_to_stock() {
        assert_eq!(hammer(5).available_quantity(12), 5);
    }

    #[test]
    fn available_quantity_is_zero_when_sold_out() {
        let product = hammer(0);
        assert!(!product.in_stock());
        assert_eq!(product.available_quantity(3), 0);
    }

    #[test]
    fn remove_stock_reduces_units() {
        let mut product = hammer(5);
        product.remove_stock(5).expect("remove failed");
        assert_eq!(product.units_in_stock, 0);
    }

    #[test]
    fn remove_stock_never_goes_negative() {
        let mut product = hammer(2);
        let err = product.remove_stock(3).expect_err("should reject");
        assert!(matches!(
            err,
            DomainError::InsufficientStock {
                requested: 3,
                available: 2,
                ..
            }
        ));
        assert_eq!(product.units_in_stock, 2);
    }

    #[test]
    fn remove_stock_rejects_non_positive_quantity() {
        let mut product = hammer(2);
        assert!(matches!(
            product.remove_stock(0),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn customer_display_marks_unassigned_id() {
        let customer = Customer::new("Garcia", "Diego", "1296 Temple Ave.", "90803", "5627196643");
        assert!(customer.to_string().contains("<unassigned>"));
        assert_eq!(customer.full_name(), "Diego Garcia");
    }
}
