use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::domain::{Customer, DomainError, Product};

/// The hard-coded catalog and customer list a session starts from.
#[derive(Debug, Clone)]
pub struct Seed {
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
}

fn price(text: &str) -> Result<BigDecimal, DomainError> {
    BigDecimal::from_str(text)
        .map_err(|e| DomainError::InvalidInput(format!("Invalid unit price '{}': {}", text, e)))
}

pub fn seed() -> Result<Seed, DomainError> {
    let products = vec![
        Product::new(
            "076174517163",
            "16 oz. hickory hammer",
            "Stanely Tools",
            "1",
            price("9.97")?,
            50,
        ),
        Product::new(
            "012345678910",
            "4-Volt Max 1/4-in Cordless Screwdriver",
            "Craftsman",
            "2",
            price("29.98")?,
            15,
        ),
        Product::new(
            "052GBA892003",
            "4-Volt 1/4-in Cordless Screwdriver",
            "WORX",
            "3",
            price("43.44")?,
            20,
        ),
        Product::new(
            "BRU852024801",
            "Steel Head Fiberglass Sledge Hammer",
            "Kobalt",
            "4",
            price("19.98")?,
            42,
        ),
    ];

    let customers = vec![
        Customer::new("Garcia", "Diego", "1296 Temple Ave.", "90803", "5627196643"),
        Customer::new("Armando", "Bloom", "4312 Cowboy Rd.", "85924", "5628195230"),
        Customer::new("Grando", "Ralph", "1234 Phillipains", "74920", "8194442234"),
    ];

    Ok(Seed {
        products,
        customers,
    })
}
