use std::fmt;

use super::catalog::{Customer, Product};
use super::errors::DomainError;
use super::order::{Order, OrderLine};

/// A record that can be persisted and reports its identifier once stored.
pub trait Entity: fmt::Display {
    fn key(&self) -> Option<String>;
}

impl Entity for Product {
    fn key(&self) -> Option<String> {
        Some(self.upc.clone())
    }
}

impl Entity for Customer {
    fn key(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}

impl Entity for Order {
    fn key(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}

impl Entity for OrderLine {
    fn key(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}

/// Stores one record, filling in any identifier the store generates.
pub trait Persist<E> {
    fn persist(&mut self, entity: &mut E) -> Result<(), DomainError>;
}

pub trait ProductCatalog {
    /// The stored product with this code. When several match, the first is returned.
    fn find_product(&mut self, upc: &str) -> Result<Option<Product>, DomainError>;
    fn update_stock(&mut self, product: &Product) -> Result<(), DomainError>;
}

pub trait Store:
    Persist<Product> + Persist<Customer> + Persist<Order> + Persist<OrderLine> + ProductCatalog
{
}

impl<T> Store for T where
    T: Persist<Product> + Persist<Customer> + Persist<Order> + Persist<OrderLine> + ProductCatalog
{
}
