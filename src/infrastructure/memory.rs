use uuid::Uuid;

use crate::domain::order::SOLD_BY_MAX_LEN;
use crate::domain::{Customer, DomainError, Order, OrderLine, Persist, Product, ProductCatalog};

/// Keeps every record in memory. Used for dry runs, where nothing should
/// reach the database, and in tests.
///
/// Mirrors the constraints of the relational schema: product codes are
/// unique and foreign keys must point at stored records.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
    customers: Vec<Customer>,
    orders: Vec<Order>,
    order_lines: Vec<OrderLine>,
}

impl InMemoryStore {
    pub fn product(&self, upc: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.upc == upc)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order_lines(&self) -> &[OrderLine] {
        &self.order_lines
    }
}

impl Persist<Product> for InMemoryStore {
    fn persist(&mut self, product: &mut Product) -> Result<(), DomainError> {
        if self.product(&product.upc).is_some() {
            return Err(DomainError::InvalidInput(format!(
                "duplicate product code {}",
                product.upc
            )));
        }
        self.products.push(product.clone());
        Ok(())
    }
}

impl Persist<Customer> for InMemoryStore {
    fn persist(&mut self, customer: &mut Customer) -> Result<(), DomainError> {
        customer.id = Some(Uuid::new_v4());
        self.customers.push(customer.clone());
        Ok(())
    }
}

impl Persist<Order> for InMemoryStore {
    fn persist(&mut self, order: &mut Order) -> Result<(), DomainError> {
        if !self.customers.iter().any(|c| c.id == Some(order.customer_id)) {
            return Err(DomainError::NotFound);
        }
        if order.sold_by.chars().count() > SOLD_BY_MAX_LEN {
            return Err(DomainError::InvalidInput(format!(
                "sold_by longer than {} characters",
                SOLD_BY_MAX_LEN
            )));
        }
        order.id = Some(Uuid::new_v4());
        self.orders.push(order.clone());
        Ok(())
    }
}

impl Persist<OrderLine> for InMemoryStore {
    fn persist(&mut self, line: &mut OrderLine) -> Result<(), DomainError> {
        let order_id = line.order_id.ok_or_else(|| {
            DomainError::InvalidInput(format!("order line for {} has no order", line.upc))
        })?;
        if !self.orders.iter().any(|o| o.id == Some(order_id)) || self.product(&line.upc).is_none()
        {
            return Err(DomainError::NotFound);
        }
        line.id = Some(Uuid::new_v4());
        self.order_lines.push(line.clone());
        Ok(())
    }
}

impl ProductCatalog for InMemoryStore {
    fn find_product(&mut self, upc: &str) -> Result<Option<Product>, DomainError> {
        Ok(self.product(upc).cloned())
    }

    fn update_stock(&mut self, product: &Product) -> Result<(), DomainError> {
        let stored = self
            .products
            .iter_mut()
            .find(|p| p.upc == product.upc)
            .ok_or(DomainError::NotFound)?;
        stored.units_in_stock = product.units_in_stock;
        Ok(())
    }
}
