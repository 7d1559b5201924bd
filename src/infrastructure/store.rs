use diesel::pg::PgConnection;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::{Customer, Order, OrderLine, Persist, Product, ProductCatalog};
use crate::schema::{customers, order_lines, orders, products};

use super::models::{NewCustomerRow, NewOrderLineRow, NewOrderRow, ProductRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        match e {
            diesel::result::Error::NotFound => DomainError::NotFound,
            other => DomainError::Internal(other.to_string()),
        }
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Store ─────────────────────────────────────────────────────────────────────

/// Writes through a borrowed connection. Every call joins whatever
/// transaction the connection is in; committing is the caller's job.
pub struct DieselStore<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> DieselStore<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }
}

impl Persist<Product> for DieselStore<'_> {
    fn persist(&mut self, product: &mut Product) -> Result<(), DomainError> {
        diesel::insert_into(products::table)
            .values(&ProductRow::from(&*product))
            .execute(self.conn)?;
        Ok(())
    }
}

impl Persist<Customer> for DieselStore<'_> {
    fn persist(&mut self, customer: &mut Customer) -> Result<(), DomainError> {
        let id = Uuid::new_v4();
        diesel::insert_into(customers::table)
            .values(&NewCustomerRow::new(id, customer))
            .execute(self.conn)?;
        customer.id = Some(id);
        Ok(())
    }
}

impl Persist<Order> for DieselStore<'_> {
    fn persist(&mut self, order: &mut Order) -> Result<(), DomainError> {
        let id = Uuid::new_v4();
        diesel::insert_into(orders::table)
            .values(&NewOrderRow::new(id, order))
            .execute(self.conn)?;
        order.id = Some(id);
        Ok(())
    }
}

impl Persist<OrderLine> for DieselStore<'_> {
    fn persist(&mut self, line: &mut OrderLine) -> Result<(), DomainError> {
        let order_id = line.order_id.ok_or_else(|| {
            DomainError::InvalidInput(format!("order line for {} has no order", line.upc))
        })?;
        let id = Uuid::new_v4();
        diesel::insert_into(order_lines::table)
            .values(&NewOrderLineRow::new(id, order_id, line))
            .execute(self.conn)?;
        line.id = Some(id);
        Ok(())
    }
}

impl ProductCatalog for DieselStore<'_> {
    fn find_product(&mut self, upc: &str) -> Result<Option<Product>, DomainError> {
        let row = products::table
            .filter(products::upc.eq(upc))
            .select(ProductRow::as_select())
            .first(self.conn)
            .optional()?;
        Ok(row.map(Product::from))
    }

    fn update_stock(&mut self, product: &Product) -> Result<(), DomainError> {
        let updated = diesel::update(products::table.find(&product.upc))
            .set(products::units_in_stock.eq(product.units_in_stock))
            .execute(self.conn)?;
        if updated == 0 {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }
}
