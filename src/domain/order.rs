use std::fmt;

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use uuid::Uuid;

use super::errors::DomainError;

/// Longest `sold_by` the orders table accepts.
pub const SOLD_BY_MAX_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Option<Uuid>,
    pub customer_id: Uuid,
    pub order_date: NaiveDateTime,
    /// Who recorded the sale.
    pub sold_by: String,
}

impl Order {
    pub fn new(customer_id: Uuid, order_date: NaiveDateTime, sold_by: impl Into<String>) -> Self {
        Self {
            id: None,
            customer_id,
            order_date,
            sold_by: sold_by.into(),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.map(|id| id.to_string());
        write!(
            f,
            "Order {{id: {}, customer: {}, date: {}, sold_by: {}}}",
            id.as_deref().unwrap_or("<unassigned>"),
            self.customer_id,
            self.order_date,
            self.sold_by
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub id: Option<Uuid>,
    /// Set once the owning order has been persisted.
    pub order_id: Option<Uuid>,
    pub upc: String,
    pub quantity: i32,
    pub unit_sale_price: BigDecimal,
}

impl OrderLine {
    pub fn new(upc: impl Into<String>, quantity: i32, unit_sale_price: BigDecimal) -> Self {
        Self {
            id: None,
            order_id: None,
            upc: upc.into(),
            quantity,
            unit_sale_price,
        }
    }

    /// Points this line at `order`, which must already carry its id.
    pub fn attach_to(&mut self, order: &Order) -> Result<(), DomainError> {
        let order_id = order.id.ok_or_else(|| {
            DomainError::Internal(format!(
                "order line for {} attached to unpersisted order",
                self.upc
            ))
        })?;
        self.order_id = Some(order_id);
        Ok(())
    }

    pub fn total(&self) -> BigDecimal {
        &self.unit_sale_price * BigDecimal::from(self.quantity)
    }
}

impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.map(|id| id.to_string());
        let order_id = self.order_id.map(|id| id.to_string());
        write!(
            f,
            "OrderLine {{id: {}, order: {}, upc: {}, quantity: {}, unit_sale_price: {}}}",
            id.as_deref().unwrap_or("<unassigned>"),
            order_id.as_deref().unwrap_or("<unassigned>"),
            self.upc,
            self.quantity,
            self.unit_sale_price
        )
    }
}

/// A confirmed purchase: one order together with its line.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub order: Order,
    pub line: OrderLine,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn order() -> Order {
        let date = NaiveDate::from_ymd_opt(2021, 3, 14)
            .and_then(|d| d.and_hms_opt(9, 26, 53))
            .expect("valid date");
        Order::new(Uuid::new_v4(), date, "Dave")
    }

    #[test]
    fn attach_to_copies_persisted_order_id() {
        let mut order = order();
        let id = Uuid::new_v4();
        order.id = Some(id);
        let mut line = OrderLine::new("076174517163", 2, BigDecimal::from(10));

        line.attach_to(&order).expect("attach failed");

        assert_eq!(line.order_id, Some(id));
    }

    #[test]
    fn attach_to_rejects_unpersisted_order() {
        let mut line = OrderLine::new("076174517163", 2, BigDecimal::from(10));
        assert!(matches!(
            line.attach_to(&order()),
            Err(DomainError::Internal(_))
        ));
        assert!(line.order_id.is_none());
    }

    #[test]
    fn line_total_uses_sale_price() {
        let line = OrderLine::new(
            "012345678910",
            3,
            BigDecimal::from_str("29.98").expect("valid decimal"),
        );
        assert_eq!(line.total(), BigDecimal::from_str("89.94").expect("valid decimal"));
    }
}
