use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Customer, Order, OrderLine, Product};
use crate::schema::{customers, order_lines, orders, products};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Insertable)]
#[diesel(table_name = products)]
#[diesel(primary_key(upc))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub upc: String,
    pub prod_name: String,
    pub mfgr: String,
    pub model: String,
    pub unit_list_price: BigDecimal,
    pub units_in_stock: i32,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            upc: p.upc.clone(),
            prod_name: p.name.clone(),
            mfgr: p.manufacturer.clone(),
            model: p.style.clone(),
            unit_list_price: p.unit_list_price.clone(),
            units_in_stock: p.units_in_stock,
        }
    }
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product::new(
            row.upc,
            row.prod_name,
            row.mfgr,
            row.model,
            row.unit_list_price,
            row.units_in_stock,
        )
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = customers)]
pub struct NewCustomerRow<'a> {
    pub id: Uuid,
    pub last_name: &'a str,
    pub first_name: &'a str,
    pub street: &'a str,
    pub zip: &'a str,
    pub phone: &'a str,
}

impl<'a> NewCustomerRow<'a> {
    pub fn new(id: Uuid, c: &'a Customer) -> Self {
        Self {
            id,
            last_name: &c.last_name,
            first_name: &c.first_name,
            street: &c.street,
            zip: &c.zip,
            phone: &c.phone,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub order_date: NaiveDateTime,
    pub sold_by: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow<'a> {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub order_date: NaiveDateTime,
    pub sold_by: &'a str,
}

impl<'a> NewOrderRow<'a> {
    pub fn new(id: Uuid, o: &'a Order) -> Self {
        Self {
            id,
            customer_id: o.customer_id,
            order_date: o.order_date,
            sold_by: &o.sold_by,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = order_lines)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderLineRow {
    pub id: Uuid,
    pub order_id: Uuid,
    pub upc: String,
    pub quantity: i32,
    pub unit_sale_price: BigDecimal,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_lines)]
pub struct NewOrderLineRow<'a> {
    pub id: Uuid,
    pub order_id: Uuid,
    pub upc: &'a str,
    pub quantity: i32,
    pub unit_sale_price: BigDecimal,
}

impl<'a> NewOrderLineRow<'a> {
    pub fn new(id: Uuid, order_id: Uuid, l: &'a OrderLine) -> Self {
        Self {
            id,
            order_id,
            upc: &l.upc,
            quantity: l.quantity,
            unit_sale_price: l.unit_sale_price.clone(),
        }
    }
}
