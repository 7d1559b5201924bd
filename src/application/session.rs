use std::collections::HashSet;
use std::io::{BufRead, Write};

use chrono::{Local, NaiveDateTime};

use crate::domain::order::SOLD_BY_MAX_LEN;
use crate::domain::{Customer, DomainError, Order, OrderLine, Product, Sale, Store};
use crate::errors::AppError;

use super::console::Console;
use super::persist::persist_all;
use super::seed::Seed;

/// Counts of what a session wrote to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub products: usize,
    pub customers: usize,
    pub orders: usize,
    pub order_lines: usize,
    pub stock_updates: usize,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// One run of the order-taking wizard against a store.
pub struct Session<R, W> {
    console: Console<R, W>,
    clock: fn() -> NaiveDateTime,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self {
            console,
            clock: local_now,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Seeds the store, takes orders until the user stops, and persists
    /// everything that was sold. The caller owns the transaction.
    pub fn run<S: Store + ?Sized>(
        &mut self,
        store: &mut S,
        seed: Seed,
    ) -> Result<SessionSummary, AppError> {
        let Seed {
            products,
            mut customers,
        } = seed;

        let (mut catalog, new_products) = stock_catalog(store, products)?;
        persist_all(store, &mut customers)?;

        let sales = self.take_orders(&mut catalog, &customers)?;
        let (orders, lines) = record_sales(store, sales)?;

        let sold: HashSet<&str> = lines.iter().map(|l| l.upc.as_str()).collect();
        let mut stock_updates = 0;
        for product in catalog.iter().filter(|p| sold.contains(p.upc.as_str())) {
            log::info!("Updating stock: {}", product);
            store.update_stock(product)?;
            stock_updates += 1;
        }

        Ok(SessionSummary {
            products: new_products,
            customers: customers.len(),
            orders: orders.len(),
            order_lines: lines.len(),
            stock_updates,
        })
    }

    fn take_orders(
        &mut self,
        catalog: &mut [Product],
        customers: &[Customer],
    ) -> Result<Vec<Sale>, AppError> {
        let mut sales = Vec::new();
        if customers.is_empty() {
            self.console.say("There are no customers to take orders for.")?;
            return Ok(sales);
        }
        let customer_names: Vec<String> = customers.iter().map(Customer::full_name).collect();

        loop {
            if !catalog.iter().any(Product::in_stock) {
                self.console.say("Sorry, every product is sold out.")?;
                break;
            }

            self.console.say(format!(
                "Which customer is placing the order? (1 - {})",
                customers.len()
            ))?;
            self.console.menu(&customer_names)?;
            let choice = self.console.read_int_range(1, customers.len() as i32)?;
            let customer = &customers[(choice - 1) as usize];
            let customer_id = customer.id.ok_or_else(|| {
                DomainError::Internal(format!("{} has not been persisted", customer))
            })?;

            self.console
                .say("******Please input information about your order.******")?;
            self.console.blank()?;
            self.console.say("Who is recording this sale?")?;
            let sold_by = self.console.read_text(SOLD_BY_MAX_LEN)?;

            self.console
                .say("Would you like to date this order yourself? (Y/N)")?;
            let order_date = if self.console.read_yes_no()? {
                self.console
                    .say("Please input a valid date in format dd-MM-yyyy HH:mm:ss")?;
                self.console.read_order_date((self.clock)())?
            } else {
                (self.clock)()
            };

            let in_stock: Vec<usize> = catalog
                .iter()
                .enumerate()
                .filter(|(_, p)| p.in_stock())
                .map(|(i, _)| i)
                .collect();
            let product_names: Vec<&str> =
                in_stock.iter().map(|&i| catalog[i].name.as_str()).collect();
            self.console.say(format!(
                "Which product would you like to order? (1 - {})",
                in_stock.len()
            ))?;
            self.console.menu(&product_names)?;
            let pick = self.console.read_int_range(1, in_stock.len() as i32)?;
            let product = &mut catalog[in_stock[(pick - 1) as usize]];
            log::debug!("{} chose {}", customer.full_name(), product.upc);

            self.console.say("How many would you like to order?")?;
            let requested = self.console.read_int_range(1, i32::MAX)?;
            let quantity = product.available_quantity(requested);
            if quantity < requested {
                self.console.say(format!(
                    "We only have {} of {} in stock.",
                    quantity, product.name
                ))?;
            }

            let line = OrderLine::new(
                product.upc.clone(),
                quantity,
                product.unit_list_price.clone(),
            );
            self.console.say(format!(
                "This would be your total: ${}",
                line.total().with_scale(2)
            ))?;
            self.console
                .say("Would you like to continue with this purchase? (Y/N)")?;
            if !self.console.read_yes_no()? {
                log::info!("Purchase of {} x {} abandoned", quantity, product.upc);
                break;
            }

            product.remove_stock(quantity)?;
            sales.push(Sale {
                order: Order::new(customer_id, order_date, sold_by),
                line,
            });

            self.console
                .say("Would you like to place another order? (Y/N)")?;
            if !self.console.read_yes_no()? {
                break;
            }
        }
        Ok(sales)
    }
}

/// Resolves each seed product against the store, reusing stored records and
/// persisting the ones it has never seen. Returns the catalog in seed order
/// and how many products were newly persisted.
fn stock_catalog<S: Store + ?Sized>(
    store: &mut S,
    seed: Vec<Product>,
) -> Result<(Vec<Product>, usize), DomainError> {
    let mut catalog = Vec::with_capacity(seed.len());
    let mut fresh = Vec::new();
    for product in seed {
        match store.find_product(&product.upc)? {
            Some(stored) => {
                log::info!("Using stored product: {}", stored);
                catalog.push(stored);
            }
            None => {
                fresh.push(product.clone());
                catalog.push(product);
            }
        }
    }
    persist_all(store, &mut fresh)?;
    Ok((catalog, fresh.len()))
}

fn record_sales<S: Store + ?Sized>(
    store: &mut S,
    sales: Vec<Sale>,
) -> Result<(Vec<Order>, Vec<OrderLine>), DomainError> {
    let (mut orders, mut lines): (Vec<Order>, Vec<OrderLine>) =
        sales.into_iter().map(|s| (s.order, s.line)).unzip();

    persist_all(store, &mut orders)?;
    for (line, order) in lines.iter_mut().zip(&orders) {
        line.attach_to(order)?;
    }
    persist_all(store, &mut lines)?;
    Ok((orders, lines))
}
