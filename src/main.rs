use std::io;
use std::process::ExitCode;

use customer_orders::application::Console;
use customer_orders::errors::AppError;
use customer_orders::{create_pool, run, run_dry, run_migrations, Config};
use dotenvy::dotenv;

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn try_main() -> Result<(), AppError> {
    let config = Config::from_env()?;
    let console = Console::new(io::stdin().lock(), io::stdout().lock());

    let summary = match config.database_url.as_deref() {
        Some(url) if !config.dry_run => {
            let pool = create_pool(url)?;
            if config.run_migrations {
                run_migrations(&pool)?;
            }
            run(&pool, console)?
        }
        _ => {
            log::info!("Dry run: nothing will be written to the database");
            run_dry(console)?.0
        }
    };

    log::info!(
        "Session complete: {} new products, {} customers, {} orders, {} order lines, {} stock updates",
        summary.products,
        summary.customers,
        summary.orders,
        summary.order_lines,
        summary.stock_updates
    );
    Ok(())
}
