//! # Kiosk Console Application
//!
//! Runs the demo checkout scenario end to end and prints the results.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Build the demo catalog and customer
//! 3. Fill the cart
//! 4. Run checkout
//! 5. Print the shipment notice (if any) and the receipt
//!
//! On any cart or checkout failure the explanatory message is printed to
//! stderr and the process exits with a non-zero status.
//!
//! ## Usage
//! ```bash
//! cargo run -p kiosk-cli --bin kiosk
//!
//! # Machine-readable receipt
//! cargo run -p kiosk-cli --bin kiosk -- --json
//! ```

use std::env;
use std::process::ExitCode;

use chrono::{Duration, Utc};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use kiosk_core::{checkout, Cart, Catalog, Customer, Money, Product, Weight};

/// Output mode for the checkout results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    /// Human-readable shipment notice + receipt (default).
    Text,
    /// The whole CheckoutSummary as pretty-printed JSON.
    Json,
}

fn main() -> ExitCode {
    init_tracing();

    let mut mode = OutputMode::Text;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" | "-j" => mode = OutputMode::Json,
            "--help" | "-h" => {
                println!("Kiosk Checkout Demo");
                println!();
                println!("Usage: kiosk [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -j, --json    Print the checkout summary as JSON");
                println!("  -h, --help    Show this help message");
                return ExitCode::SUCCESS;
            }
            other => {
                eprintln!("Unknown option: {other}");
                return ExitCode::FAILURE;
            }
        }
    }

    match run(mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The explanatory message goes out before the failure exit
            error!(error = %e, "checkout failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(mode: OutputMode) -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now();
    let tomorrow = now + Duration::days(1);

    // Demo catalog: all four capability combinations
    let mut catalog = Catalog::new();
    catalog.insert(
        Product::new("CHEESE", "Cheese", Money::from_cents(10_000), 5)
            .with_expiry(tomorrow)
            .with_shipping_weight(Weight::from_grams(400)),
    )?;
    catalog.insert(
        Product::new("BISCUITS", "Biscuits", Money::from_cents(15_000), 3).with_expiry(tomorrow),
    )?;
    catalog.insert(
        Product::new("TV", "TV", Money::from_cents(300_000), 2)
            .with_shipping_weight(Weight::from_grams(5000)),
    )?;
    catalog.insert(Product::new(
        "CARD",
        "Scratch Card",
        Money::from_cents(5_000),
        10,
    ))?;
    debug!(products = catalog.len(), "catalog ready");

    let mut customer = Customer::new("Reham", Money::from_cents(100_000));

    let mut cart = Cart::new();
    cart.add(&catalog, "CHEESE", 2)?;
    cart.add(&catalog, "BISCUITS", 1)?;
    cart.add(&catalog, "CARD", 1)?;
    debug!(lines = cart.len(), "cart filled");

    let summary = checkout(&mut catalog, &mut customer, &cart, now)?;
    info!(
        customer = %customer.name,
        total = %summary.receipt.total,
        balance_left = %summary.receipt.balance_left,
        "checkout complete"
    );

    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputMode::Text => {
            if let Some(notice) = &summary.shipment {
                println!("{notice}");
            }
            println!();
            println!("{}", summary.receipt);
        }
    }

    Ok(())
}

/// Initializes tracing with an env filter.
///
/// Default level is INFO; override with RUST_LOG (e.g. RUST_LOG=debug).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
