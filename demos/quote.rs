//! Quote Example
//!
//! Prices a rental against a rate card fixture and prints the quote.
//!
//! Use `-b` to set the vehicle's base daily price
//! Use `-s` and `-e` to set the pick-up and return times
//! Use `-r` to load a rate card from `fixtures/rate_cards` by name
//! Use `-m` to also print the vehicle's pricing matrix
//!
//! Set `RUST_LOG=debug` to see which season and bracket were matched.

use std::io;

use anyhow::Result;
use clap::Parser;
use fleetrate::{fixtures::Fixture, quote::Quote, utils::ExampleQuoteArgs};
use tracing_subscriber::EnvFilter;

/// Quote Example
pub fn main() -> Result<()> {
    let args = ExampleQuoteArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let rate_card = Fixture::new().load_rate_card(&args.rate_card)?;

    let result = rate_card.calculate(args.base_price, &args.start, &args.end)?;
    let quote = Quote::from_result(&result, args.base_price, rate_card.currency())?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    quote.write_to(&mut handle)?;

    if args.matrix {
        rate_card.matrix(args.base_price)?.write_to(&mut handle)?;
    }

    Ok(())
}
