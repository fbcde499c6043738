//! Utils

use clap::Parser;
use jiff::Zoned;
use rust_decimal::Decimal;

/// Arguments for the quote example
#[derive(Debug, Parser)]
pub struct ExampleQuoteArgs {
    /// Base daily price of the vehicle, in major currency units
    #[clap(short, long)]
    pub base_price: Decimal,

    /// Pick-up time, e.g. `2024-07-01T09:00[Europe/Lisbon]`
    #[clap(short, long)]
    pub start: Zoned,

    /// Return time, e.g. `2024-07-08T09:00[Europe/Lisbon]`
    #[clap(short, long)]
    pub end: Zoned,

    /// Rate card fixture to price against
    #[clap(short, long, default_value = "standard")]
    pub rate_card: String,

    /// Also print the pricing matrix for the vehicle
    #[clap(short, long)]
    pub matrix: bool,
}
