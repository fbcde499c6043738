//! Pricing Matrix
//!
//! Season by duration grid of daily and total prices for one vehicle, as shown
//! on a pricing page. Each duration column is sampled at its representative
//! day count.

use std::io;

use rust_decimal::Decimal;
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    durations::{RentalDuration, average_days_for_duration},
    multiplier::Multiplier,
    pricing::{PricingError, compose},
    seasons::Season,
};

/// Row name used for dates outside every season.
pub const STANDARD_ROW: &str = "Standard";

/// Errors that can occur when rendering a matrix.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// Writing the table failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A duration bracket column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixColumn {
    /// Bracket display name
    pub name: String,

    /// Representative day count
    pub days: u32,

    /// Bracket multiplier
    pub multiplier: Multiplier,

    /// Bracket display label
    pub discount_label: Option<String>,
}

/// Prices at one season and duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixCell {
    /// Daily price
    pub daily_price: Decimal,

    /// Total price for the column's representative day count
    pub total_price: Decimal,
}

/// A season row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRow {
    /// Season display name, or [`STANDARD_ROW`]
    pub name: String,

    /// Season multiplier
    pub multiplier: Multiplier,

    /// Season display label
    pub discount_label: Option<String>,

    /// One cell per column
    pub cells: SmallVec<[MatrixCell; 8]>,
}

/// Season by duration price grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingMatrix {
    base_price: Decimal,
    columns: Vec<MatrixColumn>,
    rows: Vec<MatrixRow>,
}

impl PricingMatrix {
    /// Build the matrix for `base_price`.
    ///
    /// The first row is [`STANDARD_ROW`] with no season multiplier, followed by
    /// one row per season in input order. Columns are ordered by ascending
    /// minimum days; each uses its own bracket's multiplier.
    ///
    /// # Errors
    ///
    /// - [`PricingError::Overflow`]: a price does not fit in a [`Decimal`].
    pub fn build(
        base_price: Decimal,
        seasons: &[Season],
        durations: &[RentalDuration],
    ) -> Result<Self, PricingError> {
        let mut sorted: Vec<&RentalDuration> = durations.iter().collect();
        sorted.sort_by_key(|duration| duration.min_days);

        let columns: Vec<MatrixColumn> = sorted
            .into_iter()
            .map(|duration| MatrixColumn {
                name: duration.name.clone(),
                days: average_days_for_duration(duration),
                multiplier: duration.multiplier,
                discount_label: duration.discount_label.clone(),
            })
            .collect();

        let standard = (STANDARD_ROW.to_string(), Multiplier::IDENTITY, None);

        let rows = std::iter::once(standard)
            .chain(seasons.iter().map(|season| {
                (
                    season.name.clone(),
                    season.multiplier,
                    season.discount_label.clone(),
                )
            }))
            .map(|(name, multiplier, discount_label)| {
                let cells = columns
                    .iter()
                    .map(|column| {
                        let price = compose(
                            base_price,
                            multiplier,
                            i64::from(column.days),
                            column.multiplier,
                        )?;

                        Ok::<_, PricingError>(MatrixCell {
                            daily_price: price.daily_price,
                            total_price: price.total_price,
                        })
                    })
                    .collect::<Result<SmallVec<_>, PricingError>>()?;

                Ok::<_, PricingError>(MatrixRow {
                    name,
                    multiplier,
                    discount_label,
                    cells,
                })
            })
            .collect::<Result<Vec<_>, PricingError>>()?;

        Ok(Self {
            base_price,
            columns,
            rows,
        })
    }

    /// Base daily price the matrix was built for
    pub fn base_price(&self) -> Decimal {
        self.base_price
    }

    /// Duration columns
    pub fn columns(&self) -> &[MatrixColumn] {
        &self.columns
    }

    /// Season rows, starting with [`STANDARD_ROW`]
    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    /// Cell at `row`, `column`
    pub fn cell(&self, row: usize, column: usize) -> Option<&MatrixCell> {
        self.rows.get(row)?.cells.get(column)
    }

    /// Writes the matrix as a table.
    ///
    /// # Errors
    ///
    /// Returns a [`MatrixError`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), MatrixError> {
        let mut builder = Builder::default();

        let header = std::iter::once("Season".to_string()).chain(self.columns.iter().map(|column| {
            let label = label_or_discount(column.discount_label.as_deref(), column.multiplier);

            format!("{}\n{} days {label}", column.name, column.days)
        }));

        builder.push_record(header);

        for row in &self.rows {
            let name = if row.multiplier == Multiplier::IDENTITY && row.discount_label.is_none() {
                row.name.clone()
            } else {
                let label = label_or_discount(row.discount_label.as_deref(), row.multiplier);

                format!("{}\n{label}", row.name)
            };

            let cells = row.cells.iter().map(|cell| {
                format!(
                    "{:.2} / day\n{:.2} total",
                    cell.daily_price, cell.total_price
                )
            });

            builder.push_record(std::iter::once(name).chain(cells));
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(1..), Alignment::right());

        writeln!(out, "{table}")?;

        Ok(())
    }
}

/// The configured label, or the discount implied by the multiplier.
fn label_or_discount(label: Option<&str>, multiplier: Multiplier) -> String {
    label.map_or_else(
        || {
            let points = (multiplier.discount() * Decimal::ONE_HUNDRED).round_dp(2);

            if points.is_zero() {
                "(±0%)".to_string()
            } else if points.is_sign_negative() {
                format!("(+{}%)", points.abs().normalize())
            } else {
                format!("(-{}%)", points.normalize())
            }
        },
        |label| format!("({label})"),
    )
}
