use std::io::Write;

use crate::core::allocation::{Fifo, Lifo};
use crate::core::pricing::{OrderPricing, PriceQuote};
use crate::core::CartLine;
use crate::utils::error::Result;

const RULE_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct RecapLine {
    pub line: CartLine,
    pub fifo: PriceQuote,
    pub lifo: PriceQuote,
}

/// FIFO and LIFO prices of every cart line, plus both grand totals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recap {
    pub lines: Vec<RecapLine>,
    pub total_fifo: f64,
    pub total_lifo: f64,
}

impl Recap {
    pub fn build(pricing: &OrderPricing<'_>, cart: &[CartLine]) -> Self {
        let mut recap = Recap::default();

        for line in cart {
            let fifo = pricing.price(&line.name, line.quantity, &Fifo);
            let lifo = pricing.price(&line.name, line.quantity, &Lifo);

            recap.total_fifo += fifo.cost();
            recap.total_lifo += lifo.cost();
            recap.lines.push(RecapLine {
                line: line.clone(),
                fifo,
                lifo,
            });
        }

        recap
    }

    pub fn write_to<W: Write>(&self, out: &mut W, currency: &str) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(out)?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "ORDER RECAP")?;

        for entry in &self.lines {
            if let PriceQuote::Shortage {
                requested,
                available,
            } = entry.fifo
            {
                writeln!(
                    out,
                    "  ! WARNING: you want {} pcs of '{}', but only {} in stock.",
                    requested, entry.line.name, available
                )?;
            }
            writeln!(
                out,
                "{}x {} | FIFO: {} | LIFO: {}",
                entry.line.quantity,
                entry.line.name,
                with_currency(entry.fifo.cost(), currency),
                with_currency(entry.lifo.cost(), currency)
            )?;
        }

        writeln!(out, "{}", rule)?;
        writeln!(out, "TOTAL (FIFO): {}", with_currency(self.total_fifo, currency))?;
        writeln!(out, "TOTAL (LIFO): {}", with_currency(self.total_lifo, currency))?;
        writeln!(out, "{}", rule)?;
        Ok(())
    }
}

/// Whole amounts print without decimals, anything else with two.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

fn with_currency(amount: f64, currency: &str) -> String {
    if currency.is_empty() {
        format_amount(amount)
    } else {
        format!("{} {}", format_amount(amount), currency)
    }
}
