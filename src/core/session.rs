use std::io::{BufRead, Write};

use crate::core::inventory::Inventory;
use crate::core::pricing::OrderPricing;
use crate::core::recap::Recap;
use crate::core::shell::Shell;
use crate::core::SettingsProvider;
use crate::utils::error::Result;

/// One interactive run: collect the cart, then compare FIFO and LIFO for every line.
pub struct CheckoutSession<'a, S: SettingsProvider> {
    inventory: &'a Inventory,
    settings: &'a S,
}

impl<'a, S: SettingsProvider> CheckoutSession<'a, S> {
    pub fn new(inventory: &'a Inventory, settings: &'a S) -> Self {
        Self {
            inventory,
            settings,
        }
    }

    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Recap> {
        writeln!(output, "--- Welcome to the stock costing calculator ---")?;

        let items = self.inventory.distinct_names();
        tracing::info!("Offering {} items", items.len());

        let cart = Shell::new(&items, &mut *input, &mut *output).run()?;

        let pricing = OrderPricing::new(self.inventory);
        let recap = Recap::build(&pricing, &cart);
        recap.write_to(output, self.settings.currency())?;
        tracing::info!(
            "Recap for {} lines: FIFO {} / LIFO {}",
            recap.lines.len(),
            recap.total_fifo,
            recap.total_lifo
        );

        if self.settings.pause_on_exit() {
            write!(output, "Press Enter to exit...")?;
            output.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
        }

        Ok(recap)
    }
}
