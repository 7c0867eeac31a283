use crate::core::inventory::Inventory;
use crate::core::{Allocation, AllocationStrategy};

/// Outcome of pricing one cart line under one strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceQuote {
    Priced { cost: f64, allocation: Allocation },
    Shortage { requested: u32, available: u64 },
}

impl PriceQuote {
    /// Cost of the line; a shortage counts as zero.
    pub fn cost(&self) -> f64 {
        match self {
            PriceQuote::Priced { cost, .. } => *cost,
            PriceQuote::Shortage { .. } => 0.0,
        }
    }

    pub fn is_shortage(&self) -> bool {
        matches!(self, PriceQuote::Shortage { .. })
    }
}

pub struct OrderPricing<'a> {
    inventory: &'a Inventory,
}

impl<'a> OrderPricing<'a> {
    pub fn new(inventory: &'a Inventory) -> Self {
        Self { inventory }
    }

    /// Prices `quantity` units of `name`. Requests above the stock on hand are
    /// rejected here so the strategy never sees them.
    pub fn price(&self, name: &str, quantity: u32, strategy: &dyn AllocationStrategy) -> PriceQuote {
        let batches = self.inventory.find_by_name(name);
        let available: u64 = batches.iter().map(|b| u64::from(b.quantity())).sum();

        if available < u64::from(quantity) {
            tracing::warn!(
                "Shortage for '{}': requested {}, available {}",
                name,
                quantity,
                available
            );
            return PriceQuote::Shortage {
                requested: quantity,
                available,
            };
        }

        let allocation = strategy.allocate(&batches, quantity);
        tracing::debug!(
            "{} priced {}x '{}' at {} across {} batches",
            strategy.label(),
            quantity,
            name,
            allocation.total_cost,
            allocation.takes.len()
        );

        PriceQuote::Priced {
            cost: allocation.total_cost,
            allocation,
        }
    }
}
