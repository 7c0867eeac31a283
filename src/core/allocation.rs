use crate::core::{Allocation, AllocationStrategy, BatchRecord, BatchTake};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Oldest batch first.
    Ascending,
    /// Newest batch first.
    Descending,
}

/// Walks the batches in acquisition-date order and takes units until `quantity` is covered.
///
/// The sort is stable, so batches acquired on the same day are consumed in input order.
pub fn allocate_in_order(batches: &[&BatchRecord], quantity: u32, direction: SortDirection) -> Allocation {
    let mut ordered: Vec<&BatchRecord> = batches.to_vec();
    match direction {
        SortDirection::Ascending => ordered.sort_by_key(|b| b.acquired_on()),
        SortDirection::Descending => ordered.sort_by(|a, b| b.acquired_on().cmp(&a.acquired_on())),
    }

    let mut allocation = Allocation::default();
    let mut remaining = quantity;

    for batch in ordered {
        if remaining == 0 {
            break;
        }

        let units = batch.quantity().min(remaining);
        if units == 0 {
            continue;
        }

        let take = BatchTake {
            acquired_on: batch.acquired_on(),
            unit_price: batch.unit_price(),
            units,
        };
        allocation.total_cost += take.cost();
        allocation.takes.push(take);
        remaining -= units;
    }

    allocation.unfilled = remaining;
    allocation
}

/// First in, first out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fifo;

/// Last in, first out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lifo;

impl AllocationStrategy for Fifo {
    fn label(&self) -> &'static str {
        "FIFO"
    }

    fn allocate(&self, batches: &[&BatchRecord], quantity: u32) -> Allocation {
        allocate_in_order(batches, quantity, SortDirection::Ascending)
    }
}

impl AllocationStrategy for Lifo {
    fn label(&self) -> &'static str {
        "LIFO"
    }

    fn allocate(&self, batches: &[&BatchRecord], quantity: u32) -> Allocation {
        allocate_in_order(batches, quantity, SortDirection::Descending)
    }
}
