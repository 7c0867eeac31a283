use crate::domain::model::{Allocation, BatchRecord};

/// Cost allocation over the batches of a single item.
///
/// Implementations do not check that the batches hold enough units; callers
/// are expected to have rejected under-supplied requests already. If they did
/// not, the shortfall shows up in [`Allocation::unfilled`].
pub trait AllocationStrategy {
    fn label(&self) -> &'static str;

    fn allocate(&self, batches: &[&BatchRecord], quantity: u32) -> Allocation;

    fn total_cost(&self, batches: &[&BatchRecord], quantity: u32) -> f64 {
        self.allocate(batches, quantity).total_cost
    }
}

pub trait SettingsProvider {
    fn inventory_path(&self) -> &str;
    fn currency(&self) -> &str;
    fn pause_on_exit(&self) -> bool;
}
