pub mod allocation;
pub mod inventory;
pub mod pricing;
pub mod recap;
pub mod session;
pub mod shell;

pub use crate::domain::model::{Allocation, BatchRecord, BatchRecordDto, BatchTake, CartLine};
pub use crate::domain::ports::{AllocationStrategy, SettingsProvider};
pub use crate::utils::error::Result;
