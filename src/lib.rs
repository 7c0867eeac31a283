pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{CliConfig, Settings};
pub use crate::core::{
    allocation::{Fifo, Lifo},
    inventory::Inventory,
    pricing::{OrderPricing, PriceQuote},
    recap::Recap,
    session::CheckoutSession,
};
pub use crate::domain::model::{BatchRecord, CartLine};
pub use crate::domain::ports::AllocationStrategy;
pub use crate::utils::error::{CostingError, Result};
