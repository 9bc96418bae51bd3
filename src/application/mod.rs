// Application layer - turns validated entries into the rendered table.

pub mod error;
pub mod ledger;

pub use error::*;
pub use ledger::*;
