mod budget;
mod category;
mod expense;
mod ledger;
mod money;

pub use budget::*;
pub use category::*;
pub use expense::*;
pub use ledger::*;
pub use money::*;
