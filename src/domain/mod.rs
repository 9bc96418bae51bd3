mod entry;
mod locale;
mod money;
mod row;

pub use entry::*;
pub use locale::*;
pub use money::*;
pub use row::*;
