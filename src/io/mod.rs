mod import;

pub use import::*;
