pub mod application;
pub mod cli;
pub mod domain;
pub mod io;

pub use application::format;
pub use domain::*;
