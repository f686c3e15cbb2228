pub mod application;
pub mod cli;
pub mod domain;

pub use application::TrackerService;
pub use domain::*;
