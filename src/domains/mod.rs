pub mod logger;
pub mod simulation;

pub use logger::*;
pub use simulation::*;
