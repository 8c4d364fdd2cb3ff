pub mod console_logger;
pub mod file_logger;
pub mod http_simulation_api;
pub mod interval_scheduler;
pub mod multi_logger;
pub mod noop_logger;
pub mod pixmap_surface;

pub use console_logger::*;
pub use file_logger::*;
pub use http_simulation_api::*;
pub use interval_scheduler::*;
pub use multi_logger::*;
pub use noop_logger::*;
pub use pixmap_surface::*;
