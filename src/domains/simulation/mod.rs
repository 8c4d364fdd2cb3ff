pub mod frame;
pub mod palette;
pub mod ports;
pub mod session_config;
pub mod state;

pub use frame::*;
pub use palette::*;
pub use ports::*;
pub use session_config::*;
pub use state::*;
