//! System orchestration, configuration, startup, and shutdown logic.

pub mod laundry_system;
pub mod logging;
pub mod settings;

pub use laundry_system::*;
pub use logging::*;
pub use settings::*;
