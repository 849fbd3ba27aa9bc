//! Process-level server concerns

pub mod shutdown;

pub use shutdown::shutdown_signal;
