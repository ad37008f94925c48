//! Command implementations for OxiCRC CLI.

pub mod compute;
pub mod list;
pub mod verify;

pub use compute::cmd_compute;
pub use list::cmd_list;
pub use verify::cmd_verify;
