//! Compilation driver for identifier lowering
//!
//! Ties binding and lowering together for one compilation unit and owns the
//! user-facing configuration.

pub mod config;
pub mod error;
pub mod unit;

pub use config::CompilerOptions;
pub use error::CompileError;
pub use unit::{UnitOutput, compile_unit};
