pub mod log;
pub mod macros;
