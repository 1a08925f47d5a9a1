//! CLI mode implementations

mod decode;
mod options;
mod table;

pub use decode::run_decode;
pub use options::run_options;
pub use table::run_table;
