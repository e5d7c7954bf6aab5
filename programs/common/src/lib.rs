pub mod types;
pub mod records;

pub use types::*;
pub use records::*;
