pub mod records;
pub mod summary;

pub use records::*;
pub use summary::*;
