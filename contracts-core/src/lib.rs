mod error;
mod records;
mod report;
mod repository;
mod storage;

pub use error::*;
pub use records::*;
pub use report::*;
pub use repository::*;
