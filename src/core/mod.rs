pub mod aggregator;
pub mod parser;
pub mod retriever;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{FileListing, FileResult, Record};
pub use crate::domain::ports::FileSource;
pub use crate::utils::error::Result;
