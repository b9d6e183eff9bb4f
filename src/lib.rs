pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::adapters::{FixtureSource, UpstreamClient};
pub use crate::config::{CliArgs, GatewayConfig, UpstreamConfig};
pub use crate::core::aggregator::FileAggregator;
pub use crate::domain::model::{FileListing, FileResult, Record};
pub use crate::domain::ports::FileSource;
pub use crate::server::{router, AppState};
pub use crate::utils::error::{GatewayError, Result};
