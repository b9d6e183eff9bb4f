// Adapters layer: concrete `FileSource` implementations.

pub mod fixtures;
pub mod http;

pub use fixtures::FixtureSource;
pub use http::UpstreamClient;
