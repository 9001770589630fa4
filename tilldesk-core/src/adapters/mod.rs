//! Adapters - concrete implementations of the ports

pub mod http;
pub mod mock;
pub mod token_file;

pub use http::HttpBackend;
pub use mock::{MockBackend, MockConfig, MOCK_TOKEN};
pub use token_file::TokenFile;
