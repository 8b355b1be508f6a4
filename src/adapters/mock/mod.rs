//! Mock implementations for testing.
//!
//! These doubles let the browser and the PokeAPI client be exercised without
//! network access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockDataSource`] - Data source with scripted, optionally gated responses
//! - [`RecordingObserver`] - Observer that records notifications in order

pub mod data_source;
pub mod http;
pub mod observer;

pub use data_source::MockDataSource;
pub use http::MockHttpClient;
pub use observer::{ObserverEvent, RecordingObserver};
