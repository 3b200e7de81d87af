pub mod client;
pub mod errors;
pub mod pagination;
pub mod types;

pub use client::TrackerClient;
pub use errors::TrackerError;
pub use pagination::PageCursor;
pub use types::{Artifact, Project, Tracker};
