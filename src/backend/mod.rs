//! Directory backend module
//!
//! The app consumes the directory purely through [`DirectoryClient`]; the
//! bundled implementation is a fixture-backed stand-in for a real service.

mod mock;
mod traits;

pub use mock::{FixtureDirectory, FIXTURE_PASSWORD};
pub use traits::DirectoryClient;

#[cfg(test)]
pub use traits::MockDirectoryClient;
