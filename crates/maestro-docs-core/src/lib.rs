pub mod config;
pub mod doc;
pub mod error;
pub mod guide;
pub mod io;
pub mod launch;
pub mod render;

pub use error::{DocsError, Result};
