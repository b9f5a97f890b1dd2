// exported modules
pub mod error;
pub mod model;

// client impls
pub mod tresor;

// re-exports
pub use error::*;
pub use model::*;
pub use tresor::{ApiUrls, TresorClient};

// internal modules
mod http;
mod util;
