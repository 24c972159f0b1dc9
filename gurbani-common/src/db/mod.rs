//! Read-only storage layer over the scripture corpus database

pub mod init;
pub mod models;
pub mod queries;

pub use init::connect_readonly;
pub use models::*;
pub use queries::*;
