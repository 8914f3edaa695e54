#![warn(clippy::unwrap_used)]

pub mod analysis_rest;
pub mod rest;
pub mod server;
pub mod swagger;
pub mod wizard_rest;

pub use rest::AppState;
pub use server::ApiServer;
pub use swagger::ApiDoc;
