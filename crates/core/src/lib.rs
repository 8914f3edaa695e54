pub mod campaign;
pub mod config;
pub mod error;
pub mod performance;
pub mod wizard;

pub use config::AppConfig;
pub use error::{CampaignError, CampaignResult};
