//! AI agents for the campaign wizard: prompt construction, completion
//! clients and structural parsing of generated strategies and content ideas.

pub mod completion;
pub mod content;
pub mod prompts;
pub mod strategy;

pub use completion::{AzureOpenAiClient, CompletionClient, CompletionRequest, StaticCompletionClient};
pub use content::ContentIdeaGenerator;
pub use strategy::StrategyGenerator;
