pub mod prompt;
pub mod provider;
pub mod store;

pub use prompt::{Choice, ConfirmationPrompt, PromptError, ScriptedPrompt};
pub use provider::{decide, TrustCache, TrustProvider};
pub use store::{DecisionStore, MemoryStore};
