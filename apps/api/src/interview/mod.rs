// Interview Q&A generation: CV text + job metadata → model → stored items.
// All model calls go through llm_client::ChatModel.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod store;
#[cfg(test)]
pub(crate) mod test_support;
