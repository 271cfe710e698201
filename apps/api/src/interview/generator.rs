//! Interview generation pipeline: prompt → model call → normalize → persist.

use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::interview::models::JobDetails;
use crate::interview::prompts::build_interview_prompt;
use crate::interview::store::ResultStore;
use crate::llm_client::output::parse_model_output;
use crate::llm_client::{ChatModel, ChatPrompt};

/// Sends a rendered prompt and parses the completion as JSON.
pub async fn generate_items(llm: &dyn ChatModel, prompt: &ChatPrompt) -> Result<Value, AppError> {
    let raw = llm.complete(prompt).await?;
    debug!("LLM output: {raw}");
    parse_model_output(&raw)
}

/// Full mixed-type pipeline for a CV whose text is already known.
/// Exactly one record is stored per successful call.
pub async fn generate_and_store(
    llm: &dyn ChatModel,
    store: &dyn ResultStore,
    user_id: &str,
    cv_text: &str,
    job: &JobDetails,
) -> Result<Value, AppError> {
    let prompt = build_interview_prompt(cv_text, job);
    let items = generate_items(llm, &prompt).await?;

    store.insert(user_id, &items).await?;
    info!(
        "Generated {} interview items for user {user_id}",
        items.as_array().map_or(0, Vec::len)
    );

    Ok(items)
}
