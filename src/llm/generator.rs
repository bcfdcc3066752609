//! SQL generation - one prompt, one LLM call, raw text out

use std::sync::Arc;

use tracing::debug;

use crate::dialect::Dialect;
use crate::error::GatewayResult;
use crate::llm::client::ChatCompletionModel;
use crate::llm::prompt::build_prompt;
use crate::schema::{SchemaCatalog, SchemaMode};

/// One SQL generation request
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    pub natural_language_query: String,
    pub include_full_schema: bool,
}

/// Turns a natural-language request into a raw SQL string via the LLM.
///
/// The response is returned exactly as the model produced it: no trimming,
/// no markdown-fence stripping, no validation. Downstream code decides
/// what to do with empty or malformed output.
pub struct SqlGenerator {
    model: Arc<dyn ChatCompletionModel>,
    catalog: Arc<SchemaCatalog>,
    dialect: Dialect,
}

impl SqlGenerator {
    pub fn new(
        model: Arc<dyn ChatCompletionModel>,
        catalog: Arc<SchemaCatalog>,
        dialect: Dialect,
    ) -> Self {
        Self {
            model,
            catalog,
            dialect,
        }
    }

    pub async fn generate(&self, request: &GenerationRequest) -> GatewayResult<String> {
        let mode = if request.include_full_schema {
            SchemaMode::Ontology
        } else {
            SchemaMode::MetadataOnly
        };
        let prompt = build_prompt(
            &request.natural_language_query,
            self.catalog.description(mode),
            self.dialect,
            request.include_full_schema,
        );

        debug!(prompt_len = prompt.len(), mode = ?mode, "sending generation prompt");
        let response = self.model.complete(&prompt).await?;
        debug!(response_len = response.len(), "received generation response");

        Ok(response)
    }
}
