//! # Ontology SQL Gateway
//!
//! Translates natural-language requests into SQL with an LLM and runs the
//! result against a relational database.
//!
//! The pipeline: a request plus a schema-mode flag is turned into a
//! dialect-aware prompt (full ontology or flat metadata description), the
//! prompt goes to a chat completions API once, and whatever SQL comes back
//! is executed as-is and rendered as flat text. There is intentionally no
//! SQL validation, no retry, and no post-processing of the model output.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ontology_sql_gateway::{
//!     Dialect, OpenAiClient, PostgresExecutor, QueryPipeline, SchemaCatalog, SqlGenerator,
//! };
//!
//! # async fn run() -> anyhow::Result<()> {
//! let catalog = Arc::new(SchemaCatalog::load(
//!     "resources/ontology.ttl",
//!     "resources/metadata_only.json",
//! )?);
//! let dialect = Dialect::resolve("org.postgresql.Driver");
//! let model = Arc::new(OpenAiClient::new(None, "sk-...".to_string(), None));
//! let executor = Arc::new(PostgresExecutor::connect("host=localhost user=postgres").await?);
//!
//! let pipeline = QueryPipeline::new(SqlGenerator::new(model, catalog, dialect), executor);
//! let answer = pipeline.process("who ordered last week?", true).await?;
//! println!("{}", answer);
//! # Ok(())
//! # }
//! ```

// Internal modules
pub mod config;
pub mod dialect;
pub mod error;
pub mod executor;
pub mod llm;
pub mod pipeline;
pub mod render;
pub mod schema;
pub mod web;

// Public API - Main types users need
pub use config::AppConfig;
pub use dialect::Dialect;
pub use error::{GatewayError, GatewayResult};
pub use executor::{PostgresExecutor, QueryExecutor, ResultRow};
pub use llm::{ChatCompletionModel, GenerationRequest, OpenAiClient, SqlGenerator};
pub use pipeline::{QueryPipeline, NO_QUERY_APOLOGY};
pub use render::render_rows;
pub use schema::{SchemaCatalog, SchemaMode};
