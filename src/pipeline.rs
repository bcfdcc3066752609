//! Top-level request pipeline: generate SQL, execute it, render rows

use std::sync::Arc;

use tracing::info;

use crate::error::GatewayResult;
use crate::executor::QueryExecutor;
use crate::llm::{GenerationRequest, SqlGenerator};
use crate::render::render_rows;

/// Returned instead of a result when the model produced no SQL at all.
pub const NO_QUERY_APOLOGY: &str = "I'm sorry, I couldn't generate a query for that request.";

/// Drives one request end to end.
///
/// There is no validation, sanitization, or dry run between generation
/// and execution: the generated SQL is handed to the executor as-is.
pub struct QueryPipeline {
    generator: SqlGenerator,
    executor: Arc<dyn QueryExecutor>,
}

impl QueryPipeline {
    pub fn new(generator: SqlGenerator, executor: Arc<dyn QueryExecutor>) -> Self {
        Self {
            generator,
            executor,
        }
    }

    pub async fn process(
        &self,
        natural_language_query: &str,
        include_full_schema: bool,
    ) -> GatewayResult<String> {
        let request = GenerationRequest {
            natural_language_query: natural_language_query.to_string(),
            include_full_schema,
        };

        let sql = self.generator.generate(&request).await?;
        if sql.is_empty() {
            return Ok(NO_QUERY_APOLOGY.to_string());
        }
        info!("Generated SQL query: {}", sql);

        let rows = self.executor.execute(&sql).await?;
        Ok(render_rows(&rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;
    use crate::error::GatewayError;
    use crate::executor::ResultRow;
    use crate::llm::ChatCompletionModel;
    use crate::schema::SchemaCatalog;
    use async_trait::async_trait;
    use serde_json::json;
    use std::io::Write;
    use std::sync::Mutex;

    struct CannedModel {
        reply: String,
    }

    #[async_trait]
    impl ChatCompletionModel for CannedModel {
        async fn complete(&self, _prompt: &str) -> GatewayResult<String> {
            Ok(self.reply.clone())
        }
    }

    struct CannedExecutor {
        rows: Vec<ResultRow>,
        executed: Mutex<Vec<String>>,
    }

    impl CannedExecutor {
        fn new(rows: Vec<ResultRow>) -> Self {
            Self {
                rows,
                executed: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl QueryExecutor for CannedExecutor {
        async fn execute(&self, sql: &str) -> GatewayResult<Vec<ResultRow>> {
            self.executed.lock().unwrap().push(sql.to_string());
            Ok(self.rows.clone())
        }
    }

    struct FailingExecutor;

    #[async_trait]
    impl QueryExecutor for FailingExecutor {
        async fn execute(&self, sql: &str) -> GatewayResult<Vec<ResultRow>> {
            Err(GatewayError::execution_with_sql("syntax error", sql))
        }
    }

    fn catalog() -> Arc<SchemaCatalog> {
        let dir = tempfile::tempdir().unwrap();
        let ontology_path = dir.path().join("ontology.ttl");
        let metadata_path = dir.path().join("metadata.json");
        write!(std::fs::File::create(&ontology_path).unwrap(), "ontology").unwrap();
        write!(std::fs::File::create(&metadata_path).unwrap(), "metadata").unwrap();
        Arc::new(SchemaCatalog::load(&ontology_path, &metadata_path).unwrap())
    }

    fn pipeline(reply: &str, executor: Arc<dyn QueryExecutor>) -> QueryPipeline {
        let generator = SqlGenerator::new(
            Arc::new(CannedModel {
                reply: reply.to_string(),
            }),
            catalog(),
            Dialect::PostgreSql,
        );
        QueryPipeline::new(generator, executor)
    }

    #[tokio::test]
    async fn test_process_renders_rows() {
        let executor = Arc::new(CannedExecutor::new(vec![vec![("1".to_string(), json!(1))]]));
        let result = pipeline("SELECT 1", executor.clone())
            .process("give me one", true)
            .await
            .unwrap();

        assert_eq!(result, "1: 1, \n");
        assert_eq!(executor.executed.lock().unwrap().as_slice(), ["SELECT 1"]);
    }

    #[tokio::test]
    async fn test_empty_generation_returns_apology_without_executing() {
        let executor = Arc::new(CannedExecutor::new(vec![]));
        let result = pipeline("", executor.clone())
            .process("impossible request", false)
            .await
            .unwrap();

        assert_eq!(result, NO_QUERY_APOLOGY);
        assert!(executor.executed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sql_is_dispatched_unmodified() {
        // Whatever the model answered goes to the executor untouched,
        // markdown fences included.
        let raw = "```sql\nSELECT 1\n```";
        let executor = Arc::new(CannedExecutor::new(vec![]));
        pipeline(raw, executor.clone())
            .process("anything", true)
            .await
            .unwrap();

        assert_eq!(executor.executed.lock().unwrap().as_slice(), [raw]);
    }

    #[tokio::test]
    async fn test_execution_failure_propagates() {
        let result = pipeline("SELECT oops", Arc::new(FailingExecutor))
            .process("anything", false)
            .await;

        assert!(matches!(result, Err(GatewayError::Execution { .. })));
    }

    #[tokio::test]
    async fn test_empty_result_set_renders_empty_string() {
        let executor = Arc::new(CannedExecutor::new(vec![]));
        let result = pipeline("SELECT 1 WHERE false", executor)
            .process("anything", true)
            .await
            .unwrap();

        assert_eq!(result, "");
    }
}
