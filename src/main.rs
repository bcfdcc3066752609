use std::sync::Arc;

use anyhow::Result;

use ontology_sql_gateway::web::start_server;
use ontology_sql_gateway::{
    AppConfig, Dialect, OpenAiClient, PostgresExecutor, QueryPipeline, SchemaCatalog, SqlGenerator,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // Startup state: both schema descriptions and the dialect are computed
    // once here and shared read-only for the lifetime of the process.
    let catalog = Arc::new(SchemaCatalog::load(
        &config.ontology_file,
        &config.metadata_only_file,
    )?);
    let dialect = Dialect::resolve(&config.driver_class_name);
    tracing::info!("resolved SQL dialect: {}", dialect);

    let model = Arc::new(OpenAiClient::new(
        config.openai_base_url.clone(),
        config.openai_api_key.clone(),
        config.openai_model.clone(),
    ));
    let executor = Arc::new(PostgresExecutor::connect(&config.database_url).await?);

    let pipeline = QueryPipeline::new(SqlGenerator::new(model, catalog, dialect), executor);

    start_server(pipeline, config.port)
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))?;

    Ok(())
}
