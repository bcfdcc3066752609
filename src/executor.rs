//! Query execution against PostgreSQL

use async_trait::async_trait;
use serde_json::Value;
use tokio_postgres::types::Type;
use tokio_postgres::{Client, NoTls, Row};
use tracing::{debug, info};

use crate::error::{GatewayError, GatewayResult};

/// One result row: column name → value, in the columns' insertion order.
pub type ResultRow = Vec<(String, Value)>;

/// Executes generated SQL and returns rows as ordered column/value pairs.
///
/// The SQL arrives exactly as the LLM produced it; malformed statements
/// simply fail here and the error is propagated to the caller.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, sql: &str) -> GatewayResult<Vec<ResultRow>>;
}

/// PostgreSQL-backed executor
pub struct PostgresExecutor {
    client: Client,
}

impl PostgresExecutor {
    /// Connect once at startup; the connection task is driven in the
    /// background for the lifetime of the process.
    pub async fn connect(conn_str: &str) -> GatewayResult<Self> {
        let (client, connection) = tokio_postgres::connect(conn_str, NoTls)
            .await
            .map_err(|e| {
                GatewayError::initialization(format!("failed to connect to database: {}", e))
            })?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("PostgreSQL connection error: {}", e);
            }
        });

        Ok(Self { client })
    }
}

#[async_trait]
impl QueryExecutor for PostgresExecutor {
    async fn execute(&self, sql: &str) -> GatewayResult<Vec<ResultRow>> {
        info!("Executing query: {}", sql);

        let rows = self
            .client
            .query(sql, &[])
            .await
            .map_err(|e| GatewayError::execution_with_sql(e.to_string(), sql))?;

        Ok(rows.iter().map(row_to_entries).collect())
    }
}

fn row_to_entries(row: &Row) -> ResultRow {
    row.columns()
        .iter()
        .enumerate()
        .map(|(idx, column)| (column.name().to_string(), column_value(row, idx)))
        .collect()
}

/// Decode one column into a JSON value. Columns of types outside the
/// common scalar set come back as null, which the renderer prints as NULL.
fn column_value(row: &Row, idx: usize) -> Value {
    let column_type = row.columns()[idx].type_();
    if *column_type == Type::BOOL {
        decode(row.try_get::<_, Option<bool>>(idx).map(|v| v.map(Value::from)))
    } else if *column_type == Type::INT2 {
        decode(row.try_get::<_, Option<i16>>(idx).map(|v| v.map(Value::from)))
    } else if *column_type == Type::INT4 {
        decode(row.try_get::<_, Option<i32>>(idx).map(|v| v.map(Value::from)))
    } else if *column_type == Type::INT8 {
        decode(row.try_get::<_, Option<i64>>(idx).map(|v| v.map(Value::from)))
    } else if *column_type == Type::FLOAT4 {
        decode(
            row.try_get::<_, Option<f32>>(idx)
                .map(|v| v.map(|f| Value::from(f64::from(f)))),
        )
    } else if *column_type == Type::FLOAT8 {
        decode(row.try_get::<_, Option<f64>>(idx).map(|v| v.map(Value::from)))
    } else if *column_type == Type::TEXT
        || *column_type == Type::VARCHAR
        || *column_type == Type::BPCHAR
        || *column_type == Type::NAME
    {
        decode(row.try_get::<_, Option<String>>(idx).map(|v| v.map(Value::from)))
    } else {
        debug!(column_type = %column_type, "unsupported column type, rendering as NULL");
        Value::Null
    }
}

fn decode(value: Result<Option<Value>, tokio_postgres::Error>) -> Value {
    match value {
        Ok(Some(v)) => v,
        Ok(None) => Value::Null,
        Err(e) => {
            debug!("failed to decode column value: {}", e);
            Value::Null
        }
    }
}
