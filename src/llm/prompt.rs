//! Prompt construction for SQL generation
//!
//! Prompts are pure functions of (request, schema description, dialect,
//! mode). The instruction fragments are literal constants so generated
//! prompts stay byte-for-byte reproducible in tests.

use crate::dialect::Dialect;

/// H2 lacks the MySQL-style DATE_SUB function, so the model is steered
/// towards DATEADD for date arithmetic.
pub const DATE_ARITHMETIC_RULE: &str =
    "For H2 database, use DATEADD function instead of DATE_SUB for date arithmetic.";

/// Case-insensitivity rule as phrased against the ontology's
/// :caseInsensitiveField subproperty convention.
pub const ONTOLOGY_CASE_INSENSITIVITY_RULE: &str =
    "For non-case-sensitive fields (subproperties of :caseInsensitiveField), use the LOWER function in the WHERE condition to ensure case-insensitive comparison.";

/// Case-insensitivity rule as phrased against the metadata listing's
/// boolean field.
pub const METADATA_CASE_INSENSITIVITY_RULE: &str =
    "For non-case-sensitive fields (where \"caseSensitive\": false), use the LOWER function in the WHERE condition to ensure case-insensitive comparison.";

/// Output-format constraint: SQL only, no prose.
pub const SQL_ONLY_RULE: &str =
    "Please provide only the SQL query without any additional explanation.";

/// Escape clause so the model states that it cannot answer instead of
/// fabricating SQL.
pub const INSUFFICIENT_INFORMATION_RULE: &str =
    "If you cannot generate a correct SQL query due to lack of information, state that explicitly.";

/// Build the generation prompt for a request.
///
/// `include_full_schema` selects between the two prompt shapes: the full
/// ontology with its annotation conventions explained, or the flat
/// metadata listing. The instruction block is present in both shapes.
pub fn build_prompt(
    request: &str,
    schema_description: &str,
    dialect: Dialect,
    include_full_schema: bool,
) -> String {
    if include_full_schema {
        build_ontology_prompt(request, schema_description, dialect)
    } else {
        build_metadata_only_prompt(request, schema_description, dialect)
    }
}

fn build_ontology_prompt(request: &str, ontology: &str, dialect: Dialect) -> String {
    format!(
        "Given the following ontology in OWL Turtle syntax:\n\n{ontology}\n\n\
         Note the following custom annotations:\n\
         - meta:tableName specifies the database table name for a class\n\
         - meta:columnName specifies the database column name for a property\n\
         - meta:primaryKey indicates if a property is part of the primary key\n\n\
         Generate an SQL query for the following request:\n{request}\n\n\
         The target database is {dialect}. Please ensure the SQL is compatible with this database.\n\
         {DATE_ARITHMETIC_RULE}\n\
         {ONTOLOGY_CASE_INSENSITIVITY_RULE}\n\
         Use the table and column names specified in the meta:tableName and meta:columnName annotations.\n\
         {SQL_ONLY_RULE}\n\
         {INSUFFICIENT_INFORMATION_RULE}"
    )
}

fn build_metadata_only_prompt(request: &str, metadata: &str, dialect: Dialect) -> String {
    format!(
        "Given the following database metadata:\n\n{metadata}\n\n\
         Generate an SQL query for the following request:\n{request}\n\n\
         The target database is {dialect}. Please ensure the SQL is compatible with this database.\n\
         {DATE_ARITHMETIC_RULE}\n\
         {METADATA_CASE_INSENSITIVITY_RULE}\n\
         {SQL_ONLY_RULE}\n\
         {INSUFFICIENT_INFORMATION_RULE}"
    )
}
