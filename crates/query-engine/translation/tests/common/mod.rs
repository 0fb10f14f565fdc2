use query_engine_metadata::metadata;
use query_engine_translation::translation;

/// Translate a phrase against the stock sales table and return the SQL text.
pub fn test_translation(phrase: &str) -> Result<String, translation::error::Error> {
    let metadata = metadata::Metadata::sales_table();
    let plan = translation::query::translate(&metadata, phrase)?;
    Ok(plan.query_sql().sql)
}
