use serde_json::{Map, Value};

use crate::error::{TagOpsError, TagOpsResult};

/// Parses repeated `key=value` flags into the parameter object passed to
/// the tag-tree query endpoint. Values stay strings; the server does its
/// own coercion.
pub fn parse_query_pairs<'a, I>(pairs: I) -> TagOpsResult<Value>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut params = Map::new();

    for pair in pairs {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            TagOpsError::InvalidInput(format!("Expected key=value, got '{}'", pair))
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(TagOpsError::InvalidInput(format!(
                "Empty key in query pair '{}'",
                pair
            )));
        }

        params.insert(key.to_string(), Value::String(value.to_string()));
    }

    Ok(Value::Object(params))
}
