use serde_json::{json, Value};
use std::sync::LazyLock;

pub static DIRECTORY_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["model_providers", "endpoints"],
        "properties": {
            "model_providers": {
                "type": "object",
                "additionalProperties": { "type": "string", "minLength": 1 }
            },
            "endpoints": {
                "type": "object",
                "additionalProperties": { "type": ["string", "null"] }
            }
        }
    })
});
