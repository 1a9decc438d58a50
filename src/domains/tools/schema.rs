//! Declarative input schemas for tools.
//!
//! Every tool describes its arguments with an [`InputSchema`]: an ordered list
//! of [`FieldSpec`]s. The registry runs [`InputSchema::validate`] on the raw
//! arguments before the handler sees them, and [`InputSchema::to_json_schema`]
//! renders the same descriptor for `tools/list`.

use std::sync::Arc;

use rmcp::model::JsonObject;
use serde_json::{Value, json};

use super::error::ToolError;

/// JSON type accepted by a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Integer,
    Boolean,
}

impl FieldKind {
    /// JSON Schema type name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

/// Description of a single tool argument.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: Option<Value>,
    pub allowed: Option<&'static [&'static str]>,
    pub description: &'static str,
}

impl FieldSpec {
    /// A required string field.
    pub fn required_string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::String,
            required: true,
            default: None,
            allowed: None,
            description,
        }
    }

    /// An optional string field restricted to `allowed`, defaulting to `default`.
    pub fn string_enum(
        name: &'static str,
        allowed: &'static [&'static str],
        default: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind: FieldKind::String,
            required: false,
            default: Some(Value::String(default.to_string())),
            allowed: Some(allowed),
            description,
        }
    }

    fn check(&self, value: &Value) -> Result<(), ToolError> {
        if !self.kind.accepts(value) {
            return Err(ToolError::validation(self.name, self.kind.as_str()));
        }

        if let Some(allowed) = self.allowed {
            let matches = value
                .as_str()
                .is_some_and(|s| allowed.iter().any(|candidate| *candidate == s));
            if !matches {
                return Err(ToolError::validation(
                    self.name,
                    format!("one of [{}]", allowed.join(", ")),
                ));
            }
        }

        Ok(())
    }
}

/// Ordered set of field descriptors for one tool.
#[derive(Debug, Clone, Default)]
pub struct InputSchema {
    fields: Vec<FieldSpec>,
}

impl InputSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field descriptor.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Validate raw arguments and fill in defaults.
    ///
    /// `null` is treated as absent. Keys not declared in the schema are
    /// dropped from the returned map.
    pub fn validate(&self, raw: Option<JsonObject>) -> Result<JsonObject, ToolError> {
        let mut raw = raw.unwrap_or_default();
        let mut validated = JsonObject::new();

        for spec in &self.fields {
            match raw.remove(spec.name).filter(|v| !v.is_null()) {
                Some(value) => {
                    spec.check(&value)?;
                    validated.insert(spec.name.to_string(), value);
                }
                None if spec.required => {
                    return Err(ToolError::validation(
                        spec.name,
                        format!("required {}", spec.kind.as_str()),
                    ));
                }
                None => {
                    if let Some(default) = &spec.default {
                        validated.insert(spec.name.to_string(), default.clone());
                    }
                }
            }
        }

        Ok(validated)
    }

    /// Render as a JSON Schema object suitable for an MCP tool listing.
    pub fn to_json_schema(&self) -> Arc<JsonObject> {
        let mut properties = JsonObject::new();
        let mut required = Vec::new();

        for spec in &self.fields {
            let mut property = JsonObject::new();
            property.insert("type".into(), json!(spec.kind.as_str()));
            property.insert("description".into(), json!(spec.description));
            if let Some(allowed) = spec.allowed {
                property.insert("enum".into(), json!(allowed));
            }
            if let Some(default) = &spec.default {
                property.insert("default".into(), default.clone());
            }
            properties.insert(spec.name.to_string(), Value::Object(property));

            if spec.required {
                required.push(json!(spec.name));
            }
        }

        let mut schema = JsonObject::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));
        schema.insert("required".into(), Value::Array(required));
        Arc::new(schema)
    }
}
