use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

#[cfg(test)]
use mockall::automock;

use super::error::SchemaError;

/// Source of the ordered field names a projection exposes
#[cfg_attr(test, automock)]
pub trait SchemaDescription {
    fn field_names(&self) -> Result<Vec<String>, SchemaError>;
}

/// A schema whose fields are known at compile time
#[derive(Debug, Clone, Copy)]
pub struct StaticSchema(pub &'static [&'static str]);

impl SchemaDescription for StaticSchema {
    fn field_names(&self) -> Result<Vec<String>, SchemaError> {
        Ok(self.0.iter().map(|name| name.to_string()).collect())
    }
}

pub struct FieldProjector<S> {
    schema: S,
}

impl<S: SchemaDescription> FieldProjector<S> {
    pub fn new(schema: S) -> Self {
        Self { schema }
    }

    /// Missing fields read as absent; only an unreadable schema fails.
    pub fn project(&self, raw: Map<String, Value>) -> Result<ProjectedInput, SchemaError> {
        let mut fields: Vec<(String, Option<Value>)> = Vec::new();
        for name in self.schema.field_names()? {
            if fields.iter().any(|(declared, _)| *declared == name) {
                continue;
            }
            let value = raw.get(&name).filter(|v| !v.is_null()).cloned();
            fields.push((name, value));
        }
        Ok(ProjectedInput { fields, raw })
    }
}

/// Raw input seen through a schema: one slot per declared field, plus the
/// untouched raw map for everything else.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedInput {
    fields: Vec<(String, Option<Value>)>,
    raw: Map<String, Value>,
}

impl ProjectedInput {
    /// `None` for absent or null values and for names the schema does not declare
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(declared, _)| declared == name)
            .and_then(|(_, value)| value.as_ref())
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.fields.iter().any(|(declared, _)| declared == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Raw entries the schema does not declare
    pub fn extras(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.raw.iter().filter(|(key, _)| !self.is_declared(key))
    }

    pub fn to_raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    pub fn into_raw(self) -> Map<String, Value> {
        self.raw
    }

    /// Decode the declared, present fields into a statically declared struct
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, SchemaError> {
        let declared: Map<String, Value> = self
            .fields
            .iter()
            .filter_map(|(name, value)| value.clone().map(|v| (name.clone(), v)))
            .collect();
        Ok(serde_json::from_value(Value::Object(declared))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    fn raw(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_missing_fields_read_as_absent() {
        let projector = FieldProjector::new(StaticSchema(&["a", "b"]));

        let input = projector.project(raw(json!({ "a": 1 }))).unwrap();

        assert_eq!(input.get("a"), Some(&json!(1)));
        assert_eq!(input.get("b"), None);
        assert_eq!(input.to_raw(), &raw(json!({ "a": 1 })));
        assert_eq!(input.field_names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_undeclared_fields_only_in_raw_view() {
        let projector = FieldProjector::new(StaticSchema(&["a"]));

        let input = projector
            .project(raw(json!({ "a": "x", "utf8": "✓", "c": null })))
            .unwrap();

        assert!(input.get("utf8").is_none());
        assert!(!input.is_declared("utf8"));
        let mut extras: Vec<&String> = input.extras().map(|(key, _)| key).collect();
        extras.sort();
        assert_eq!(extras, vec!["c", "utf8"]);
        assert_eq!(input.into_raw().len(), 3);
    }

    #[test]
    fn test_null_reads_as_absent() {
        let projector = FieldProjector::new(StaticSchema(&["a"]));
        let input = projector.project(raw(json!({ "a": null }))).unwrap();
        assert!(input.get("a").is_none());
        assert!(input.is_declared("a"));
    }

    #[test]
    fn test_duplicate_schema_names_are_collapsed() {
        let projector = FieldProjector::new(StaticSchema(&["a", "b", "a"]));
        let input = projector.project(Map::new()).unwrap();
        assert_eq!(input.field_names().count(), 2);
    }

    #[test]
    fn test_schema_failure_propagates() {
        let mut schema = MockSchemaDescription::new();
        schema
            .expect_field_names()
            .times(1)
            .returning(|| Err(SchemaError::Introspection("contract not loaded".to_string())));

        let err = FieldProjector::new(schema).project(Map::new()).unwrap_err();

        assert!(matches!(err, SchemaError::Introspection(_)));
    }

    #[test]
    fn test_decode_into_declared_struct() {
        #[derive(Deserialize)]
        struct Params {
            a: Option<i64>,
            b: Option<String>,
        }

        let projector = FieldProjector::new(StaticSchema(&["a", "b"]));
        let input = projector.project(raw(json!({ "a": 1, "z": true }))).unwrap();

        let params: Params = input.decode().unwrap();
        assert_eq!(params.a, Some(1));
        assert_eq!(params.b, None);
    }
}
