use crate::Value;

use serde_json::Map;

use std::collections::BTreeSet;

/// The parameters of a tool, narrowed from its untyped input schema.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Parameters {
    #[default]
    Unspecified,
    Specified {
        /// In the order the schema lists them.
        properties: Vec<Property>,
        required: BTreeSet<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub is_required: bool,
}

impl Parameters {
    /// Narrows a raw JSON schema.
    ///
    /// Every missing or malformed field falls back to its empty value:
    /// - a schema without an object of `properties` is [`Parameters::Unspecified`].
    /// - a `required` field that is not an array requires nothing.
    /// - a property description that is not a non-empty string is `None`.
    pub fn from_schema(schema: Option<&Value>) -> Self {
        let Some(Value::Object(schema)) = schema else {
            return Self::Unspecified;
        };

        let Some(Value::Object(properties)) = schema.get("properties") else {
            return Self::Unspecified;
        };

        Self::Specified {
            properties: properties
                .iter()
                .map(|(name, schema)| Property {
                    name: name.clone(),
                    description: description(schema),
                })
                .collect(),
            required: required(schema),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Unspecified => true,
            Self::Specified { properties, .. } => properties.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Unspecified => 0,
            Self::Specified { properties, .. } => properties.len(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Parameter<'_>> {
        let (properties, required) = match self {
            Self::Unspecified => (&[][..], None),
            Self::Specified {
                properties,
                required,
            } => (properties.as_slice(), Some(required)),
        };

        properties.iter().map(move |property| Parameter {
            name: &property.name,
            description: property.description.as_deref(),
            is_required: required.is_some_and(|required| required.contains(&property.name)),
        })
    }
}

fn description(schema: &Value) -> Option<String> {
    schema
        .get("description")
        .and_then(Value::as_str)
        .filter(|description| !description.is_empty())
        .map(str::to_owned)
}

fn required(schema: &Map<String, Value>) -> BTreeSet<String> {
    match schema.get("required") {
        Some(Value::Array(names)) => names
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect(),
        _ => BTreeSet::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parameters(schema: Value) -> Vec<(String, Option<String>, bool)> {
        Parameters::from_schema(Some(&schema))
            .iter()
            .map(|parameter| {
                (
                    parameter.name.to_owned(),
                    parameter.description.map(str::to_owned),
                    parameter.is_required,
                )
            })
            .collect()
    }

    #[test]
    fn required_property_with_description() {
        assert_eq!(
            parameters(json!({
                "properties": { "path": { "description": "File path" } },
                "required": ["path"]
            })),
            vec![("path".to_owned(), Some("File path".to_owned()), true)]
        );
    }

    #[test]
    fn keeps_schema_order() {
        let names: Vec<_> = parameters(json!({
            "properties": { "zeta": {}, "alpha": {}, "mid": {} }
        }))
        .into_iter()
        .map(|(name, _, _)| name)
        .collect();

        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn missing_schema_is_unspecified() {
        assert_eq!(Parameters::from_schema(None), Parameters::Unspecified);
        assert!(Parameters::from_schema(None).is_empty());
    }

    #[test]
    fn malformed_properties_are_unspecified() {
        for schema in [
            json!("object"),
            json!({ "type": "object" }),
            json!({ "properties": null }),
            json!({ "properties": ["path"] }),
            json!({ "properties": "path" }),
        ] {
            assert_eq!(
                Parameters::from_schema(Some(&schema)),
                Parameters::Unspecified,
                "{schema}"
            );
        }
    }

    #[test]
    fn empty_properties_are_empty() {
        let parameters = Parameters::from_schema(Some(&json!({ "properties": {} })));

        assert!(parameters.is_empty());
        assert_eq!(parameters.iter().count(), 0);
    }

    #[test]
    fn malformed_required_requires_nothing() {
        for required in [json!("path"), json!({ "path": true }), json!(null), json!(1)] {
            let parameters = parameters(json!({
                "properties": { "path": {} },
                "required": required
            }));

            assert_eq!(parameters, vec![("path".to_owned(), None, false)]);
        }
    }

    #[test]
    fn ignores_non_string_requirements() {
        assert_eq!(
            parameters(json!({
                "properties": { "path": {}, "1": {} },
                "required": [1, "path", null]
            })),
            vec![
                ("path".to_owned(), None, true),
                ("1".to_owned(), None, false),
            ]
        );
    }

    #[test]
    fn unusable_descriptions_are_missing() {
        assert_eq!(
            parameters(json!({
                "properties": {
                    "a": { "description": "" },
                    "b": { "description": 42 },
                    "c": true,
                    "d": { "type": "string" }
                }
            })),
            vec![
                ("a".to_owned(), None, false),
                ("b".to_owned(), None, false),
                ("c".to_owned(), None, false),
                ("d".to_owned(), None, false),
            ]
        );
    }
}
