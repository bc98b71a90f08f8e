//! Runtime instance construction against a generated model.
//!
//! Construction is a sequence of explicit passes over the supplied
//! attributes: field-name checks, category inference, scalar-to-sequence
//! coercion, identifier checks, and finally the required-manifest check.
//! A failure rejects this instance only.

use crate::{
    check_identifier, coerce_to_list, Attributes, ModelArtifact, ModelError, ModelResult, Value,
    ValidatorRule,
};

/// A validated instance of a model class.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    class: String,
    attrs: Attributes,
}

impl Instance {
    pub fn class_name(&self) -> &str {
        &self.class
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.attrs.get(field)
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    pub fn into_attrs(self) -> Attributes {
        self.attrs
    }
}

impl ModelArtifact {
    /// Construct an instance of `class` from raw attributes, applying the
    /// class's validators and the required manifest.
    pub fn build_instance(&self, class: &str, mut attrs: Attributes) -> ModelResult<Instance> {
        let model = self
            .class(class)
            .ok_or_else(|| ModelError::unknown_class(class))?;
        if !model.is_concrete() {
            return Err(ModelError::abstract_class(class));
        }

        let fields = self.effective_fields(class);
        for name in attrs.keys() {
            if !fields.iter().any(|f| &f.name == name) {
                return Err(ModelError::unknown_field(class, name));
            }
        }

        // The inference hook: entity-rooted classes whose category was left
        // unset get the precomputed ancestor tag list of their concrete type.
        if model.entity_rooted {
            let unset = attrs.get("category").map_or(true, Value::is_null);
            if unset && !model.category_ancestry.is_empty() {
                let tags = model
                    .category_ancestry
                    .iter()
                    .map(|t| Value::from(t.as_str()))
                    .collect();
                attrs.insert("category".to_string(), Value::List(tags));
            }
        }

        for rule in self.effective_validators(class) {
            match rule {
                ValidatorRule::CoerceToList { field } => {
                    if let Some(value) = attrs.remove(field) {
                        attrs.insert(field.clone(), coerce_to_list(value));
                    }
                }
                ValidatorRule::CurieNamespace { field, prefixes } => {
                    if let Some(value) = attrs.get(field) {
                        check_identifier(field, value, prefixes)?;
                    }
                }
            }
        }

        for required in &model.required {
            let present = attrs.get(required).map_or(false, |v| !v.is_null());
            if !present {
                return Err(ModelError::missing_required(class, required));
            }
        }

        Ok(Instance {
            class: class.to_string(),
            attrs,
        })
    }
}
