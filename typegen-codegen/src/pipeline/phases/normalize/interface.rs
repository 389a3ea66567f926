//! Decoding of interface options into typed payloads.
//!
//! Options are free-form JSON controlled by the CMS UI. Anything that does
//! not match the expected shape decodes to empty defaults.

use directus_typegen_ir::{
    ChoiceNode, ChoiceOptions, FieldInterface, ListField, Literal, TagOptions,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ChoicesPayload {
    choices: Option<Vec<ChoicePayload>>,
    allow_other: Option<bool>,
    allow_none: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct ChoicePayload {
    #[serde(default)]
    value: Value,
    #[serde(default)]
    children: Option<Vec<ChoicePayload>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TagsPayload {
    presets: Option<Vec<Value>>,
    allow_custom: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListPayload {
    fields: Option<Vec<ListFieldPayload>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListFieldPayload {
    field: Option<String>,
    name: Option<String>,
    #[serde(rename = "type")]
    ty: Option<String>,
    meta: Option<ListFieldMeta>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListFieldMeta {
    interface: Option<String>,
    options: Option<Value>,
}

/// Decode an interface id and its options.
pub fn decode_interface(name: &str, options: Option<&Value>) -> FieldInterface {
    if name.starts_with("presentation") {
        return FieldInterface::Presentation(name.to_string());
    }
    if name.starts_with("group") {
        return FieldInterface::Group(name.to_string());
    }

    match name {
        "list" => FieldInterface::List(decode_list(options)),
        "select-dropdown" => FieldInterface::SelectDropdown(decode_choices(name, options)),
        "select-radio" => FieldInterface::SelectRadio(decode_choices(name, options)),
        "select-multiple-checkbox" => {
            FieldInterface::SelectMultipleCheckbox(decode_choices(name, options))
        }
        "select-multiple-checkbox-tree" => {
            let payload: ChoicesPayload = decode(name, options);
            FieldInterface::SelectMultipleCheckboxTree(
                payload
                    .choices
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(choice_node)
                    .collect(),
            )
        }
        "select-multiple-dropdown" => {
            FieldInterface::SelectMultipleDropdown(decode_choices(name, options))
        }
        "tags" => {
            let payload: TagsPayload = decode(name, options);
            FieldInterface::Tags(TagOptions {
                presets: payload
                    .presets
                    .unwrap_or_default()
                    .iter()
                    .filter_map(literal)
                    .map(|l| l.text().to_string())
                    .collect(),
                allow_custom: payload.allow_custom.unwrap_or(false),
            })
        }
        _ => FieldInterface::Other(name.to_string()),
    }
}

fn decode<T: Default + for<'de> Deserialize<'de>>(interface: &str, options: Option<&Value>) -> T {
    let Some(options) = options else {
        return T::default();
    };
    T::deserialize(options).unwrap_or_else(|err| {
        debug!(interface, %err, "ignoring malformed interface options");
        T::default()
    })
}

fn decode_choices(interface: &str, options: Option<&Value>) -> ChoiceOptions {
    let payload: ChoicesPayload = decode(interface, options);
    ChoiceOptions {
        choices: payload
            .choices
            .unwrap_or_default()
            .iter()
            .filter_map(|c| literal(&c.value))
            .collect(),
        allow_other: payload.allow_other.unwrap_or(false),
        allow_none: payload.allow_none.unwrap_or(false),
    }
}

fn decode_list(options: Option<&Value>) -> Vec<ListField> {
    let payload: ListPayload = decode("list", options);
    payload
        .fields
        .unwrap_or_default()
        .into_iter()
        .filter_map(|f| {
            let name = f.field.or(f.name)?;
            let ty = f.ty.unwrap_or_else(|| "unknown".to_string());
            let interface = f.meta.and_then(|meta| {
                let interface = meta.interface?;
                Some(Box::new(decode_interface(&interface, meta.options.as_ref())))
            });
            Some(ListField {
                name,
                ty,
                interface,
            })
        })
        .collect()
}

fn choice_node(choice: ChoicePayload) -> Option<ChoiceNode> {
    Some(ChoiceNode {
        value: literal(&choice.value)?,
        children: choice
            .children
            .unwrap_or_default()
            .into_iter()
            .filter_map(choice_node)
            .collect(),
    })
}

fn literal(value: &Value) -> Option<Literal> {
    match value {
        Value::String(s) => Some(Literal::String(s.clone())),
        Value::Number(n) => Some(Literal::Number(n.to_string())),
        Value::Bool(b) => Some(Literal::Bool(*b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_presentation_and_group() {
        assert!(decode_interface("presentation-divider", None).is_presentational());
        assert!(decode_interface("group-detail", None).is_presentational());
        assert_eq!(
            decode_interface("input", None),
            FieldInterface::Other("input".into())
        );
    }

    #[test]
    fn test_dropdown_choices() {
        let options = json!({
            "choices": [{ "text": "Draft", "value": "draft" }, { "text": "One", "value": 1 }],
            "allowOther": true
        });

        let FieldInterface::SelectDropdown(choices) =
            decode_interface("select-dropdown", Some(&options))
        else {
            panic!("expected select-dropdown");
        };
        assert_eq!(
            choices.choices,
            [Literal::String("draft".into()), Literal::Number("1".into())]
        );
        assert!(choices.allow_other);
        assert!(!choices.allow_none);
    }

    #[test]
    fn test_null_choices_and_malformed_options() {
        let FieldInterface::SelectMultipleCheckbox(choices) =
            decode_interface("select-multiple-checkbox", Some(&json!({ "choices": null })))
        else {
            panic!("expected select-multiple-checkbox");
        };
        assert!(choices.choices.is_empty());

        let FieldInterface::SelectRadio(choices) =
            decode_interface("select-radio", Some(&json!("not an object")))
        else {
            panic!("expected select-radio");
        };
        assert_eq!(choices, ChoiceOptions::default());
    }

    #[test]
    fn test_tree_choices() {
        let options = json!({
            "choices": [
                { "text": "A", "value": "a", "children": [{ "text": "B", "value": "b" }] },
                { "text": "C", "value": "c" }
            ]
        });

        let FieldInterface::SelectMultipleCheckboxTree(nodes) =
            decode_interface("select-multiple-checkbox-tree", Some(&options))
        else {
            panic!("expected tree");
        };
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].children, [ChoiceNode::leaf(Literal::String("b".into()))]);
    }

    #[test]
    fn test_tags() {
        let options = json!({ "presets": ["a", "b"], "allowCustom": true });
        assert_eq!(
            decode_interface("tags", Some(&options)),
            FieldInterface::Tags(TagOptions {
                presets: vec!["a".into(), "b".into()],
                allow_custom: true,
            })
        );
        assert_eq!(
            decode_interface("tags", None),
            FieldInterface::Tags(TagOptions::default())
        );
    }

    #[test]
    fn test_list_fields() {
        let options = json!({
            "fields": [
                { "field": "label", "name": "Label", "type": "string" },
                {
                    "field": "options",
                    "type": "json",
                    "meta": { "interface": "tags", "options": { "presets": ["x"] } }
                },
                { "type": "string" }
            ]
        });

        let FieldInterface::List(fields) = decode_interface("list", Some(&options)) else {
            panic!("expected list");
        };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "label");
        assert!(fields[0].interface.is_none());
        assert_eq!(fields[1].interface.as_deref().map(FieldInterface::name), Some("tags"));
    }
}
