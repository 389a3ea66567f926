//! Structured field shapes.

use directus_typegen_ir::{ChoiceNode, FieldInterface, ListField, ListItem, Literal, StructuredKind};
use tracing::debug;

/// Shape of a structured field from its interface.
///
/// Unknown or missing interfaces yield [`StructuredKind::Unknown`].
pub fn resolve_structured(interface: Option<&FieldInterface>) -> StructuredKind {
    let Some(interface) = interface else {
        return StructuredKind::Unknown;
    };

    match interface {
        FieldInterface::List(fields) => StructuredKind::List(fields.iter().map(list_item).collect()),
        FieldInterface::SelectDropdown(options) => StructuredKind::SingleChoice {
            choices: options.choices.clone(),
            allow_other: options.allow_other,
            allow_none: options.allow_none,
        },
        FieldInterface::SelectRadio(options) => StructuredKind::SingleChoice {
            choices: options.choices.clone(),
            allow_other: false,
            allow_none: false,
        },
        FieldInterface::SelectMultipleCheckbox(options) => StructuredKind::MultiChoice {
            choices: options.choices.clone(),
            allow_other: options.allow_other,
            allow_none: false,
        },
        FieldInterface::SelectMultipleDropdown(options) => StructuredKind::MultiChoice {
            choices: options.choices.clone(),
            allow_other: options.allow_other,
            allow_none: options.allow_none,
        },
        FieldInterface::SelectMultipleCheckboxTree(nodes) => {
            let mut choices = Vec::new();
            flatten_tree(nodes, &mut choices);
            StructuredKind::MultiChoiceTree { choices }
        }
        FieldInterface::Tags(options) => StructuredKind::Tags {
            presets: options.presets.clone(),
            allow_custom: options.allow_custom,
        },
        FieldInterface::Presentation(name)
        | FieldInterface::Group(name)
        | FieldInterface::Other(name) => {
            debug!(interface = %name, "no shape for interface");
            StructuredKind::Unknown
        }
    }
}

fn list_item(field: &ListField) -> ListItem {
    let shape = matches!(field.ty.as_str(), "json" | "csv")
        .then(|| Box::new(resolve_structured(field.interface.as_deref())));
    ListItem {
        name: field.name.clone(),
        ty: field.ty.clone(),
        shape,
    }
}

/// Pre-order flattening; the hierarchy itself is dropped.
fn flatten_tree(nodes: &[ChoiceNode], out: &mut Vec<Literal>) {
    for node in nodes {
        out.push(node.value.clone());
        flatten_tree(&node.children, out);
    }
}

#[cfg(test)]
mod tests {
    use directus_typegen_ir::{ChoiceOptions, TagOptions};

    use super::*;

    fn s(value: &str) -> Literal {
        Literal::String(value.to_string())
    }

    #[test]
    fn test_tree_is_flattened_in_pre_order() {
        let tree = FieldInterface::SelectMultipleCheckboxTree(vec![
            ChoiceNode {
                value: s("a"),
                children: vec![ChoiceNode {
                    value: s("b"),
                    children: vec![ChoiceNode::leaf(s("c"))],
                }],
            },
            ChoiceNode::leaf(s("d")),
        ]);

        assert_eq!(
            resolve_structured(Some(&tree)),
            StructuredKind::MultiChoiceTree {
                choices: vec![s("a"), s("b"), s("c"), s("d")]
            }
        );
    }

    #[test]
    fn test_radio_never_allows_other() {
        let radio = FieldInterface::SelectRadio(ChoiceOptions {
            choices: vec![s("x")],
            allow_other: true,
            allow_none: true,
        });

        assert_eq!(
            resolve_structured(Some(&radio)),
            StructuredKind::SingleChoice {
                choices: vec![s("x")],
                allow_other: false,
                allow_none: false,
            }
        );
    }

    #[test]
    fn test_list_recurses_into_serialized_subfields() {
        let list = FieldInterface::List(vec![
            ListField {
                name: "label".into(),
                ty: "string".into(),
                interface: None,
            },
            ListField {
                name: "tags".into(),
                ty: "json".into(),
                interface: Some(Box::new(FieldInterface::Tags(TagOptions {
                    presets: vec!["x".into()],
                    allow_custom: false,
                }))),
            },
            ListField {
                name: "raw".into(),
                ty: "csv".into(),
                interface: None,
            },
        ]);

        let StructuredKind::List(items) = resolve_structured(Some(&list)) else {
            panic!("expected list");
        };
        assert!(items[0].shape.is_none());
        assert!(matches!(
            items[1].shape.as_deref(),
            Some(StructuredKind::Tags { .. })
        ));
        assert_eq!(items[2].shape.as_deref(), Some(&StructuredKind::Unknown));
    }

    #[test]
    fn test_unknown_interfaces() {
        assert_eq!(resolve_structured(None), StructuredKind::Unknown);
        assert_eq!(
            resolve_structured(Some(&FieldInterface::Other("input-code".into()))),
            StructuredKind::Unknown
        );
    }
}
