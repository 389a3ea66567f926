//! Input interfaces attached to fields.

use std::{fmt, str::FromStr};

/// A literal choice value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    String(String),
    /// Textual form of a JSON number, kept verbatim.
    Number(String),
    Bool(bool),
}

impl Literal {
    /// The unquoted textual value.
    pub fn text(&self) -> &str {
        match self {
            Literal::String(s) | Literal::Number(s) => s,
            Literal::Bool(true) => "true",
            Literal::Bool(false) => "false",
        }
    }

    /// Whether the literal can be written as a bare number.
    ///
    /// Strings qualify only when they are valid JSON number text.
    pub fn is_numeric(&self) -> bool {
        match self {
            Literal::Number(_) => true,
            Literal::String(s) => serde_json::Number::from_str(s).is_ok(),
            Literal::Bool(_) => false,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Choice list shared by the select interfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceOptions {
    pub choices: Vec<Literal>,
    /// Values outside `choices` are accepted.
    pub allow_other: bool,
    /// No selection is accepted.
    pub allow_none: bool,
}

/// A node of a `select-multiple-checkbox-tree` choice hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceNode {
    pub value: Literal,
    pub children: Vec<ChoiceNode>,
}

impl ChoiceNode {
    pub fn leaf(value: Literal) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOptions {
    pub presets: Vec<String>,
    pub allow_custom: bool,
}

/// A subfield of a `list` (repeater) interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListField {
    pub name: String,
    /// CMS type id of the subfield.
    pub ty: String,
    /// Interface of the subfield, used when it is itself `json` or `csv`.
    pub interface: Option<Box<FieldInterface>>,
}

/// The input interface of a field with its options decoded.
///
/// Interfaces this generator gives a shape to have dedicated variants;
/// everything else is kept by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInterface {
    /// `presentation-*` interfaces; never carry data.
    Presentation(String),
    /// `group-*` interfaces; never carry data.
    Group(String),
    List(Vec<ListField>),
    SelectDropdown(ChoiceOptions),
    SelectRadio(ChoiceOptions),
    SelectMultipleCheckbox(ChoiceOptions),
    SelectMultipleCheckboxTree(Vec<ChoiceNode>),
    SelectMultipleDropdown(ChoiceOptions),
    Tags(TagOptions),
    Other(String),
}

impl FieldInterface {
    /// The CMS interface id.
    pub fn name(&self) -> &str {
        match self {
            FieldInterface::Presentation(name)
            | FieldInterface::Group(name)
            | FieldInterface::Other(name) => name,
            FieldInterface::List(_) => "list",
            FieldInterface::SelectDropdown(_) => "select-dropdown",
            FieldInterface::SelectRadio(_) => "select-radio",
            FieldInterface::SelectMultipleCheckbox(_) => "select-multiple-checkbox",
            FieldInterface::SelectMultipleCheckboxTree(_) => "select-multiple-checkbox-tree",
            FieldInterface::SelectMultipleDropdown(_) => "select-multiple-dropdown",
            FieldInterface::Tags(_) => "tags",
        }
    }

    pub fn is_presentational(&self) -> bool {
        matches!(
            self,
            FieldInterface::Presentation(_) | FieldInterface::Group(_)
        )
    }

    /// Whether the interface gives the field a structured shape.
    pub fn is_structured(&self) -> bool {
        !matches!(
            self,
            FieldInterface::Presentation(_) | FieldInterface::Group(_) | FieldInterface::Other(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_names() {
        assert_eq!(FieldInterface::Tags(TagOptions::default()).name(), "tags");
        assert_eq!(
            FieldInterface::Other("input-rich-text-html".into()).name(),
            "input-rich-text-html"
        );
        assert_eq!(
            FieldInterface::SelectMultipleCheckboxTree(vec![]).name(),
            "select-multiple-checkbox-tree"
        );
    }

    #[test]
    fn test_interface_classification() {
        assert!(FieldInterface::Group("group-detail".into()).is_presentational());
        assert!(!FieldInterface::Group("group-detail".into()).is_structured());
        assert!(FieldInterface::List(vec![]).is_structured());
        assert!(!FieldInterface::Other("input".into()).is_structured());
    }

    #[test]
    fn test_literal_numeric() {
        assert!(Literal::Number("2".into()).is_numeric());
        assert!(Literal::String("1.5".into()).is_numeric());
        assert!(!Literal::String("draft".into()).is_numeric());
        assert!(!Literal::String(String::new()).is_numeric());
        assert!(!Literal::String("inf".into()).is_numeric());
        assert!(Literal::String("-2e3".into()).is_numeric());
        assert!(!Literal::String("+1".into()).is_numeric());
        assert!(!Literal::String(" 1".into()).is_numeric());
        assert!(!Literal::String("1.".into()).is_numeric());
        assert!(!Literal::String("0x10".into()).is_numeric());
        assert!(!Literal::Bool(true).is_numeric());
        assert_eq!(Literal::Bool(false).to_string(), "false");
    }
}
