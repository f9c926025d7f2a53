// Element selectors for the document model.
// Covers exactly what navigation needs: ids, classes, attribute presence and
// attribute equality, plus bare tag names.

use crate::modules::dom::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
    Tag(String),
    Attr { name: String, value: Option<String> },
}

impl Selector {
    pub fn attr(name: &str) -> Self {
        Self::Attr { name: name.to_string(), value: None }
    }

    /// Attribute equality built from a raw value, so identifiers are never
    /// spliced into selector text.
    pub fn attr_eq(name: &str, value: &str) -> Self {
        Self::Attr {
            name: name.to_string(),
            value: Some(value.to_string()),
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Id(id) => element.id() == Some(id.as_str()),
            Self::Class(class) => element.has_class(class),
            Self::Tag(tag) => element.tag().eq_ignore_ascii_case(tag),
            Self::Attr { name, value: None } => element.attr(name).is_some(),
            Self::Attr { name, value: Some(expected) } => {
                element.attr(name) == Some(expected.as_str())
            }
        }
    }
}
