//! Owned XML element tree with resolved namespaces.
//!
//! Element names are stored as `(namespace URI, local name)` pairs so that
//! lookups are independent of whichever prefix the document author chose.

/// A single XML element and its subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Namespace URI the element is bound to, if any
    pub namespace: Option<String>,
    /// Local (unprefixed) element name
    pub name: String,
    /// Attributes in document order, keyed by local name
    pub attributes: Vec<(String, String)>,
    /// Concatenated, trimmed text content directly under this element
    pub text: Option<String>,
    /// Child elements in document order
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an element with no attributes, text, or children
    pub fn new(namespace: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute setter
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Builder-style text setter
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder-style child appender
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Check whether this element has the given namespace and local name
    #[must_use]
    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.namespace.as_deref() == Some(namespace) && self.name == name
    }

    /// Value of the attribute with the given local name
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First child element with the given namespace and local name
    #[must_use]
    pub fn child(&self, namespace: &str, name: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.is(namespace, name))
    }

    /// All child elements with the given namespace and local name
    pub fn children_named<'a>(
        &'a self,
        namespace: &'a str,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |c| c.is(namespace, name))
    }

    /// Text content of the first matching child element
    #[must_use]
    pub fn child_text(&self, namespace: &str, name: &str) -> Option<&str> {
        self.child(namespace, name).and_then(|c| c.text.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "urn:test";

    #[test]
    fn test_child_lookup_is_namespace_aware() {
        let root = XmlElement::new(Some(NS), "root")
            .with_child(XmlElement::new(None, "name").with_text("unbound"))
            .with_child(XmlElement::new(Some(NS), "name").with_text("bound"));

        assert_eq!(root.child_text(NS, "name"), Some("bound"));
        assert!(root.child("urn:other", "name").is_none());
    }

    #[test]
    fn test_children_named_preserves_order() {
        let root = XmlElement::new(Some(NS), "list")
            .with_child(XmlElement::new(Some(NS), "item").with_text("a"))
            .with_child(XmlElement::new(Some(NS), "other"))
            .with_child(XmlElement::new(Some(NS), "item").with_text("b"));

        let texts: Vec<_> = root
            .children_named(NS, "item")
            .filter_map(|c| c.text.as_deref())
            .collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_attribute() {
        let el = XmlElement::new(Some(NS), "component").with_attribute("type", "library");
        assert_eq!(el.attribute("type"), Some("library"));
        assert_eq!(el.attribute("bom-ref"), None);
    }
}
