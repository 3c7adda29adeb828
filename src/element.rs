//! Minimal XML element tree.
//!
//! Render operations in this crate return an [`Element`] so the surrounding
//! SOAP client can graft the subtree into its envelope header. Serialization
//! goes through quick-xml's `Writer`, which handles text and attribute
//! escaping.

use crate::error::WsseError;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// An XML namespace binding (prefix plus URI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    /// Namespace prefix (e.g. `wsse`)
    pub prefix: &'static str,
    /// Namespace URI
    pub uri: &'static str,
}

/// An XML element with optional namespace, attributes, text and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Local element name
    pub name: String,
    /// Namespace binding (if any)
    pub ns: Option<Namespace>,
    /// Attributes in insertion order
    pub attributes: Vec<(String, String)>,
    /// Text content (if any)
    pub text: Option<String>,
    /// Child elements in insertion order
    pub children: Vec<Element>,
}

impl Element {
    /// Create a namespaced element.
    pub fn new(name: impl Into<String>, ns: Namespace) -> Self {
        Self {
            name: name.into(),
            ns: Some(ns),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Create an element with no namespace.
    pub fn unqualified(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ns: None,
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value for the same name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|(k, _)| *k == name) {
            existing.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Append a child element.
    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Prefixed name used on the wire (e.g. `wsse:Security`).
    pub fn qualified_name(&self) -> String {
        match self.ns {
            Some(ns) => format!("{}:{}", ns.prefix, self.name),
            None => self.name.clone(),
        }
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Text content (if any).
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// First child with the given local name.
    pub fn child(&self, local_name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == local_name)
    }

    /// Serialize the subtree to an XML string.
    ///
    /// Namespace declarations are emitted on the outermost element that
    /// introduces each prefix. Elements with no text and no children are
    /// written self-closed.
    pub fn to_xml_string(&self) -> Result<String, WsseError> {
        let mut writer = Writer::new(Vec::new());
        let mut scope: Vec<Namespace> = Vec::new();
        self.write_into(&mut writer, &mut scope)?;
        String::from_utf8(writer.into_inner())
            .map_err(|e| WsseError::XmlWrite(format!("non-UTF-8 writer output: {}", e)))
    }

    fn write_into(
        &self,
        writer: &mut Writer<Vec<u8>>,
        scope: &mut Vec<Namespace>,
    ) -> Result<(), WsseError> {
        let qname = self.qualified_name();
        let mut start = BytesStart::new(qname.clone());

        let mut declared_here = false;
        if let Some(ns) = self.ns {
            if !scope.contains(&ns) {
                let xmlns = format!("xmlns:{}", ns.prefix);
                start.push_attribute((xmlns.as_str(), ns.uri));
                scope.push(ns);
                declared_here = true;
            }
        }

        for (name, value) in &self.attributes {
            start.push_attribute((name.as_str(), value.as_str()));
        }

        if self.text.is_none() && self.children.is_empty() {
            writer
                .write_event(Event::Empty(start))
                .map_err(|e| WsseError::XmlWrite(e.to_string()))?;
        } else {
            writer
                .write_event(Event::Start(start))
                .map_err(|e| WsseError::XmlWrite(e.to_string()))?;
            if let Some(text) = &self.text {
                writer
                    .write_event(Event::Text(BytesText::new(text.as_str())))
                    .map_err(|e| WsseError::XmlWrite(e.to_string()))?;
            }
            for child in &self.children {
                child.write_into(writer, scope)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(qname)))
                .map_err(|e| WsseError::XmlWrite(e.to_string()))?;
        }

        if declared_here {
            scope.pop();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{WSSE_NS, WSU_NS};

    #[test]
    fn test_empty_element_self_closes() {
        let root = Element::new("Security", WSSE_NS);
        let xml = root.to_xml_string().unwrap();
        assert_eq!(
            xml,
            format!("<wsse:Security xmlns:wsse=\"{}\"/>", WSSE_NS.uri)
        );
    }

    #[test]
    fn test_text_and_attributes() {
        let mut root = Element::new("Password", WSSE_NS);
        root.set_attr("Type", "some-type");
        root.set_text("secret");
        let xml = root.to_xml_string().unwrap();
        assert!(xml.contains("Type=\"some-type\""));
        assert!(xml.contains(">secret</wsse:Password>"));
    }

    #[test]
    fn test_set_attr_replaces() {
        let mut root = Element::new("Password", WSSE_NS);
        root.set_attr("Type", "first");
        root.set_attr("Type", "second");
        assert_eq!(root.attr("Type"), Some("second"));
        assert_eq!(root.attributes.len(), 1);
    }

    #[test]
    fn test_text_is_escaped() {
        let mut root = Element::new("Username", WSSE_NS);
        root.set_text("a<b>&c");
        let xml = root.to_xml_string().unwrap();
        assert!(xml.contains("a&lt;b&gt;&amp;c"));
    }

    #[test]
    fn test_namespace_declared_once() {
        let mut root = Element::new("UsernameToken", WSSE_NS);
        let mut user = Element::new("Username", WSSE_NS);
        user.set_text("alice");
        root.append(user);
        let xml = root.to_xml_string().unwrap();
        assert_eq!(xml.matches("xmlns:wsse=").count(), 1);
    }

    #[test]
    fn test_mixed_namespaces_each_declared() {
        let mut root = Element::new("UsernameToken", WSSE_NS);
        let mut created = Element::new("Created", WSU_NS);
        created.set_text("2024-01-01T00:00:00Z");
        root.append(created);
        let xml = root.to_xml_string().unwrap();
        assert_eq!(xml.matches("xmlns:wsse=").count(), 1);
        assert_eq!(xml.matches("xmlns:wsu=").count(), 1);
    }

    #[test]
    fn test_child_lookup() {
        let mut root = Element::new("UsernameToken", WSSE_NS);
        root.append(Element::new("Username", WSSE_NS));
        root.append(Element::new("Password", WSSE_NS));
        assert!(root.child("Password").is_some());
        assert!(root.child("Nonce").is_none());
    }
}
