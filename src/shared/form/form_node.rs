// src/shared/form/form_node.rs

/// Read-only view over a validated form.
///
/// Implemented by `FormNode`; external form types implement it to be
/// rendered by `FormErrorCollector` without conversion.
pub trait FormView {
    /// The node's own messages, in the order validation produced them.
    fn errors(&self) -> &[String];

    /// Sub-forms, in field declaration order.
    fn children(&self) -> Vec<(&str, &Self)>;
}

/// A validated form: its own messages plus named sub-forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormNode {
    errors: Vec<String>,
    children: Vec<(String, FormNode)>,
}

impl FormNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.push_error(message);
        self
    }

    pub fn with_errors<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors.extend(messages.into_iter().map(Into::into));
        self
    }

    pub fn with_child(mut self, name: impl Into<String>, child: FormNode) -> Self {
        self.insert_child(name, child);
        self
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Adds a sub-form. A child with the same name is replaced in place so
    /// declaration order is kept.
    pub fn insert_child(&mut self, name: impl Into<String>, child: FormNode) {
        let name = name.into();
        match self.children.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = child,
            None => self.children.push((name, child)),
        }
    }

    pub fn child(&self, name: &str) -> Option<&FormNode> {
        self.children
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, node)| node)
    }

    /// True when neither this node nor any descendant carries a message.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.children.iter().all(|(_, child)| child.is_valid())
    }
}

impl FormView for FormNode {
    fn errors(&self) -> &[String] {
        &self.errors
    }

    fn children(&self) -> Vec<(&str, &Self)> {
        self.children
            .iter()
            .map(|(name, node)| (name.as_str(), node))
            .collect()
    }
}
