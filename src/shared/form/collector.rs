// src/shared/form/collector.rs
use super::error_tree::{ErrorEntry, ErrorTree};
use super::form_node::FormView;

/// Flattens a validated form into an `ErrorTree`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormErrorCollector;

impl FormErrorCollector {
    pub fn collect<F: FormView>(&self, form: &F) -> ErrorTree {
        collect(form)
    }
}

/// Gathers the node's own messages, then recurses into each child and keeps
/// only the children that produced at least one message.
pub fn collect<F: FormView>(form: &F) -> ErrorTree {
    let errors = form.errors().to_vec();

    let fields = form
        .children()
        .into_iter()
        .filter_map(|(name, child)| {
            let sub = collect(child);
            if sub.is_empty() {
                return None;
            }

            let entry = if sub.fields.is_empty() {
                ErrorEntry::Messages(sub.errors)
            } else {
                ErrorEntry::Nested(sub)
            };
            Some((name.to_string(), entry))
        })
        .collect();

    ErrorTree { errors, fields }
}

impl ErrorTree {
    pub fn from_form<F: FormView>(form: &F) -> Self {
        collect(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormNode;
    use serde_json::{json, Value};

    #[test]
    fn valid_form_collects_to_empty_tree() {
        let form = FormNode::new()
            .with_child("title", FormNode::new())
            .with_child(
                "author",
                FormNode::new().with_child("name", FormNode::new()),
            );

        let tree = collect(&form);

        assert!(tree.is_empty());
        assert_eq!(Value::from(tree), json!({}));
    }

    #[test]
    fn root_messages_stay_on_top_and_child_messages_nest_under_name() {
        let form = FormNode::new()
            .with_error("required")
            .with_child("email", FormNode::new().with_error("invalid"));

        let tree = FormErrorCollector.collect(&form);

        assert_eq!(tree.errors(), ["required".to_string()]);
        assert_eq!(
            tree.get("email"),
            Some(&ErrorEntry::Messages(vec!["invalid".to_string()]))
        );
        assert_eq!(Value::from(&tree), json!({"_errors": ["required"], "email": ["invalid"]}));
    }

    #[test]
    fn branches_without_errors_are_omitted() {
        let form = FormNode::new()
            .with_child("title", FormNode::new())
            .with_child(
                "author",
                FormNode::new()
                    .with_child("name", FormNode::new())
                    .with_child("email", FormNode::new().with_error("invalid")),
            )
            .with_child("tags", FormNode::new().with_child("0", FormNode::new()));

        let tree = collect(&form);

        assert_eq!(tree.fields().len(), 1);
        assert_eq!(Value::from(&tree), json!({"author": {"email": ["invalid"]}}));
    }

    #[test]
    fn messages_keep_validation_order() {
        let form = FormNode::new().with_child(
            "password",
            FormNode::new().with_errors(["too short", "needs a digit", "needs a symbol"]),
        );

        let tree = ErrorTree::from_form(&form);

        assert_eq!(
            tree.get("password").unwrap().messages(),
            ["too short", "needs a digit", "needs a symbol"].map(String::from)
        );
    }

    #[test]
    fn child_with_own_and_nested_errors_becomes_nested_entry() {
        let form = FormNode::new().with_child(
            "address",
            FormNode::new()
                .with_error("incomplete")
                .with_child("zip", FormNode::new().with_error("invalid")),
        );

        let tree = collect(&form);

        assert!(matches!(tree.get("address"), Some(ErrorEntry::Nested(_))));
        assert_eq!(
            Value::from(&tree),
            json!({"address": {"_errors": ["incomplete"], "zip": ["invalid"]}})
        );
        assert_eq!(tree.error_count(), 2);
    }
}
