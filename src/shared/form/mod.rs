pub mod collector;
pub mod error_tree;
pub mod form_node;

pub use collector::{collect, FormErrorCollector};
pub use error_tree::{ErrorEntry, ErrorTree, OWN_ERRORS_KEY};
pub use form_node::{FormNode, FormView};
