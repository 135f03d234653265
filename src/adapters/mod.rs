// Adapters layer: concrete implementations of the domain ports.

pub mod tree_model;

pub use tree_model::{TreeModel, TreeNode};
