pub mod navigator;
pub mod tree;

pub use navigator::{CategoryNavigator, SelectionOutcome};
pub use tree::CategoryNode;
