//! Template tree describing the scaffold layout.
//!
//! The layout is declared as a flat list of file paths and assembled into a
//! tree of nodes, where every node is either an empty file or a directory
//! holding further nodes in declaration order.

mod layout;
mod node;

pub use layout::infrastructure_layout;
pub use node::{TemplateInsertError, TemplateNode};
