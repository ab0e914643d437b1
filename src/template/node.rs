use hashlink::LinkedHashMap;
use snafu::prelude::*;

/// One entry of the template tree.
///
/// A `File` carries no payload since every scaffolded file is created empty.
/// A `Directory` owns its children in insertion order, which is also the
/// order in which they are created on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    File,
    Directory {
        children: LinkedHashMap<String, TemplateNode>,
    },
}

impl TemplateNode {
    pub fn root() -> Self {
        TemplateNode::Directory {
            children: LinkedHashMap::new(),
        }
    }

    pub fn children(&self) -> Option<&LinkedHashMap<String, TemplateNode>> {
        match self {
            TemplateNode::Directory { children } => Some(children),
            TemplateNode::File => None,
        }
    }

    /// Inserts a file entry at the given slash-separated path, creating
    /// intermediate directory nodes on first use.
    pub fn try_insert_file(&mut self, path: &str) -> Result<(), TemplateInsertError> {
        let mut components = path.split('/').peekable();
        let mut current = self;

        while let Some(component) = components.next() {
            if component.is_empty() {
                return EmptyNameSnafu { path }.fail();
            }

            let children = match current {
                TemplateNode::Directory { children } => children,
                TemplateNode::File => return TraversesFileSnafu { path }.fail(),
            };

            if components.peek().is_none() {
                // Last component, insert the file entry
                if children.contains_key(component) {
                    return DuplicateEntrySnafu { path }.fail();
                }
                children.insert(component.to_string(), TemplateNode::File);
                return Ok(());
            }

            // Intermediate component, ensure a directory node exists
            current = children
                .entry(component.to_string())
                .or_insert_with(|| TemplateNode::Directory {
                    children: LinkedHashMap::new(),
                });
        }

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum TemplateInsertError {
    #[snafu(display("Path '{}' contains an empty component", path))]
    EmptyNameError { path: String },
    #[snafu(display("Path '{}' traverses an existing file entry", path))]
    TraversesFileError { path: String },
    #[snafu(display("Entry '{}' is declared multiple times", path))]
    DuplicateEntryError { path: String },
}
