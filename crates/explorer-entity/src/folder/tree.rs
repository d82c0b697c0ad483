//! Folder tree structures for hierarchical display.

use serde::{Deserialize, Serialize};

use explorer_core::types::FolderId;

use super::model::Folder;

/// A node in a folder tree: the folder itself plus its nested children.
///
/// Serializes as the folder's own fields with an extra `children` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// The folder at this node.
    #[serde(flatten)]
    pub folder: Folder,
    /// Child folder nodes.
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Create a leaf node.
    pub fn leaf(folder: Folder) -> Self {
        Self {
            folder,
            children: Vec::new(),
        }
    }

    /// The ID of the folder at this node.
    pub fn id(&self) -> FolderId {
        self.folder.id
    }

    /// Total number of nodes beneath this one.
    pub fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&FolderNode> = vec![self];
        while let Some(node) = stack.pop() {
            count += node.children.len();
            stack.extend(node.children.iter());
        }
        count
    }

    /// Find the node for `id` in this subtree.
    pub fn find(&self, id: FolderId) -> Option<&FolderNode> {
        let mut stack: Vec<&FolderNode> = vec![self];
        while let Some(node) = stack.pop() {
            if node.id() == id {
                return Some(node);
            }
            stack.extend(node.children.iter());
        }
        None
    }
}
