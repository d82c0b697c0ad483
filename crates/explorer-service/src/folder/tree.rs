//! Flat-to-tree materialization of the folder table.

use std::collections::HashMap;

use explorer_core::types::FolderId;
use explorer_entity::folder::{Folder, FolderNode};

/// Builds the forest of root nodes from an unordered list of folders.
///
/// Folders are held in an arena and addressed by index; children are
/// bucketed by parent id and nodes are assembled bottom-up with an explicit
/// stack, so arbitrarily deep hierarchies do not recurse. A folder whose
/// parent is not in `folders` is unreachable from any root and is dropped.
pub fn build_forest(mut folders: Vec<Folder>) -> Vec<FolderNode> {
    folders.sort_by(Folder::display_order);

    let index: HashMap<FolderId, usize> = folders
        .iter()
        .enumerate()
        .map(|(i, f)| (f.id, i))
        .collect();

    let mut roots: Vec<usize> = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); folders.len()];
    for (i, folder) in folders.iter().enumerate() {
        match folder.parent_id {
            None => roots.push(i),
            Some(parent_id) => {
                if let Some(&p) = index.get(&parent_id) {
                    children[p].push(i);
                }
            }
        }
    }

    let mut arena: Vec<Option<Folder>> = folders.into_iter().map(Some).collect();
    let mut built: Vec<Option<FolderNode>> = vec![None; arena.len()];

    // Post-order: a node is finished once all of its children are.
    let mut stack: Vec<(usize, bool)> = roots.iter().rev().map(|&r| (r, false)).collect();
    while let Some((i, expanded)) = stack.pop() {
        if !expanded {
            stack.push((i, true));
            stack.extend(children[i].iter().rev().map(|&c| (c, false)));
            continue;
        }

        let Some(folder) = arena[i].take() else {
            continue;
        };
        let kids = children[i]
            .iter()
            .filter_map(|&c| built[c].take())
            .collect();
        built[i] = Some(FolderNode {
            folder,
            children: kids,
        });
    }

    roots.into_iter().filter_map(|r| built[r].take()).collect()
}
