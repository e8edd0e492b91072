use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single file in the simulated tree. The extension is kept out of the
/// name, so `abc.txt` is stored as name `"abc"` with extension `"txt"`.
/// Immutable once built.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    extension: String,
    size: u64,
}

impl File {
    pub fn new(name: impl Into<String>, extension: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
            size,
        }
    }

    /// Builds a `File` from a full file name, splitting the extension off
    /// the last dot.
    pub fn from_file_name(file_name: &str, size: u64) -> Self {
        let (name, extension) = split_file_name(file_name);
        Self::new(name, extension, size)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Splits `"abc.txt"` into `("abc", "txt")`. A name without a dot, or
/// with nothing after the last dot, keeps an empty extension.
pub fn split_file_name(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(pos) if pos + 1 < file_name.len() => (&file_name[..pos], &file_name[pos + 1..]),
        Some(pos) => (&file_name[..pos], ""),
        None => (file_name, ""),
    }
}

/// A directory in the simulated tree. Each node exclusively owns its
/// children, so the structure is acyclic by construction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DirNode {
    pub name: String,
    pub is_directory: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subdirectories: Vec<DirNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,
}

impl DirNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
            subdirectories: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn with_files(mut self, files: Vec<File>) -> Self {
        self.files = files;
        self
    }

    pub fn with_subdirectories(mut self, subdirectories: Vec<DirNode>) -> Self {
        self.subdirectories = subdirectories;
        self
    }

    pub fn push_file(&mut self, file: File) {
        self.files.push(file);
    }

    pub fn push_dir(&mut self, dir: DirNode) {
        self.subdirectories.push(dir);
    }

    /// Walks the tree breadth first: this node, then its subdirectories
    /// in listed order, then theirs, level by level.
    pub fn bfs(&self) -> Bfs<'_> {
        Bfs {
            queue: VecDeque::from([self]),
        }
    }

    /// Number of files in the subtree rooted here.
    pub fn file_count(&self) -> usize {
        self.bfs().map(|node| node.files.len()).sum()
    }
}

pub struct Bfs<'a> {
    queue: VecDeque<&'a DirNode>,
}

impl<'a> Iterator for Bfs<'a> {
    type Item = &'a DirNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(&node.subdirectories);
        Some(node)
    }
}
