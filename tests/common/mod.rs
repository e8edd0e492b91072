use fstree::{DirNode, File};

/// Flat example tree: `/` holding abc.txt(10), cde.txt(20), def.pdf(30),
/// ghi.py(5) and uvw.java(10), no subdirectories.
pub fn sample_root() -> DirNode {
    DirNode::new("/").with_files(vec![
        File::new("abc", "txt", 10),
        File::new("cde", "txt", 20),
        File::new("def", "pdf", 30),
        File::new("ghi", "py", 5),
        File::new("uvw", "java", 10),
    ])
}

/// Three levels with file names encoding their position in the walk:
/// r1/r2 at the root, a1 and b1 one level down, c1 below a.
pub fn nested_root() -> DirNode {
    let a = DirNode::new("a")
        .with_files(vec![File::new("a1", "txt", 1)])
        .with_subdirectories(vec![
            DirNode::new("c").with_files(vec![File::new("c1", "txt", 3)])
        ]);
    let b = DirNode::new("b").with_files(vec![File::new("b1", "txt", 2)]);
    DirNode::new("/")
        .with_files(vec![File::new("r1", "txt", 10), File::new("r2", "md", 20)])
        .with_subdirectories(vec![a, b])
}
