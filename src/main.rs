use anyhow::Result;
use fsfind::{find_files, Condition, FilterArg, Filters};
use fstree::{DirNode, File};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

fn main() -> Result<()> {
    let builder = tracing_subscriber::fmt();
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        builder.with_env_filter(filter).init();
    } else {
        builder.with_max_level(LevelFilter::INFO).init();
    }

    let root = DirNode::new("/").with_files(vec![
        File::new("abc", "txt", 10),
        File::new("cde", "txt", 20),
        File::new("def", "pdf", 30),
        File::new("ghi", "py", 5),
        File::new("uvw", "java", 10),
    ]);
    println!("Searching {} files under {:?}", root.file_count(), root.name);

    let by_name = Filters::new().with("Name", FilterArg::value("abc"));
    println!("name == \"abc\" -> {:?}", find_files(&root, &by_name, None)?);

    let by_size = Filters::new().with("Size", FilterArg::size(10, ">="));
    println!("size >= 10 -> {:?}", find_files(&root, &by_size, None)?);

    let java_or_large = Filters::new()
        .with("Extension", FilterArg::value("java"))
        .with("Size", FilterArg::size(10, ">="));
    println!(
        "extension == \"java\" OR size >= 10 -> {:?}",
        find_files(&root, &java_or_large, Some(Condition::Or))?
    );
    println!(
        "extension == \"java\" AND size >= 10 -> {:?}",
        find_files(&root, &java_or_large, Some(Condition::And))?
    );

    Ok(())
}
