use derive_new::new;
use std::path::PathBuf;

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: Vec<u8>,
}

impl FileSpec {
    pub fn text(path: PathBuf, content: &str) -> Self {
        Self::new(path, content.as_bytes().to_vec())
    }
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn write_generated_lines(path: PathBuf, lines_count: usize) -> Vec<String> {
    use fake::{Fake, faker::lorem::en::Words};

    let lines = (0..lines_count)
        .map(|i| format!("{i}: {}", Words(2..5).fake::<Vec<String>>().join(" ")))
        .collect::<Vec<_>>();

    let mut content = lines.join("\n");
    content.push('\n');
    write_file(FileSpec::text(path, &content));

    lines
}
