/*!
Source lint for the `ui` crate.

- Every `core` module opens with a `//!` summary.
- Components write `role` and ARIA attributes in the typed form
  (`role: "img"`, `aria_label: …`), never as quoted custom attributes.
*/

use std::fs;
use std::path::{Path, PathBuf};

fn rust_files(dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap().flatten() {
        let path = entry.path();
        if path.is_dir() {
            rust_files(&path, out);
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
            out.push(path);
        }
    }
}

fn src_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src")
}

#[test]
fn core_modules_are_documented() {
    let mut files = Vec::new();
    rust_files(&src_dir().join("core"), &mut files);
    assert!(files.len() >= 10, "core has {} modules", files.len());

    let undocumented: Vec<_> = files
        .iter()
        .filter(|path| !fs::read_to_string(path).unwrap().starts_with("//!"))
        .collect();
    assert!(undocumented.is_empty(), "missing //! summary: {undocumented:?}");
}

#[test]
fn accessibility_attributes_are_typed() {
    let mut files = Vec::new();
    rust_files(&src_dir(), &mut files);

    let mut quoted = Vec::new();
    for path in &files {
        let source = fs::read_to_string(path).unwrap();
        for (number, line) in source.lines().enumerate() {
            let trimmed = line.trim_start();
            if trimmed.starts_with("\"role\":") || trimmed.starts_with("\"aria-") {
                quoted.push(format!("{}:{}", path.display(), number + 1));
            }
        }
    }
    assert!(quoted.is_empty(), "quoted attributes at {quoted:?}");
}
