use crate::format::TableFormat;
use std::path::{Path, PathBuf};

const FALLBACK_STEM: &str = "output";

/// `<dir>/<stem><suffix>.<ext>` next to the input file.
pub fn default_output_path(input: &Path, suffix: &str, format: TableFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_STEM.to_string());
    let file_name = format!("{}{}.{}", stem, suffix, format.extension());
    match input.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}
