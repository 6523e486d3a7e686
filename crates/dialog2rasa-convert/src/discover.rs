use std::path::{Path, PathBuf};

use dialog2rasa_core::config::ConversionContext;
use walkdir::WalkDir;

use crate::error::ConvertError;

const EXAMPLE_MARKER: &str = "_usersays_";

/// `intents/*_usersays_<lang>.json`, sorted by file name.
pub fn example_files(ctx: &ConversionContext) -> Result<Vec<PathBuf>, ConvertError> {
    let suffix = ctx.example_suffix();
    json_files(&ctx.intents_dir, |stem| stem.ends_with(&suffix))
}

/// `entities/*_entries_<lang>.json`, sorted by file name.
pub fn entity_files(ctx: &ConversionContext) -> Result<Vec<PathBuf>, ConvertError> {
    let suffix = ctx.entries_suffix();
    json_files(&ctx.entities_dir, |stem| stem.ends_with(&suffix))
}

/// Intent definition files carrying responses: every `intents/*.json` that
/// is not a training example file of any language.
pub fn response_files(ctx: &ConversionContext) -> Result<Vec<PathBuf>, ConvertError> {
    json_files(&ctx.intents_dir, |stem| !stem.contains(EXAMPLE_MARKER))
}

/// File stem as an owned string, empty if the path has none.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn json_files(
    dir: &Path,
    keep_stem: impl Fn(&str) -> bool,
) -> Result<Vec<PathBuf>, ConvertError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        let is_json = path.extension().is_some_and(|e| e == "json");
        if entry.file_type().is_file() && is_json && keep_stem(&file_stem(path)) {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}
