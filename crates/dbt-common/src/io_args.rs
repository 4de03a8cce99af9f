use std::path::{Path, PathBuf};

// ----------------------------------------------------------------------------------------------
// IO Args
//
// Trimmed down to the subset the selection core actually consumes: the project root used to
// resolve relative paths for the `path` selector method. The full invocation-level IoArgs in
// dbt also carries logging/output/build-cache configuration; none of that is needed here.
#[derive(Debug, Default, Clone)]
pub struct IoArgs {
    pub in_dir: PathBuf,
    pub out_dir: PathBuf,
}

impl IoArgs {
    pub fn new(in_dir: impl Into<PathBuf>) -> Self {
        Self {
            in_dir: in_dir.into(),
            out_dir: PathBuf::new(),
        }
    }

    pub fn is_generated_file(&self, rel_path: &Path) -> bool {
        let out_dir_last = self.out_dir.components().next_back();
        let rel_first = rel_path.components().next();
        out_dir_last.is_some() && out_dir_last == rel_first
    }
}
