use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads the request path list: one whitespace-delimited token per line,
/// file order preserved. The position of each path becomes its case number.
pub fn read_path_list(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading path list {}", path.display()))?;
    Ok(contents
        .split_whitespace()
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn preserves_file_order() -> Result<()> {
        let temp = tempdir()?;
        let list = temp.path().join("paths.txt");
        fs::write(&list, "/a.jpg\n/b.png\n/c?w=10\n")?;

        let paths = read_path_list(&list)?;
        assert_eq!(paths, vec!["/a.jpg", "/b.png", "/c?w=10"]);
        Ok(())
    }

    #[test]
    fn skips_blank_lines() -> Result<()> {
        let temp = tempdir()?;
        let list = temp.path().join("paths.txt");
        fs::write(&list, "\n/a.jpg\n\n\n/b.png\n")?;

        let paths = read_path_list(&list)?;
        assert_eq!(paths, vec!["/a.jpg", "/b.png"]);
        Ok(())
    }

    #[test]
    fn empty_file_yields_no_paths() -> Result<()> {
        let temp = tempdir()?;
        let list = temp.path().join("paths.txt");
        fs::write(&list, "")?;

        assert!(read_path_list(&list)?.is_empty());
        Ok(())
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = read_path_list(Path::new("no-such-list.txt")).unwrap_err();
        assert!(format!("{err}").contains("no-such-list.txt"));
    }
}
