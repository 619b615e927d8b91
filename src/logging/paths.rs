use std::fs;
use std::path::PathBuf;

/// Create the log directory (and parents) if needed and return its path
pub fn ensure_log_directory(dir: &str) -> Result<PathBuf, std::io::Error> {
    let path = PathBuf::from(dir);

    if !path.exists() {
        fs::create_dir_all(&path)?;
    }

    if !path.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Log path is not a directory: {}", path.display()),
        ));
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_nested_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");

        let path = ensure_log_directory(nested.to_str().unwrap()).unwrap();

        assert!(path.is_dir());
        assert_eq!(path, nested);
    }

    #[test]
    fn test_existing_directory_is_fine() {
        let temp = TempDir::new().unwrap();
        let path = ensure_log_directory(temp.path().to_str().unwrap()).unwrap();
        assert!(path.is_dir());
    }

    #[test]
    fn test_file_in_the_way_is_an_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("not-a-dir");
        fs::write(&file, b"cluck").unwrap();

        assert!(ensure_log_directory(file.to_str().unwrap()).is_err());
    }
}
