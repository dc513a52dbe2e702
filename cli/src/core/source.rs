use crate::core::error::HlError;
use crate::core::paths::{clean_path_str, is_stdin};
use crate::debug_log;
use std::io::Read;
use std::path::Path;

/// Reads a snippet from a file, or from stdin when `source` is `-`.
pub fn read_source(source: &str) -> Result<String, HlError> {
    if is_stdin(source) {
        let mut code = String::new();
        std::io::stdin().read_to_string(&mut code)?;
        debug_log!("Read {} bytes from stdin", code.len());
        return Ok(code);
    }

    let path = Path::new(source);
    if !path.exists() {
        return Err(HlError::SourceNotFound(source.to_string()));
    }
    if path.is_dir() {
        return Err(HlError::Validation(format!(
            "Source is a directory: {}",
            clean_path_str(source)
        )));
    }

    let code = std::fs::read_to_string(path)?;
    debug_log!("Read {} bytes from {}", code.len(), clean_path_str(source));
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source() {
        let result = read_source("definitely/not/here.js");
        assert!(matches!(result, Err(HlError::SourceNotFound(_))));
    }

    #[test]
    fn test_directory_source() {
        let dir = std::env::temp_dir();
        let result = read_source(dir.to_str().unwrap());
        assert!(matches!(result, Err(HlError::Validation(_))));
    }

    #[test]
    fn test_reads_file() {
        let path = std::env::temp_dir().join(format!("hl_source_{}.js", std::process::id()));
        std::fs::write(&path, "let a = 1;\n").unwrap();
        let code = read_source(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(code, "let a = 1;\n");
    }
}
