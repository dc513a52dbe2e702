use std::path::Path;

/// Source argument that means "read standard input".
pub const STDIN_SOURCE: &str = "-";

pub fn is_stdin(source: &str) -> bool {
    source == STDIN_SOURCE
}

pub fn clean_path_str(s: &str) -> &str {
    #[cfg(windows)]
    {
        if let Some(stripped) = s.strip_prefix(r"\\?\") {
            return stripped;
        }
    }
    s
}

/// Lower-cased file extension, if any.
pub fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_lower_cased() {
        assert_eq!(extension(Path::new("page.HTML")), Some("html".to_string()));
        assert_eq!(extension(Path::new("dir/data.json")), Some("json".to_string()));
        assert_eq!(extension(Path::new("Makefile")), None);
    }

    #[test]
    fn test_is_stdin() {
        assert!(is_stdin("-"));
        assert!(!is_stdin("./-"));
    }
}
