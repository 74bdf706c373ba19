//! Import extraction for Go source files.
//!
//! Go imports appear either grouped, `import ( "a/b" "c/d" )`, or singly,
//! `import "a/b"`. Both forms are recognized; aliases and blank/dot imports
//! (`alias "a/b"`, `_ "a/b"`, `. "a/b"`) are handled transparently since only
//! the quoted path itself is captured.

use std::fs;
use std::path::Path;

use regex::Regex;
use warden_analysis::ImportMap;

use crate::ExtractError;
use crate::walk::find_files;
use crate::walk::module_key;

/// Extracts import edges for every `.go` file under `root`.
pub fn extract(root: &Path, import_base: &str) -> Result<ImportMap, ExtractError> {
    let block_re = Regex::new(r"(?s)import\s*\(([^)]*)\)").expect("valid regex");
    let single_re = Regex::new(r#"import\s+(?:\w+\s+|\.\s+|_\s+)?"([^"]*)""#).expect("valid regex");
    let quoted_re = Regex::new(r#""([^"]*)""#).expect("valid regex");

    let mut imports = ImportMap::new();
    for path in find_files(root, "go")? {
        let source = fs::read_to_string(&path).map_err(|source| ExtractError::Read {
            path: path.clone(),
            source,
        })?;

        // Imports found inside a grouped `import (...)` block are excluded
        // from the single-import scan by blanking the block's text first,
        // so a quoted path inside the block is never counted twice.
        let mut scratch = source.clone();
        let mut file_imports = Vec::new();
        for captures in block_re.captures_iter(&source) {
            let block = &captures[1];
            for quoted in quoted_re.captures_iter(block) {
                file_imports.push(quoted[1].to_string());
            }
            let whole = captures.get(0).expect("group 0 always matches");
            scratch.replace_range(whole.range(), &" ".repeat(whole.len()));
        }
        for captures in single_re.captures_iter(&scratch) {
            file_imports.push(captures[1].to_string());
        }

        imports.insert(module_key(root, &path, import_base), file_imports);
    }
    Ok(imports)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn grouped_and_single_imports() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("main.go"),
            r#"package main

import (
	"fmt"
	alias "example.com/project/data"
	_ "example.com/project/infra/side"
)

import "example.com/project/domain"

func main() {}
"#,
        )
        .unwrap();

        let imports = extract(dir.path(), "p").unwrap();
        let (_, file_imports) = imports.iter().next().unwrap();
        assert_eq!(
            file_imports,
            &vec![
                "fmt".to_string(),
                "example.com/project/data".to_string(),
                "example.com/project/infra/side".to_string(),
                "example.com/project/domain".to_string(),
            ]
        );
    }

    #[test]
    fn module_key_joins_import_base_and_relative_path() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("domain")).unwrap();
        fs::write(dir.path().join("domain").join("file.go"), "package domain").unwrap();

        let imports = extract(dir.path(), "example.com/project").unwrap();
        assert!(imports.contains_key("example.com/project/domain/file.go"));
    }
}
