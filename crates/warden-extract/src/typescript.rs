//! Import extraction for TypeScript source files.
//!
//! Recognizes `import ... from "module"`, bare `import "module"` (for
//! side-effect-only imports), and `export ... from "module"` re-exports.
//! Both single and double quotes are accepted.

use std::fs;
use std::path::Path;

use regex::Regex;
use warden_analysis::ImportMap;

use crate::ExtractError;
use crate::walk::find_files;
use crate::walk::module_key;

/// Extracts import edges for every `.ts` file under `root`.
pub fn extract(root: &Path, import_base: &str) -> Result<ImportMap, ExtractError> {
    // The `from` alternative is tried first at each position; the bare
    // alternative only matches when a quote immediately follows `import`,
    // so the two never contend for the same text.
    let import_re = Regex::new(
        r#"(?:(?:import|export)\s[^;\n]*?\bfrom\s+['"]([^'"]+)['"])|(?:import\s+['"]([^'"]+)['"])"#,
    )
    .expect("valid regex");

    let mut imports = ImportMap::new();
    for path in find_files(root, "ts")? {
        let source = fs::read_to_string(&path).map_err(|source| ExtractError::Read {
            path: path.clone(),
            source,
        })?;

        let file_imports = import_re
            .captures_iter(&source)
            .map(|captures| {
                captures
                    .get(1)
                    .or_else(|| captures.get(2))
                    .expect("one alternative always captures")
                    .as_str()
                    .to_string()
            })
            .collect();

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
    fn from_and_bare_and_reexports() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("index.ts"),
            r#"import { widget } from "example.com/project/domain";
import "example.com/project/infra/polyfill";
export { thing } from 'example.com/project/data';
"#,
        )
        .unwrap();

        let imports = extract(dir.path(), "p").unwrap();
        let (_, file_imports) = imports.iter().next().unwrap();
        assert_eq!(
            file_imports,
            &vec![
                "example.com/project/domain".to_string(),
                "example.com/project/infra/polyfill".to_string(),
                "example.com/project/data".to_string(),
            ]
        );
    }
}
