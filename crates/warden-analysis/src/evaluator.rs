//! Module for the evaluator implementation.

use warden_policy::Policy;

use crate::ImportMap;
use crate::Violation;

/// Evaluates a policy against an import map, returning every violation.
///
/// For each `(file, imported_module)` edge, in the order files and imports
/// appear in `imports`:
///
/// 1. A self-import (the file importing its own canonical module path) is
///    never a violation.
/// 2. Every rule whose `module` is a prefix of `file` governs it; multiple
///    rules may govern the same file, and all apply independently, in AST
///    order.
/// 3. For each governing rule, each `cannot_import` entry that is a prefix
///    of `imported_module` is a tentative violation, checked in AST order.
/// 4. The violation is cancelled if some `allow` entry is also a prefix of
///    `imported_module` and is strictly longer than the matched
///    `cannot_import` entry.
///
/// Evaluation is pure and stateless: the same `(policy, imports)` pair
/// always yields the same ordered violation list.
pub fn evaluate(policy: &Policy, imports: &ImportMap) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (file, imported_modules) in imports {
        for imported_module in imported_modules {
            if imported_module == file {
                continue;
            }

            for rule in &policy.rules {
                if !file.starts_with(rule.module.as_str()) {
                    continue;
                }

                for forbidden in &rule.cannot_import {
                    if !imported_module.starts_with(forbidden.as_str()) {
                        continue;
                    }

                    let overridden = rule
                        .allow
                        .iter()
                        .any(|allow| imported_module.starts_with(allow.as_str()) && allow.len() > forbidden.len());
                    if overridden {
                        continue;
                    }

                    violations.push(Violation {
                        file: file.clone(),
                        rule_module: rule.module.clone(),
                        forbidden_prefix: forbidden.clone(),
                        offending_import: imported_module.clone(),
                    });
                }
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use warden_policy::parse_str;

    use super::*;

    fn policy(source: &str) -> Policy {
        let (policy, errors) = parse_str(source);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        policy.unwrap()
    }

    fn import_map(entries: &[(&str, &[&str])]) -> ImportMap {
        entries
            .iter()
            .map(|(file, imports)| {
                (
                    (*file).to_string(),
                    imports.iter().map(|s| (*s).to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn s1_simple_forbidden_edge() {
        let policy = policy(r#"LANG "Go"; IMPORTRULE "a/domain" CANNOTIMPORT "a/data";"#);
        let imports = import_map(&[("a/domain/x", &["a/data/db"])]);
        let violations = evaluate(&policy, &imports);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].file, "a/domain/x");
        assert_eq!(violations[0].offending_import, "a/data/db");
    }

    #[test]
    fn s2_allow_override() {
        let policy = policy(
            r#"LANG "Go"; IMPORTRULE "a/domain" CANNOTIMPORT "a/data" ALLOW "a/data/detail";"#,
        );
        let imports = import_map(&[("a/domain/x", &["a/data/detail/y"])]);
        assert!(evaluate(&policy, &imports).is_empty());
    }

    #[test]
    fn s3_broader_allow_is_inert() {
        let policy =
            policy(r#"LANG "Go"; IMPORTRULE "a/domain" CANNOTIMPORT "a/data" ALLOW "a";"#);
        let imports = import_map(&[("a/domain/x", &["a/data/x"])]);
        assert_eq!(evaluate(&policy, &imports).len(), 1);
    }

    #[test]
    fn s4_import_base_expansion() {
        let policy = policy(
            r#"LANG "Go";
IMPORTBASE "p";
IMPORTRULE "[IMPORTBASE]/d" CANNOTIMPORT "[IMPORTBASE]/i";"#,
        );
        let imports = import_map(&[("p/d/f", &["p/i/g"])]);
        let violations = evaluate(&policy, &imports);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_module, "p/d");
    }

    #[test]
    fn s5_multi_rule_governance_in_ast_order() {
        let policy = policy(
            r#"LANG "Go";
IMPORTRULE "a" CANNOTIMPORT "x";
IMPORTRULE "a/b" CANNOTIMPORT "x";"#,
        );
        let imports = import_map(&[("a/b/c", &["x/y"])]);
        let violations = evaluate(&policy, &imports);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].rule_module, "a");
        assert_eq!(violations[1].rule_module, "a/b");
    }

    #[test]
    fn s6_clean_project_is_ok() {
        let policy = policy(r#"LANG "Go"; IMPORTRULE "a/domain" CANNOTIMPORT "a/infra";"#);
        let imports = import_map(&[("a/domain/x", &["a/domain/y"])]);
        assert!(evaluate(&policy, &imports).is_empty());
    }

    #[test]
    fn self_import_is_never_a_violation() {
        let policy = policy(r#"LANG "Go"; IMPORTRULE "a" CANNOTIMPORT "a";"#);
        let imports = import_map(&[("a/x", &["a/x"])]);
        assert!(evaluate(&policy, &imports).is_empty());
    }

    #[test]
    fn allow_shorter_than_forbidden_does_not_override() {
        let policy =
            policy(r#"LANG "Go"; IMPORTRULE "a" CANNOTIMPORT "a/data" ALLOW "a/dat";"#);
        let imports = import_map(&[("a/x", &["a/data/y"])]);
        assert_eq!(evaluate(&policy, &imports).len(), 1);
    }
}
