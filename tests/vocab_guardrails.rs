use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use dubbogen_core::lang::runtime::RUNTIME_MODULES;
use dubbogen_core::lang::types::GO_TYPES;

/// Guardrail against reintroducing stringly-typed Go vocabulary checks.
///
/// This is intentionally a **coarse** safety net. It looks for suspicious patterns like `== "int32"` or
/// `"string" => ...` in Rust source files, and for runtime import paths spelled out inline, where callers are expected
/// to go through the `dubbogen_core::lang` registries instead.
///
/// Notes:
/// - Registries (`crates/dubbogen_core/src/lang/**`) and tests are allowed to spell things out.
/// - Comments are ignored.
#[test]
fn no_new_stringly_vocab_checks_in_rust_sources() {
    let root = repo_root();
    let spellings = type_spellings();
    let mut offenders: Vec<(PathBuf, usize, String)> = Vec::new();

    let targets = [root.join("src"), root.join("crates")];
    for dir in targets {
        if dir.exists() {
            scan_dir(&root, &dir, &spellings, &mut offenders);
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::new();
        msg.push_str("Found potential stringly-typed vocabulary checks. Prefer dubbogen_core registries.\n\n");
        for (path, line_no, line) in offenders.into_iter().take(80) {
            msg.push_str(&format!(
                "- {}:{}: {}\n",
                path.strip_prefix(&root).unwrap_or(&path).display(),
                line_no,
                line.trim()
            ));
        }
        panic!("{msg}");
    }
}

#[test]
fn runtime_import_paths_share_one_root() {
    for module in RUNTIME_MODULES.iter().filter(|m| !m.std) {
        assert!(
            module.path.starts_with("dubbo.apache.org/dubbo-go/v3"),
            "{} is outside the runtime root",
            module.path
        );
    }
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn type_spellings() -> Vec<&'static str> {
    let mut set: BTreeSet<&'static str> = BTreeSet::new();
    for t in GO_TYPES {
        set.insert(t.canonical);
        for &a in t.aliases {
            set.insert(a);
        }
    }
    set.into_iter().collect()
}

fn is_allowed_file(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    if !rel.ends_with(".rs") {
        return true;
    }
    // Registries define the spellings; allow them.
    if rel.starts_with("crates/dubbogen_core/src/lang/") {
        return true;
    }
    // Tests can mention spellings directly.
    if rel.starts_with("tests/") || rel.starts_with("crates/dubbogen_core/tests/") {
        return true;
    }
    false
}

fn scan_dir(root: &Path, dir: &Path, spellings: &[&'static str], offenders: &mut Vec<(PathBuf, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan_dir(root, &path, spellings, offenders);
            continue;
        }
        if is_allowed_file(root, &path) {
            continue;
        }
        let Ok(contents) = fs::read_to_string(&path) else {
            continue;
        };
        // Unit test modules sit at the bottom of each file; stop scanning there.
        let production = contents.split("#[cfg(test)]").next().unwrap_or("");
        for (idx, line) in production.lines().enumerate() {
            if is_suspicious_line(line, spellings) {
                offenders.push((path.clone(), idx + 1, line.to_string()));
            }
        }
    }
}

fn is_suspicious_line(line: &str, spellings: &[&'static str]) -> bool {
    // Avoid false positives in comments/docstrings.
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") {
        return false;
    }

    if line.contains("\"dubbo.apache.org") {
        return true;
    }

    for s in spellings {
        let eq = format!("== \"{s}\"");
        let arm = format!("\"{s}\" =>");
        if line.contains(&eq) || line.contains(&arm) {
            return true;
        }
    }

    false
}
