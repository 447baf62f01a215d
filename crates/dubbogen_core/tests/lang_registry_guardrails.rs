use std::collections::HashMap;

use dubbogen_core::idents;
use dubbogen_core::lang::runtime::{self, RUNTIME_MODULES};
use dubbogen_core::lang::types::{self, GO_TYPES, GoTypeKind, TypeShape};
use dubbogen_core::lang::{bindings, keywords};

#[test]
fn type_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, types::GoTypeId> = HashMap::new();

    for info in GO_TYPES {
        assert_eq!(
            types::from_str(info.canonical),
            Some(info.id),
            "type canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(types::as_str(info.id), info.canonical, "as_str mismatch for {:?}", info.id);

        for &spelling in std::iter::once(&info.canonical).chain(info.aliases) {
            if let Some(prev) = seen.insert(spelling, info.id) {
                panic!("duplicate type spelling {spelling:?}: {prev:?} and {:?}", info.id);
            }
            assert_eq!(types::from_str(spelling), Some(info.id));
            assert_eq!(types::classify(spelling), TypeShape::Basic(info.id));
        }
    }
}

#[test]
fn zero_values_match_kind() {
    for info in GO_TYPES {
        let expected = match info.kind {
            GoTypeKind::Boolean => "false",
            GoTypeKind::String => "\"\"",
            GoTypeKind::Integer | GoTypeKind::Float | GoTypeKind::Complex => "0",
        };
        assert_eq!(info.zero, expected, "zero value of {}", info.canonical);
        assert_eq!(types::zero_value(info.id), info.zero);
    }
}

#[test]
fn generated_bindings_are_declarable_and_unique() {
    let mut seen = std::collections::HashSet::new();
    for &name in bindings::GENERATED_BINDINGS.iter().chain(bindings::PREDECLARED_USES) {
        assert!(seen.insert(name), "duplicate binding {name}");
        assert!(idents::is_declarable(name), "binding {name} is not declarable");
        assert!(bindings::is_bound(name));
        assert!(types::from_str(name).is_none(), "binding {name} is a basic type");
        assert!(
            RUNTIME_MODULES.iter().all(|m| m.package != name),
            "binding {name} is a runtime package"
        );
    }
}

#[test]
fn basic_types_are_not_keywords() {
    for info in GO_TYPES {
        assert!(!keywords::is_keyword(info.canonical), "{} registered as keyword", info.canonical);
        assert!(idents::is_declarable(info.canonical));
    }
}

#[test]
fn keywords_unique_and_lowercase() {
    let mut seen = std::collections::HashSet::new();
    for &kw in keywords::GO_KEYWORDS {
        assert!(seen.insert(kw), "duplicate keyword {kw}");
        assert!(kw.chars().all(|c| c.is_ascii_lowercase()), "keyword {kw} is not lowercase");
    }
    assert_eq!(keywords::GO_KEYWORDS.len(), 25);
}

#[test]
fn runtime_modules_unique_and_std_first() {
    let mut packages = std::collections::HashSet::new();
    let mut seen_third_party = false;
    for module in RUNTIME_MODULES {
        assert!(packages.insert(module.package), "duplicate package name {}", module.package);
        assert!(
            module.path.ends_with(module.package) || module.path == runtime::DUBBO_GO_ROOT,
            "package name {} does not match import path {}",
            module.package,
            module.path
        );
        if module.std {
            assert!(!seen_third_party, "std module {} listed after third-party modules", module.path);
        } else {
            seen_third_party = true;
            assert!(module.path.starts_with(runtime::DUBBO_GO_ROOT));
        }
    }
}
