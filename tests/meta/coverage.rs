//! Checks that the unit test tree declares the same modules as the library

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};
    use std::fs;
    use std::path::{Path, PathBuf};

    const LIBRARY_ROOT: &str = "src/lib.rs";
    const UNIT_ROOT: &str = "tests/unit/main.rs";

    /// Names declared as `mod name;` or `pub mod name;` in `file`
    fn declared_modules(file: &Path) -> Vec<String> {
        let content = fs::read_to_string(file).unwrap_or_default();
        content
            .lines()
            .filter_map(|line| {
                let line = line.trim();
                let rest = line
                    .strip_prefix("pub mod ")
                    .or_else(|| line.strip_prefix("mod "))?;
                Some(rest.strip_suffix(';')?.trim().to_string())
            })
            .collect()
    }

    /// Leaf modules reachable from a crate root, keyed by path (`lattice::diamond`)
    fn leaf_modules(root: &str) -> BTreeMap<String, PathBuf> {
        let root = Path::new(root);
        let dir = root.parent().unwrap_or_else(|| Path::new("."));
        let mut leaves = BTreeMap::new();
        walk(root, dir, "", &mut leaves);
        leaves
    }

    fn walk(file: &Path, dir: &Path, prefix: &str, leaves: &mut BTreeMap<String, PathBuf>) {
        for name in declared_modules(file) {
            let module = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}::{name}")
            };
            let nested = dir.join(&name).join("mod.rs");
            if nested.is_file() {
                walk(&nested, &dir.join(&name), &module, leaves);
            } else {
                leaves.insert(module, dir.join(format!("{name}.rs")));
            }
        }
    }

    /// Every `.rs` file below `dir` that is neither a crate root nor a `mod.rs`
    fn leaf_files(dir: &Path, found: &mut BTreeSet<PathBuf>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for path in entries.flatten().map(|entry| entry.path()) {
            if path.is_dir() {
                leaf_files(&path, found);
            } else if path.extension().is_some_and(|ext| ext == "rs")
                && !path.ends_with("main.rs")
                && !path.ends_with("mod.rs")
            {
                found.insert(path);
            }
        }
    }

    // Tests every library module has a unit test module and vice versa
    // Verified by deleting tests/unit/lattice/diamond.rs from the unit tree
    #[test]
    fn test_unit_tree_mirrors_library() {
        let library: BTreeSet<String> = leaf_modules(LIBRARY_ROOT).into_keys().collect();
        let unit: BTreeSet<String> = leaf_modules(UNIT_ROOT).into_keys().collect();
        assert!(!library.is_empty(), "no modules found from {LIBRARY_ROOT}");

        let untested: Vec<_> = library.difference(&unit).collect();
        let orphaned: Vec<_> = unit.difference(&library).collect();
        assert!(
            untested.is_empty() && orphaned.is_empty(),
            "library modules without unit tests: {untested:?}\nunit test modules without a library module: {orphaned:?}"
        );
    }

    // Tests no unit test file sits on disk without being declared
    // Verified by adding an undeclared file under tests/unit
    #[test]
    fn test_unit_files_are_declared() {
        let declared: BTreeSet<PathBuf> = leaf_modules(UNIT_ROOT).into_values().collect();
        let mut on_disk = BTreeSet::new();
        leaf_files(Path::new("tests/unit"), &mut on_disk);

        let undeclared: Vec<_> = on_disk.difference(&declared).collect();
        assert!(
            undeclared.is_empty(),
            "unit test files never compiled: {undeclared:?}"
        );
    }

    // Tests each unit test module holds a cfg(test) block with at least one test
    // Verified by removing the #[test] attributes from one file
    #[test]
    fn test_unit_files_contain_tests() {
        let empty: Vec<_> = leaf_modules(UNIT_ROOT)
            .into_iter()
            .filter(|(_, file)| {
                let content = fs::read_to_string(file).unwrap_or_default();
                !(content.contains("#[cfg(test)]") && content.contains("#[test]"))
            })
            .map(|(module, _)| module)
            .collect();

        assert!(empty.is_empty(), "unit test modules without tests: {empty:?}");
    }
}
