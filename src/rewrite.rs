//! Import-line rewriting
//!
//! Detection is a whole-line substring heuristic, not a parse: a line counts
//! as an import statement when it contains both "import" and "from". The
//! heuristic mis-rewrites comments containing both words; it is kept as-is
//! for compatibility with the trees this tool has historically deployed.

use crate::manifest::ModuleDescriptor;

/// True if a line looks like an import statement.
pub fn is_import_line(line: &str) -> bool {
    line.contains("import") && line.contains("from")
}

/// Parent-directory markers for climbing `depth` levels back up to the
/// deploy root. Empty at depth 0.
pub fn relative_prefix(depth: usize) -> String {
    vec![".."; depth].join("/")
}

fn target_path(prefix: &str, main: &str) -> String {
    if prefix.is_empty() {
        main.to_string()
    } else {
        format!("{}/{}", prefix, main)
    }
}

/// Rewrite module references on one import line.
///
/// Each descriptor replaces the first textual occurrence of its name, in
/// descriptor list order, whether or not an earlier descriptor already
/// matched. Names occurring more than once on a line are replaced once.
pub fn rewrite_import_line(line: &str, depth: usize, modules: &[ModuleDescriptor]) -> String {
    let prefix = relative_prefix(depth);
    let mut line = line.to_string();
    for module in modules {
        line = line.replacen(&module.name, &target_path(&prefix, &module.main), 1);
    }
    line
}
