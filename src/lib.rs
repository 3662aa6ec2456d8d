//! treels - ls for serialized directory trees

pub mod error;
pub mod listing;
pub mod output;
pub mod settings;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{Error, Result};
pub use listing::{Detail, Entry, ListingConfig, ListingEngine, TypeFilter};
pub use output::{
    ConsoleFormatter, OutputConfig, OutputMode, TreeFormatter, format_size, format_timestamp,
    print_json,
};
pub use settings::{DEFAULT_DOCUMENT, Settings};
pub use tree::{Node, NodeKind, TreeStore, resolve};

/// Load the document, resolve the target and write it in the configured mode.
pub fn run(settings: &Settings, config: ListingConfig, output: &OutputConfig) -> Result<()> {
    let store = TreeStore::load(&settings.document)?;
    if !store.root().is_dir() {
        eprintln!(
            "treels: warning: root of '{}' is a file, not a directory",
            settings.document.display()
        );
    }
    let target = store.resolve(&settings.target)?;
    let detail = config.detail;
    let engine = ListingEngine::new(config);

    match output.mode {
        OutputMode::Lines => {
            let entries = engine.list(target, &settings.target)?;
            ConsoleFormatter::stdout(output, detail).write_entries(&entries)?;
        }
        OutputMode::Json => {
            let entries = engine.list(target, &settings.target)?;
            print_json(&entries)?;
        }
        OutputMode::Tree => {
            let label = if target.is_dir() {
                tree_label(&settings.target, target)
            } else {
                listing::leaf_label(target, &settings.target, detail)
            };
            TreeFormatter::stdout(output, detail).write_tree(&engine, target, &label)?;
        }
    }
    Ok(())
}

fn tree_label(expr: &str, node: &Node) -> String {
    if tree::path_segments(expr).is_empty() {
        node.name.clone()
    } else {
        expr.to_string()
    }
}
