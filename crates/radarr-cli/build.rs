use std::path::Path;

use clap::CommandFactory;

// Pull in cli.rs directly -- it only depends on clap + clap_complete
// (both listed as build-dependencies), so this compiles cleanly without
// dragging in the rest of the crate.
#[path = "src/cli.rs"]
mod cli;

fn main() {
    // Re-run if the CLI definitions change.
    println!("cargo::rerun-if-changed=src/cli.rs");

    let out_dir = std::env::var_os("OUT_DIR").expect("OUT_DIR not set by Cargo");
    let man_dir = Path::new(&out_dir).join("man");
    std::fs::create_dir_all(&man_dir).expect("failed to create man output directory");

    render_manpage_tree(&cli::Cli::command(), &man_dir);
}

/// Write `<name>.1` for a command, then recurse into visible subcommands
/// as `<name>-<sub>.1`.
fn render_manpage_tree(cmd: &clap::Command, dir: &Path) {
    let name = cmd.get_name().to_owned();

    let mut page = Vec::new();
    clap_mangen::Man::new(cmd.clone())
        .render(&mut page)
        .unwrap_or_else(|e| panic!("failed to render man page for `{name}`: {e}"));
    std::fs::write(dir.join(format!("{name}.1")), page)
        .unwrap_or_else(|e| panic!("failed to write man page for `{name}`: {e}"));

    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        let sub = sub.clone().name(format!("{name}-{}", sub.get_name()));
        render_manpage_tree(&sub, dir);
    }
}
