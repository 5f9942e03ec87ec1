//! Regenerate the equations reference (`src/equations/EQUATIONS.md`).
//!
//! ```bash
//! cargo run -p elec_core --bin gen-equations
//! ```
//!
//! The path is resolved against this crate's manifest directory, so the
//! binary can be run from anywhere in the workspace.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use elec_core::equations::{generate_equations_markdown, ALL_EQUATIONS};

fn output_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src").join("equations").join("EQUATIONS.md")
}

fn main() -> ExitCode {
    let markdown = generate_equations_markdown();
    let path = output_path();

    match fs::write(&path, &markdown) {
        Ok(()) => {
            println!("Wrote {} equations ({} bytes) to {}", ALL_EQUATIONS.len(), markdown.len(), path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: writing {}: {}", path.display(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_is_inside_crate() {
        let path = output_path();
        assert!(path.starts_with(env!("CARGO_MANIFEST_DIR")));
        assert!(path.ends_with("src/equations/EQUATIONS.md"));
        assert!(path.parent().is_some_and(|dir| dir.is_dir()));
    }
}
