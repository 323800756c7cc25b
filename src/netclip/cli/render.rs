use colored::*;
use std::path::Path;

/// Reports a saved clip.
pub fn print_saved(path: &Path) {
    println!("{}", saved_message(path));
}

fn saved_message(path: &Path) -> ColoredString {
    format!("Saved to {}", path.display()).green()
}
