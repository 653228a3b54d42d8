//! CLI output formatting.
//!
//! Format functions are pure and return the line as a `String` so tests can
//! assert on exact output; the `print_*`/`eprint_*` wrappers do the I/O.
//! Progress goes to stdout (one line per processed image), skip notices to
//! stderr, so they stay separable when redirected.

use std::fmt::Display;

/// Progress line for one processed thumbnail: `[<index>] <basename>`.
pub fn format_progress(index: usize, basename: &str) -> String {
    format!("[{index}] {basename}")
}

/// Skip notice for one failed source file.
pub fn format_skip(file_name: &str, reason: &impl Display) -> String {
    format!("(skipping {file_name}) Error: {reason}")
}

pub fn print_progress(index: usize, basename: &str) {
    println!("{}", format_progress(index, basename));
}

pub fn eprint_skip(file_name: &str, reason: &impl Display) {
    eprintln!("{}", format_skip(file_name, reason));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_line_shape() {
        assert_eq!(format_progress(0, "photo1"), "[0] photo1");
        assert_eq!(format_progress(12, "dusk"), "[12] dusk");
    }

    #[test]
    fn skip_line_carries_the_reason() {
        let line = format_skip("broken.jpg", &"decode failed");
        assert_eq!(line, "(skipping broken.jpg) Error: decode failed");
    }
}
