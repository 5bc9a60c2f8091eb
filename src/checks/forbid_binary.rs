//! Forbid binary files
//!
//! The hook runner hands this check only the files it classified as binary,
//! so every argument is a violation. The files are not opened.

use super::CheckStatus;
use console::style;
use std::io::{self, Write};

/// Report each file as a binary file on `err`.
///
/// No files: passes silently. Otherwise one
/// `[ERROR] Found binary file: <FILE>` line per file and a failure.
pub fn run<W: Write>(files: &[String], err: &mut W, color: bool) -> io::Result<CheckStatus> {
    if files.is_empty() {
        return Ok(CheckStatus::Passed);
    }

    let tag = if color {
        style("ERROR").red().bold().force_styling(true).to_string()
    } else {
        "ERROR".to_string()
    };

    for file in files {
        writeln!(err, "[{tag}] Found binary file: {file}")?;
    }
    err.flush()?;
    Ok(CheckStatus::Failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(files: &[&str]) -> (CheckStatus, String) {
        let files: Vec<String> = files.iter().map(|f| f.to_string()).collect();
        let mut err = Vec::new();
        let status = run(&files, &mut err, false).unwrap();
        (status, String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_no_files_passes_silently() {
        let (status, output) = check(&[]);
        assert_eq!(status, CheckStatus::Passed);
        assert_eq!(status.code(), 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_single_file_fails() {
        let (status, output) = check(&["a.png"]);
        assert_eq!(status, CheckStatus::Failed);
        assert_eq!(status.code(), 1);
        assert_eq!(output, "[ERROR] Found binary file: a.png\n");
    }

    #[test]
    fn test_one_line_per_file() {
        let (status, output) = check(&["a.png", "b.jpg"]);
        assert_eq!(status.code(), 1);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "[ERROR] Found binary file: a.png",
                "[ERROR] Found binary file: b.jpg",
            ]
        );
    }

    #[test]
    fn test_colored_output_keeps_message_text() {
        let files = vec!["assets/logo.ico".to_string()];
        let mut err = Vec::new();
        run(&files, &mut err, true).unwrap();

        let output = String::from_utf8(err).unwrap();
        assert!(output.contains("Found binary file: assets/logo.ico"));
        assert!(output.contains("ERROR"));
    }

    #[test]
    fn test_paths_with_spaces_are_kept_verbatim() {
        let (_, output) = check(&["docs/My Diagram.pdf"]);
        assert_eq!(output, "[ERROR] Found binary file: docs/My Diagram.pdf\n");
    }
}
