//! File I/O for puzzle input and solve reports.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Reads a puzzle input file into lines, dropping trailing blank lines.
pub fn read_lines(path: impl AsRef<Path>) -> std::io::Result<Vec<String>> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines().collect::<std::io::Result<Vec<_>>>()?;

    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    Ok(lines)
}

/// Turns static sample lines into the owned form puzzles consume.
pub fn owned_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

/// Writes a text report, replacing any existing file.
pub fn save_report(path: impl AsRef<Path>, report: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(report.as_bytes())?;
    if !report.ends_with('\n') {
        writeln!(file)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_roundtrips_through_read_lines() {
        let path = std::env::temp_dir().join(format!("frontier-input-{}.txt", std::process::id()));
        save_report(&path, "10\n7,4\n\n").unwrap();

        let lines = read_lines(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(lines, vec!["10".to_string(), "7,4".to_string()]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_lines("/definitely/not/here.txt").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
