//! Static sequences and on-disk fixtures used across harnesses.

use std::io::Write;

/// Odd numbers `1..=15`, small enough to reason about by hand.
pub const ODD_NUMBERS: &[i64] = &[1, 3, 5, 7, 9, 11, 13, 15];

/// A sequence with runs of duplicates at the start, middle and end.
pub const WITH_RUNS: &[i64] = &[2, 2, 2, 4, 6, 6, 6, 6, 6, 9, 10, 12, 12];

/// Write `values` to a temporary data file, several per line, the way the
/// file source expects them.
pub fn data_file(values: &[i64]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp data file");
    for chunk in values.chunks(4) {
        let line: Vec<String> = chunk.iter().map(i64::to_string).collect();
        writeln!(file, "{}", line.join(" ")).expect("write data file");
    }
    file
}

/// Write a TOML config file with the given body.
pub fn config_file(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config file");
    file.write_all(body.as_bytes()).expect("write config file");
    file
}

/// Config body for a file-backed sequence at `path`.
pub fn file_config_body(path: &std::path::Path) -> String {
    format!(
        "[sequence]\nkind = \"file\"\npath = {:?}\n",
        path.display().to_string()
    )
}
