use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Result};

use crate::error::{CheckError, CheckResult};

pub fn open_input(path: &Path) -> CheckResult<BufReader<File>> {
    let file = File::open(path).map_err(|source| CheckError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Reads the next line into `buf` without its terminator.
///
/// Returns `Ok(false)` once the reader is exhausted. A trailing `\r` is
/// dropped too unless `strict_eol` is set, in which case it stays part of the
/// line content.
pub fn read_line<R: BufRead + ?Sized>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    strict_eol: bool,
) -> io::Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if !strict_eol && buf.last() == Some(&b'\r') {
        buf.pop();
    }
    Ok(true)
}

pub fn parse_marker(s: &str) -> Result<char> {
    let mut chars = s.chars();
    let glyph = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => bail!("Marker must be exactly one character, got {s:?}"),
    };
    if glyph.is_whitespace() || glyph.is_control() {
        bail!("Marker must be a visible character, got {s:?}");
    }
    Ok(glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &[u8], strict_eol: bool) -> Vec<Vec<u8>> {
        let mut reader = input;
        let mut buf = Vec::new();
        let mut out = Vec::new();
        while read_line(&mut reader, &mut buf, strict_eol).unwrap() {
            out.push(buf.clone());
        }
        out
    }

    #[test]
    fn read_line_strips_terminators() {
        let got = lines(b"one\ntwo\r\nthree", false);
        assert_eq!(got, vec![b"one".to_vec(), b"two".to_vec(), b"three".to_vec()]);
    }

    #[test]
    fn read_line_keeps_cr_when_strict() {
        let got = lines(b"two\r\n", true);
        assert_eq!(got, vec![b"two\r".to_vec()]);
    }

    #[test]
    fn read_line_keeps_empty_lines() {
        let got = lines(b"\n\nx\n", false);
        assert_eq!(got, vec![Vec::new(), Vec::new(), b"x".to_vec()]);
    }

    #[test]
    fn read_line_on_empty_input() {
        assert!(lines(b"", false).is_empty());
    }

    #[test]
    fn parse_marker_accepts_single_glyph() {
        assert_eq!(parse_marker("^").unwrap(), '^');
        assert_eq!(parse_marker("↓").unwrap(), '↓');
    }

    #[test]
    fn parse_marker_rejects_bad_input() {
        assert!(parse_marker("").is_err());
        assert!(parse_marker("ab").is_err());
        assert!(parse_marker(" ").is_err());
        assert!(parse_marker("\t").is_err());
    }

    #[test]
    fn open_input_reports_path() {
        let err = open_input(Path::new("/definitely/not/here.log")).unwrap_err();
        assert_eq!(err.to_string(), "failed to open file /definitely/not/here.log");
    }
}
