use std::io::{self, Write};

use crate::compare::Mismatch;
use crate::marker::MarkerStyle;

pub fn write_mismatch<W: Write>(
    out: &mut W,
    mismatch: &Mismatch,
    style: &MarkerStyle,
) -> io::Result<()> {
    writeln!(out, "Mismatch in line  {}", mismatch.line)?;
    writeln!(out, "Expected:")?;
    out.write_all(&style.annotate(&mismatch.expected, mismatch.column))?;
    writeln!(out, "Actual:")?;
    out.write_all(&style.annotate(&mismatch.actual, mismatch.column))?;
    Ok(())
}

pub fn write_success<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Logs ok")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::MismatchKind;
    use crate::marker::MarkerPlacement;

    fn sample() -> Mismatch {
        Mismatch {
            line: 3,
            column: 5,
            kind: MismatchKind::Content,
            expected: b"C000 A:00".to_vec(),
            actual: b"C000 B:00".to_vec(),
        }
    }

    fn render(style: &MarkerStyle) -> String {
        let mut out = Vec::new();
        write_mismatch(&mut out, &sample(), style).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn mismatch_report_with_cursor_above() {
        let want = "Mismatch in line  3\n\
                    Expected:\n     v\nC000 A:00\n\
                    Actual:\n     v\nC000 B:00\n";
        assert_eq!(render(&MarkerStyle::default()), want);
    }

    #[test]
    fn mismatch_report_with_cursor_below() {
        let style = MarkerStyle {
            glyph: '^',
            placement: MarkerPlacement::Below,
        };
        let want = "Mismatch in line  3\n\
                    Expected:\nC000 A:00\n     ^\n\
                    Actual:\nC000 B:00\n     ^\n";
        assert_eq!(render(&style), want);
    }

    #[test]
    fn invalid_utf8_is_written_verbatim() {
        let mismatch = Mismatch {
            line: 1,
            column: 0,
            kind: MismatchKind::Content,
            expected: vec![0xff],
            actual: vec![0xfe],
        };
        let mut out = Vec::new();
        write_mismatch(&mut out, &mismatch, &MarkerStyle::default()).unwrap();
        assert!(out.windows(2).any(|w| w == [0xff, b'\n']));
        assert!(out.windows(2).any(|w| w == [0xfe, b'\n']));
    }

    #[test]
    fn success_line() {
        let mut out = Vec::new();
        write_success(&mut out).unwrap();
        assert_eq!(out, b"Logs ok\n");
    }
}
