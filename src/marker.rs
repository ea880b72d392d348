use clap::ValueEnum;

/// Where the cursor line goes relative to the text it points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MarkerPlacement {
    #[default]
    Above,
    Below,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerStyle {
    pub glyph: char,
    pub placement: MarkerPlacement,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle {
            glyph: 'v',
            placement: MarkerPlacement::Above,
        }
    }
}

impl MarkerStyle {
    /// `column` spaces followed by the glyph.
    pub fn cursor_line(&self, column: usize) -> String {
        let mut line = " ".repeat(column);
        line.push(self.glyph);
        line
    }

    /// The text line together with its cursor line, each newline-terminated.
    pub fn annotate(&self, text: &[u8], column: usize) -> Vec<u8> {
        let cursor = self.cursor_line(column);
        let mut out = Vec::with_capacity(text.len() + cursor.len() + 2);
        match self.placement {
            MarkerPlacement::Above => {
                out.extend_from_slice(cursor.as_bytes());
                out.push(b'\n');
                out.extend_from_slice(text);
                out.push(b'\n');
            }
            MarkerPlacement::Below => {
                out.extend_from_slice(text);
                out.push(b'\n');
                out.extend_from_slice(cursor.as_bytes());
                out.push(b'\n');
            }
        }
        out
    }
}
