//! Terminal host using crossterm
//!
//! [`TerminalPainter`] plays the editor's part: it receives decorations
//! from a session and renders the document with colored keys.

use std::io::Write;

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::decoration::DecorationSink;
use crate::error::Result;
use crate::palette::{PaletteColor, DEFAULT_THEME_COLORS};
use crate::syntax::Span;

/// Terminal color for a palette entry.
///
/// Theme colors resolve to ANSI colors close to the default editor
/// bracket colors (gold, orchid, sky blue).
pub fn terminal_color(color: &PaletteColor) -> Color {
    match color {
        PaletteColor::Rgb { r, g, b } => Color::Rgb { r: *r, g: *g, b: *b },
        PaletteColor::Theme(name) => match DEFAULT_THEME_COLORS.iter().position(|known| *known == name.as_str()) {
            Some(0) => Color::Yellow,
            Some(1) => Color::Magenta,
            Some(2) => Color::Blue,
            _ => Color::Reset,
        },
    }
}

/// Decorations currently shown, per bucket
#[derive(Debug, Default)]
pub struct TerminalPainter {
    layers: Vec<(Color, Vec<Span>)>,
}

impl DecorationSink for TerminalPainter {
    fn set_decorations(&mut self, bucket: usize, color: &PaletteColor, spans: &[Span]) {
        if self.layers.len() <= bucket {
            self.layers.resize(bucket + 1, (Color::Reset, Vec::new()));
        }
        let layer = &mut self.layers[bucket];
        layer.0 = terminal_color(color);
        layer.1.clear();
        layer.1.extend_from_slice(spans);
    }
}

impl TerminalPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of spans currently painted
    pub fn painted(&self) -> usize {
        self.layers.iter().map(|(_, spans)| spans.len()).sum()
    }

    /// All painted spans with their colors, in document order
    pub fn runs(&self) -> Vec<(Span, Color)> {
        let mut runs: Vec<(Span, Color)> = self
            .layers
            .iter()
            .flat_map(|(color, spans)| spans.iter().map(move |span| (*span, *color)))
            .collect();
        runs.sort_by_key(|(span, _)| span.start.offset);
        runs
    }

    /// Write `text` with every painted span in its color
    pub fn render(&self, text: &str, out: &mut impl Write) -> Result<()> {
        let mut pos = 0;
        for (span, color) in self.runs() {
            // Overlapping or out-of-document spans are skipped
            let (Some(before), Some(token)) = (
                text.get(pos..span.start.offset),
                text.get(span.start.offset..span.end.offset),
            ) else {
                continue;
            };
            queue!(
                out,
                Print(before),
                SetForegroundColor(color),
                Print(token),
                ResetColor
            )?;
            pos = span.end.offset;
        }
        queue!(out, Print(&text[pos..]))?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoration::Session;
    use crate::palette::Palette;

    fn painted(text: &str, palette: Palette) -> TerminalPainter {
        let mut session = Session::create(palette);
        let mut painter = TerminalPainter::new();
        session.reclassify(text, 2);
        session.apply(&mut painter);
        painter
    }

    #[test]
    fn test_terminal_color() {
        assert_eq!(
            terminal_color(&PaletteColor::Theme(DEFAULT_THEME_COLORS[1].to_string())),
            Color::Magenta
        );
        assert_eq!(
            terminal_color(&PaletteColor::Rgb { r: 1, g: 2, b: 3 }),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
        assert_eq!(terminal_color(&PaletteColor::Theme("other".to_string())), Color::Reset);
    }

    #[test]
    fn test_runs_in_document_order() {
        let painter = painted("a:\n  b:\n    c: 1\nd: 2\n", Palette::default());
        let offsets: Vec<usize> = painter.runs().iter().map(|(s, _)| s.start.offset).collect();
        assert_eq!(offsets, vec![0, 5, 12, 17]);
        assert_eq!(painter.runs()[1].1, Color::Magenta);
    }

    #[test]
    fn test_render_keeps_text() {
        let doc = "a:\n  - b: 1 # note\n";
        let painter = painted(doc, Palette::default());
        let mut out = Vec::new();
        painter.render(doc, &mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        assert!(rendered.contains("# note"));
        assert!(rendered.len() > doc.len());
        assert!(rendered.ends_with(" 1 # note\n"));
    }

    #[test]
    fn test_render_without_decorations() {
        let doc = "plain text\n";
        let mut out = Vec::new();
        TerminalPainter::new().render(doc, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), doc);
    }

    #[test]
    fn test_repaint_replaces_layer() {
        let mut session = Session::create(Palette::default());
        let mut painter = TerminalPainter::new();
        session.reclassify("a:\n  b:\n", 2);
        session.apply(&mut painter);
        assert_eq!(painter.painted(), 2);

        session.reclassify("a: 1\n", 2);
        session.apply(&mut painter);
        assert_eq!(painter.painted(), 1);
    }
}
