//! Turns page contents into a PDF content stream.

use crate::font::Font;
use crate::page::{PageContents, SpanFont, SpanLayout, StrokeLayout};
use id_arena::Arena;
use std::io::Write;

/// Renders page contents to an (uncompressed) PDF content stream.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => render_text_spans(&mut content, spans, fonts)?,
            PageContents::Stroke(stroke) => render_stroke(&mut content, stroke)?,
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_stroke(content: &mut Vec<u8>, stroke: &StrokeLayout) -> Result<(), std::io::Error> {
    if stroke.segments.is_empty() {
        return Ok(());
    }

    write!(content, "q\n")?;
    write!(content, "{} w\n", stroke.width)?;
    for ((x1, y1), (x2, y2)) in stroke.segments.iter() {
        write!(content, "{x1} {y1} m\n{x2} {y2} l\n")?;
    }
    write!(content, "S\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<(), std::io::Error> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "BT\n")?;

    let mut current_font: SpanFont = first.font;
    write_font(content, current_font)?;

    // Td moves relative to the start of the previous line
    let mut origin = (0.0f32, 0.0f32);
    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write_font(content, current_font)?;
        }

        let (x, y) = (*span.coords.0, *span.coords.1);
        write!(content, "{} {} Td\n", x - origin.0, y - origin.1)?;
        origin = (x, y);

        write!(content, "<")?;
        if let Some(font) = fonts.get(current_font.id) {
            for gid in span.text.chars().filter_map(|ch| font.glyph_id_or_fallback(ch)) {
                write!(content, "{gid:04x}")?;
            }
        }
        write!(content, "> Tj\n")?;
    }

    write!(content, "ET\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_font(content: &mut Vec<u8>, font: SpanFont) -> Result<(), std::io::Error> {
    write!(content, "/F{} {} Tf\n", font.id.index(), font.size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::StrokeLayout;
    use crate::units::Pt;

    #[test]
    fn strokes_render_as_one_path() {
        let contents = vec![PageContents::Stroke(StrokeLayout {
            width: Pt(0.5),
            segments: vec![
                ((Pt(20.0), Pt(100.0)), (Pt(120.0), Pt(100.0))),
                ((Pt(20.0), Pt(80.0)), (Pt(120.0), Pt(80.0))),
            ],
        })];
        let fonts: Arena<Font> = Arena::new();
        let rendered = render_contents(&contents, &fonts).unwrap();
        assert_eq!(
            String::from_utf8(rendered).unwrap(),
            "q\n0.5 w\n20 100 m\n120 100 l\n20 80 m\n120 80 l\nS\nQ\n"
        );
    }

    #[test]
    fn nothing_renders_to_an_empty_stream() {
        let fonts: Arena<Font> = Arena::new();
        assert!(render_contents(&[], &fonts).unwrap().is_empty());
    }
}
