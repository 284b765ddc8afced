use crate::content::render_contents;
use crate::font::Font;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use crate::LayoutError;
use id_arena::{Arena, Id};
use pdf_writer::{Filter, Finish, Name, Pdf};

/// Which font, at which size, a span of text is set in
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A run of text placed with its baseline starting at `coords`
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub coords: (Pt, Pt),
}

/// Straight line segments stroked with a common width
#[derive(Clone, PartialEq, Debug)]
pub struct StrokeLayout {
    pub width: Pt,
    pub segments: Vec<((Pt, Pt), (Pt, Pt))>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    /// Spans drawn inside one text region
    Text(Vec<SpanLayout>),
    Stroke(StrokeLayout),
}

/// A single page of the document and everything drawn on it
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out contents, in drawing order
    pub contents: Vec<PageContents>,
}

impl Page {
    /// Create an empty page. Without margins the content box is the whole page.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let media_box = Rect::page(size);
        let content_box = margins
            .map(|m| m.content_box(size))
            .unwrap_or(media_box);

        Page {
            media_box,
            content_box,
            contents: Vec::default(),
        }
    }

    /// Add a group of spans that are rendered together in one text region
    pub fn add_text(&mut self, spans: Vec<SpanLayout>) {
        if !spans.is_empty() {
            self.contents.push(PageContents::Text(spans));
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.add_text(vec![span]);
    }

    /// Add a line segment. Consecutive segments of the same width are stroked
    /// as one path.
    pub fn add_line(&mut self, width: Pt, from: (Pt, Pt), to: (Pt, Pt)) {
        if let Some(PageContents::Stroke(stroke)) = self.contents.last_mut() {
            if stroke.width == width {
                stroke.segments.push((from, to));
                return;
            }
        }

        self.contents.push(PageContents::Stroke(StrokeLayout {
            width,
            segments: vec![(from, to)],
        }));
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) -> Result<(), LayoutError> {
        let id = refs.get(RefType::Page(page_index)).ok_or(LayoutError::PageMissing)?;
        let parent = refs.get(RefType::PageTree).ok_or(LayoutError::PageMissing)?;
        let content_id = refs.allocate(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(parent);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(font_id.index())) {
                resource_fonts.pair(Name(format!("F{}", font_id.index()).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_contents(&self.contents, fonts)?;
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            rendered.as_slice(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        Ok(())
    }
}
