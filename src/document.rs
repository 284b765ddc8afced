use crate::{
    font::{base_font_name, Font},
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    LayoutError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;

/// Everything that goes into the PDF: pages in order, the fonts they use and
/// an optional info block. Nothing is resolved to PDF objects until
/// [Document::write].
#[derive(Default)]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
}

impl Document {
    /// Without info no info dictionary is written
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Append a page to the end of the document
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Fonts are shared by every page, referred to by the returned id. A font
    /// is embedded under its own family name.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// The page most recently added, which is the one being drawn on
    pub fn last_page_mut(&mut self) -> Option<&mut Page> {
        let id = *self.page_order.last()?;
        self.pages.get_mut(id)
    }

    /// Render the whole document in memory and write it out
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), LayoutError> {
        let mut refs = ObjectReferences::new();
        let catalog_id = refs.allocate(RefType::Catalog);
        let page_tree_id = refs.allocate(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..self.page_order.len())
            .map(|i| refs.allocate(RefType::Page(i)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (id, font) in self.fonts.iter() {
            let base_font = base_font_name(&font.family().unwrap_or_default());
            font.write(&mut refs, id, &base_font, &mut writer);
        }

        for (page_index, id) in self.page_order.iter().enumerate() {
            let page = self.pages.get(*id).ok_or(LayoutError::PageMissing)?;
            page.write(&mut refs, page_index, &self.fonts, &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::A4;
    use crate::units::Pt;

    #[test]
    fn stroke_only_document_is_a_pdf() {
        let mut document = Document::default();
        document.set_info(Info::new().title("lines").clone());
        document.add_page(Page::new(A4, None));
        document
            .last_page_mut()
            .unwrap()
            .add_line(Pt(1.0), (Pt(10.0), Pt(10.0)), (Pt(100.0), Pt(10.0)));
        document.add_page(Page::new(A4, None));
        assert_eq!(document.page_count(), 2);

        let mut out: Vec<u8> = Vec::new();
        document.write(&mut out).unwrap();
        assert!(out.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("/Count 2"));
        assert!(text.contains("/FlateDecode"));
    }

    #[test]
    fn empty_document_has_no_last_page() {
        let mut document = Document::default();
        assert!(document.last_page_mut().is_none());
    }
}
