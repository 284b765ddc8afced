use crate::{
    refs::{ObjectReferences, RefType},
    LayoutError, Pt,
};
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::BTreeMap;

/// A parsed TrueType / OpenType font. The whole font file is embedded in the
/// generated PDF as a CID font with `Identity-H` encoding, so text is written
/// as glyph ids and copy/paste works through a ToUnicode map.
pub struct Font {
    pub face: OwnedFace,
}

/// Metrics of a glyph that the PDF font dictionaries need, in font units
#[derive(Copy, Clone, Debug)]
struct GlyphMetrics {
    ch: char,
    advance: u16,
    height: i16,
}

impl Font {
    /// Load a font from raw bytes, returning an error if the font could not be
    /// parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font { face })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face().units_per_em() as f32
    }

    fn name_entry(&self, name_id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .filter(|name| name.name_id == name_id && name.is_unicode())
            .find_map(|name| name.to_string())
    }

    /// The full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// The family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FAMILY)
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|i| i.0)
    }

    /// The glyph used to draw `ch`: its own, else U+FFFD, else `?`. [None] if
    /// the font has none of these, in which case the character is dropped.
    pub fn glyph_id_or_fallback(&self, ch: char) -> Option<u16> {
        self.glyph_id(ch)
            .or_else(|| self.glyph_id('\u{FFFD}'))
            .or_else(|| self.glyph_id('?'))
    }

    /// Width of `text` set at `size`. Newlines and characters without a glyph
    /// take up no space.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let scaling = self.scaling(size);
        text.chars()
            .filter(|ch| *ch != '\n')
            .filter_map(|ch| self.glyph_id_or_fallback(ch))
            .map(|gid| scaling * self.face().glyph_hor_advance(GlyphId(gid)).unwrap_or_default() as f32)
            .sum()
    }

    /// Every glyph reachable from a unicode cmap subtable, keyed by glyph id
    fn glyph_metrics(&self) -> BTreeMap<u16, GlyphMetrics> {
        let face = self.face();
        let mut glyphs: BTreeMap<u16, GlyphMetrics> = BTreeMap::new();

        let Some(cmap) = face.tables().cmap else {
            return glyphs;
        };

        for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
            subtable.codepoints(|codepoint| {
                let Ok(ch) = char::try_from(codepoint) else {
                    return;
                };
                let Some(gid) = subtable.glyph_index(codepoint).filter(|gid| gid.0 > 0) else {
                    return;
                };
                if glyphs.contains_key(&gid.0) {
                    return;
                }
                if let Some(advance) = face.glyph_hor_advance(gid) {
                    let height = face
                        .glyph_bounding_box(gid)
                        .map(|bbox| bbox.y_max - bbox.y_min - face.descender())
                        .unwrap_or(1000);
                    glyphs.insert(gid.0, GlyphMetrics { ch, advance, height });
                }
            });
        }

        glyphs
    }

    fn write_font_data(&self, refs: &mut ObjectReferences, index: usize, writer: &mut Pdf) -> Ref {
        let id = refs.allocate(RefType::FontData(index));
        let data = self.face.as_slice();
        writer
            .stream(id, data)
            .pair(Name(b"Length1"), data.len() as i32);
        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        index: usize,
        base_font: &str,
        glyphs: &BTreeMap<u16, GlyphMetrics>,
        writer: &mut Pdf,
    ) -> Ref {
        let font_file = self.write_font_data(refs, index, writer);
        let id = refs.allocate(RefType::FontDescriptor(index));

        let face = self.face();
        let scaling = 1000.0 / face.units_per_em() as f32;
        let max_width = glyphs.values().map(|g| g.advance).max().unwrap_or_default() as f32 * scaling;
        let max_height = glyphs.values().map(|g| g.height).max().unwrap_or_default() as f32 * scaling;
        let avg_width = if glyphs.is_empty() {
            0.0
        } else {
            glyphs.values().map(|g| g.advance as f32).sum::<f32>() / glyphs.len() as f32 * scaling
        };

        let mut flags = FontFlags::NON_SYMBOLIC;
        if face.is_monospaced() {
            flags |= FontFlags::FIXED_PITCH;
        }
        if face.is_italic() {
            flags |= FontFlags::ITALIC;
        }

        let family = self.family().unwrap_or_else(|| base_font.to_string());
        let cap_height = face.capital_height().map(|h| h as f32 * scaling).unwrap_or(700.0);

        let mut descriptor = writer.font_descriptor(id);
        descriptor
            .name(Name(base_font.as_bytes()))
            .family(Str(family.as_bytes()))
            .weight(face.weight().to_number())
            .flags(flags)
            .bbox(pdf_writer::Rect::new(0.0, face.descender() as f32 * scaling, max_width, max_height))
            .italic_angle(face.italic_angle())
            .ascent(face.ascender() as f32 * scaling)
            .descent(face.descender() as f32 * scaling)
            .leading(face.line_gap() as f32 * scaling)
            .cap_height(cap_height)
            .x_height(face.x_height().map(|h| h as f32 * scaling).unwrap_or(cap_height))
            .stem_v(80.0)
            .avg_width(avg_width)
            .max_width(max_width)
            .missing_width(max_width)
            .font_file2(font_file);
        descriptor.finish();

        id
    }

    fn write_cid(
        &self,
        refs: &mut ObjectReferences,
        index: usize,
        base_font: &str,
        glyphs: &BTreeMap<u16, GlyphMetrics>,
        writer: &mut Pdf,
    ) -> Ref {
        let descriptor = self.write_descriptor(refs, index, base_font, glyphs, writer);
        let id = refs.allocate(RefType::CidFont(index));
        let scaling = 1000.0 / self.face().units_per_em() as f32;

        let mut cid_font = writer.cid_font(id);
        cid_font
            .subtype(CidFontType::Type2)
            .base_font(Name(base_font.as_bytes()))
            .system_info(SystemInfo {
                registry: Str(b"Adobe"),
                ordering: Str(b"Identity"),
                supplement: 0,
            })
            .font_descriptor(descriptor)
            .default_width(1000.0);

        // runs of consecutive glyph ids share one widths entry
        let mut widths = cid_font.widths();
        let mut run_start: Option<u16> = None;
        let mut run: Vec<f32> = Vec::new();
        for (&gid, glyph) in glyphs.iter() {
            let width = glyph.advance as f32 * scaling;
            match run_start {
                Some(start) if start as usize + run.len() == gid as usize => run.push(width),
                Some(start) => {
                    widths.consecutive(start, run.drain(..));
                    run_start = Some(gid);
                    run.push(width);
                }
                None => {
                    run_start = Some(gid);
                    run.push(width);
                }
            }
        }
        if let Some(start) = run_start {
            widths.consecutive(start, run.drain(..));
        }
        widths.finish();

        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        cid_font.finish();

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        index: usize,
        glyphs: &BTreeMap<u16, GlyphMetrics>,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.allocate(RefType::ToUnicode(index));

        let mut cmap = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo\n\
             << /Registry (Adobe)\n\
             /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        // a bfchar block holds at most 100 entries
        let entries: Vec<(u16, char)> = glyphs.iter().map(|(&gid, g)| (gid, g.ch)).collect();
        for block in entries.chunks(100) {
            cmap.push_str(&format!("{} beginbfchar\n", block.len()));
            for &(gid, ch) in block {
                let mut utf16 = [0u16; 2];
                let target: String = ch
                    .encode_utf16(&mut utf16)
                    .iter()
                    .map(|unit| format!("{unit:04x}"))
                    .collect();
                cmap.push_str(&format!("<{gid:04x}> <{target}>\n"));
            }
            cmap.push_str("endbfchar\n");
        }

        cmap.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            cmap.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        id
    }

    /// Write the Type0 font, its CID font, descriptor, embedded file and
    /// ToUnicode map
    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, base_font: &str, writer: &mut Pdf) {
        let index = id.index();
        let font_id = refs.allocate(RefType::Font(index));
        let glyphs = self.glyph_metrics();
        let cid_font_id = self.write_cid(refs, index, base_font, &glyphs, writer);
        let to_unicode_id = self.write_to_unicode(refs, index, &glyphs, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(base_font.as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
    }
}

/// A PDF name can't contain whitespace or delimiters
pub(crate) fn base_font_name(family: &str) -> String {
    let name: String = family
        .chars()
        .filter(|ch| ch.is_ascii_graphic() && !"()<>[]{}/%#".contains(*ch))
        .collect();
    if name.is_empty() {
        "Font".to_string()
    } else {
        name
    }
}
