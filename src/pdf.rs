use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::error::ResumeForgeError;
use crate::types::ComposedResume;
use crate::util;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const TEXT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
const LAYER_NAME: &str = "Layer 1";

/// Write a composed resume as an A4 PDF.
///
/// Layout is a simple top-down cursor over builtin Helvetica faces; the
/// point is preserving the semantic content, not typesetting fidelity.
pub fn write_pdf(resume: &ComposedResume, destination: &Path) -> Result<(), ResumeForgeError> {
    let title = format!("{} - {}", resume.personal.name, resume.meta.name);
    let (doc, page, layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);

    let regular = builtin(&doc, BuiltinFont::Helvetica)?;
    let bold = builtin(&doc, BuiltinFont::HelveticaBold)?;
    let oblique = builtin(&doc, BuiltinFont::HelveticaOblique)?;

    let mut cursor = Cursor {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y: PAGE_HEIGHT - MARGIN,
    };

    cursor.line(&resume.personal.name, 18.0, &bold, 0.0);
    cursor.line(&resume.personal.headline, 12.0, &oblique, 0.0);
    let contacts: Vec<String> = resume
        .personal
        .contacts
        .iter()
        .map(|(channel, value)| format!("{}: {}", util::title_case(channel), value))
        .collect();
    cursor.paragraph(&contacts.join(" | "), 9.0, &regular, 0.0);
    cursor.gap(5.0);

    cursor.line("PROFESSIONAL SUMMARY", 12.0, &bold, 0.0);
    cursor.paragraph(&resume.summary, 10.0, &regular, 0.0);
    cursor.gap(5.0);

    if !resume.skills.is_empty() {
        cursor.line("TECHNICAL SKILLS", 12.0, &bold, 0.0);
        for section in &resume.skills {
            cursor.paragraph(
                &format!("{}: {}", section.category, section.skills.join(", ")),
                9.5,
                &regular,
                0.0,
            );
        }
        cursor.gap(5.0);
    }

    cursor.line("WORK EXPERIENCE", 12.0, &bold, 0.0);
    for block in &resume.experience {
        cursor.line(&block.title, 11.0, &bold, 0.0);
        cursor.paragraph(
            &format!("{} | {}", block.company, block.period),
            9.0,
            &oblique,
            0.0,
        );
        for resp in &block.responsibilities {
            cursor.paragraph(&format!("• {}", resp), 10.0, &regular, 3.0);
        }
        if resume.meta.options.highlight_achievements {
            for achievement in &block.achievements {
                cursor.paragraph(&format!("» {}", achievement), 10.0, &oblique, 6.0);
            }
        }
        cursor.gap(3.0);
    }

    let file = File::create(destination)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ResumeForgeError::Export(e.to_string()))?;
    Ok(())
}

fn builtin(
    doc: &PdfDocumentReference,
    font: BuiltinFont,
) -> Result<IndirectFontRef, ResumeForgeError> {
    doc.add_builtin_font(font)
        .map_err(|e| ResumeForgeError::Export(e.to_string()))
}

/// Top-down text cursor with automatic page breaks.
struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl Cursor<'_> {
    fn line(&mut self, text: &str, size: f32, font: &IndirectFontRef, indent: f32) {
        let height = line_height(size);
        if self.y - height < MARGIN {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
        self.layer
            .use_text(text, size, Mm(MARGIN + indent), Mm(self.y), font);
        self.y -= height;
    }

    fn paragraph(&mut self, text: &str, size: f32, font: &IndirectFontRef, indent: f32) {
        for wrapped in wrap_text(text, chars_per_line(size, indent)) {
            self.line(&wrapped, size, font, indent);
        }
    }

    fn gap(&mut self, mm: f32) {
        self.y -= mm;
    }
}

fn line_height(size: f32) -> f32 {
    size * 0.46
}

/// Approximate character budget for one wrapped line. Helvetica averages
/// roughly half the point size per glyph (0.5 pt * 0.3528 mm/pt).
fn chars_per_line(size: f32, indent: f32) -> usize {
    let usable = TEXT_WIDTH - indent;
    (usable / (size * 0.18)).max(10.0) as usize
}

/// Greedy word wrap by character count. Overlong single words get their
/// own line rather than being split.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
