use super::model::{Align, Block, Paragraph, ResumeDocument};

// Half-point font sizes: 10pt body, 12pt section labels, 16pt name.
const FS_BODY: u32 = 20;
const FS_LABEL: u32 = 24;
const FS_NAME: u32 = 32;

// Twips. Header table spans a 9360-twip (6.5") printable width.
const HEADER_SPLIT: u32 = 6800;
const PAGE_RIGHT: u32 = 9360;
const BADGE_GOAL: u32 = 1100;

/// Renders the composed document as an RTF byte blob.
///
/// RTF keeps the output editable in ordinary word processors while needing
/// nothing beyond byte building: paragraphs, a two-cell header table with
/// the badge PNG embedded as hex, shaded section labels, and literal bullet
/// glyphs (no native list numbering, for portability).
pub fn render_rtf(doc: &ResumeDocument) -> Vec<u8> {
    let mut out = String::new();
    out.push_str("{\\rtf1\\ansi\\deff0\n");
    out.push_str("{\\fonttbl{\\f0\\fswiss Calibri;}}\n");
    // Color 1 is the light fill behind section labels.
    out.push_str("{\\colortbl ;\\red234\\green234\\blue234;}\n");

    write_header(&mut out, doc);

    for section in &doc.sections {
        write_section_label(&mut out, section.title);
        for block in &section.blocks {
            write_block(&mut out, block);
        }
    }

    out.push('}');
    out.into_bytes()
}

fn write_header(out: &mut String, doc: &ResumeDocument) {
    out.push_str(&format!(
        "\\trowd\\trgaph108\\cellx{HEADER_SPLIT}\\cellx{PAGE_RIGHT}\n"
    ));

    // Left cell: name and contact lines.
    out.push_str(&format!(
        "\\pard\\intbl\\b\\fs{FS_NAME} {}\\b0\\par\n",
        escape(&doc.header.name)
    ));
    for line in &doc.header.contact_lines {
        out.push_str(&format!(
            "\\pard\\intbl\\fs{FS_BODY} {}\\par\n",
            escape(line)
        ));
    }
    out.push_str("\\cell\n");

    // Right cell: badge image as hex-encoded PNG.
    out.push_str(&format!(
        "\\pard\\intbl\\qr {{\\pict\\pngblip\\picwgoal{BADGE_GOAL}\\pichgoal{BADGE_GOAL} "
    ));
    out.push_str(&hex_encode(&doc.header.badge.0));
    out.push_str("}\\cell\\row\n");
    out.push_str("\\pard\\sa120\\par\n");
}

fn write_section_label(out: &mut String, title: &str) {
    out.push_str(&format!(
        "\\pard\\sb160\\sa60{{\\highlight1\\b\\fs{FS_LABEL} {}}}\\par\n",
        escape(title)
    ));
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Paragraph(p) => write_paragraph(out, p),
        Block::LabelValue { label, value } => {
            out.push_str(&format!(
                "\\pard\\sa40\\fs{FS_BODY}{{\\b {}}} : {}\\par\n",
                escape(label),
                escape(value)
            ));
        }
        Block::Bullets(items) => {
            for item in items {
                // Literal bullet glyph, not RTF list numbering.
                out.push_str(&format!(
                    "\\pard\\fi-200\\li200\\sa40\\fs{FS_BODY} \\u8226? {}\\par\n",
                    escape(item)
                ));
            }
        }
        Block::TwoColumn { left, right } => {
            out.push_str(&format!(
                "\\trowd\\trgaph108\\cellx{HEADER_SPLIT}\\cellx{PAGE_RIGHT}\n"
            ));
            for p in left {
                write_table_paragraph(out, p);
            }
            out.push_str("\\cell\n");
            for p in right {
                write_table_paragraph(out, p);
            }
            out.push_str("\\cell\\row\n\\pard\\par\n");
        }
    }
}

fn write_paragraph(out: &mut String, paragraph: &Paragraph) {
    let align = match paragraph.align {
        Align::Left => "\\ql",
        Align::Right => "\\qr",
    };
    out.push_str(&format!("\\pard{align}\\sa80\\fs{FS_BODY} "));
    for run in &paragraph.runs {
        if run.bold {
            out.push_str(&format!("{{\\b {}}}", escape(&run.text)));
        } else {
            out.push_str(&escape(&run.text));
        }
    }
    out.push_str("\\par\n");
}

fn write_table_paragraph(out: &mut String, paragraph: &Paragraph) {
    let align = match paragraph.align {
        Align::Left => "\\ql",
        Align::Right => "\\qr",
    };
    out.push_str(&format!("\\pard\\intbl{align}\\fs{FS_BODY} "));
    for run in &paragraph.runs {
        if run.bold {
            out.push_str(&format!("{{\\b {}}}", escape(&run.text)));
        } else {
            out.push_str(&escape(&run.text));
        }
    }
    out.push_str("\\par\n");
}

/// Escapes RTF control characters and emits non-ASCII as `\uN?` units.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '{' => escaped.push_str("\\{"),
            '}' => escaped.push_str("\\}"),
            '\n' => escaped.push_str("\\line "),
            c if (c as u32) < 128 => escaped.push(c),
            c => {
                // RTF \u takes a signed 16-bit value; non-BMP characters
                // fall back to the replacement `?`.
                let code = c as u32;
                if code <= 0xFFFF {
                    escaped.push_str(&format!("\\u{}?", code as i32 as i16));
                } else {
                    escaped.push('?');
                }
            }
        }
    }
    escaped
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        hex.push_str(&format!("{:02x}", b));
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_rtf_specials() {
        assert_eq!(escape(r"a\b{c}"), r"a\\b\{c\}");
    }

    #[test]
    fn escape_encodes_non_ascii_as_unicode_units() {
        assert_eq!(escape("•"), "\\u8226?");
    }
}
