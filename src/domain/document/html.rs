use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::model::{Align, Block, Paragraph, ResumeDocument};

const STYLE: &str = r#"
body { font-family: Calibri, 'Segoe UI', sans-serif; font-size: 10pt; color: #1a1a1a; margin: 24px; }
.header { width: 100%; border-collapse: collapse; }
.header .badge { text-align: right; vertical-align: top; }
.header .badge img { width: 72px; }
.name { font-size: 16pt; font-weight: bold; margin: 0; }
.contact { margin: 2px 0; }
.section-label { background: #eaeaea; font-size: 12pt; font-weight: bold; padding: 3px 6px; margin: 14px 0 6px 0; }
p { margin: 4px 0; }
ul { margin: 4px 0 4px 18px; padding: 0; }
li { margin: 2px 0; }
.two-col { width: 100%; border-collapse: collapse; margin-top: 10px; }
.two-col .right { text-align: right; vertical-align: bottom; }
.label { font-weight: bold; }
"#;

/// Renders the composed document as a standalone printable HTML page.
///
/// Everything is inline: one `<style>` block and the badge as a base64 data
/// URI, so the page can be handed straight to a print-to-PDF pipeline with
/// no external resources.
pub fn render_html(doc: &ResumeDocument) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{} - Resume</title>\n", escape(&doc.header.name)));
    out.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", STYLE));

    write_header(&mut out, doc);

    for section in &doc.sections {
        out.push_str(&format!(
            "<div class=\"section-label\">{}</div>\n",
            escape(section.title)
        ));
        for block in &section.blocks {
            write_block(&mut out, block);
        }
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn write_header(out: &mut String, doc: &ResumeDocument) {
    out.push_str("<table class=\"header\"><tr><td>\n");
    out.push_str(&format!("<p class=\"name\">{}</p>\n", escape(&doc.header.name)));
    for line in &doc.header.contact_lines {
        out.push_str(&format!("<p class=\"contact\">{}</p>\n", escape(line)));
    }
    out.push_str(&format!(
        "</td><td class=\"badge\"><img src=\"data:image/png;base64,{}\" alt=\"badge\"></td></tr></table>\n",
        STANDARD.encode(&doc.header.badge.0)
    ));
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Paragraph(p) => write_paragraph(out, p),
        Block::LabelValue { label, value } => {
            out.push_str(&format!(
                "<p><span class=\"label\">{}</span> : {}</p>\n",
                escape(label),
                escape(value)
            ));
        }
        Block::Bullets(items) => {
            out.push_str("<ul>\n");
            for item in items {
                out.push_str(&format!("<li>{}</li>\n", escape(item)));
            }
            out.push_str("</ul>\n");
        }
        Block::TwoColumn { left, right } => {
            out.push_str("<table class=\"two-col\"><tr><td>\n");
            for p in left {
                write_paragraph(out, p);
            }
            out.push_str("</td><td class=\"right\">\n");
            for p in right {
                write_paragraph(out, p);
            }
            out.push_str("</td></tr></table>\n");
        }
    }
}

fn write_paragraph(out: &mut String, paragraph: &Paragraph) {
    let style = match paragraph.align {
        Align::Left => "",
        Align::Right => " style=\"text-align:right\"",
    };
    out.push_str(&format!("<p{}>", style));
    for run in &paragraph.runs {
        if run.bold {
            out.push_str(&format!("<strong>{}</strong>", escape(&run.text)));
        } else {
            out.push_str(&escape(&run.text));
        }
    }
    out.push_str("</p>\n");
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape("<script>&\"x\"</script>"),
            "&lt;script&gt;&amp;&quot;x&quot;&lt;/script&gt;"
        );
    }
}
