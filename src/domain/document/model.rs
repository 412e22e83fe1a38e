//! Renderer-independent structure of an assembled resume.
//!
//! `compose` builds one of these from a `ResumeData` snapshot; the RTF and
//! HTML renderers both walk the same tree, so the section set and order of
//! the two outputs are identical by construction.

/// The badge image bytes (PNG) embedded in the document header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeImage(pub Vec<u8>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            bold: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub align: Align,
}

impl Paragraph {
    pub fn text(text: impl Into<String>) -> Self {
        Paragraph {
            runs: vec![Run::plain(text)],
            align: Align::Left,
        }
    }

    pub fn right(text: impl Into<String>) -> Self {
        Paragraph {
            runs: vec![Run::plain(text)],
            align: Align::Right,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Paragraph),
    /// A "Label : value" line with the label emphasised.
    LabelValue { label: String, value: String },
    /// Items rendered with a literal bullet glyph, preserving order.
    Bullets(Vec<String>),
    /// Side-by-side layout; used by the declaration footer.
    TwoColumn {
        left: Vec<Paragraph>,
        right: Vec<Paragraph>,
    },
}

/// The always-present header: identity block on the left, badge on the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBlock {
    pub name: String,
    pub contact_lines: Vec<String>,
    pub badge: BadgeImage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBlock {
    pub title: &'static str,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDocument {
    pub header: HeaderBlock,
    pub sections: Vec<SectionBlock>,
}

impl ResumeDocument {
    pub fn section_titles(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.title).collect()
    }
}
