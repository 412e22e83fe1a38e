//! Resume document assembly.
//!
//! One composed [`ResumeDocument`] feeds both renderers, so the editable RTF
//! blob and the printable HTML page always agree on which sections appear
//! and in what order.

mod html;
mod model;
mod rtf;
mod sections;

pub use html::render_html;
pub use model::{
    Align, BadgeImage, Block, HeaderBlock, Paragraph, ResumeDocument, Run, SectionBlock,
};
pub use rtf::render_rtf;
pub use sections::compose;
