//! Blog post frontmatter handling
//!
//! Extracts the YAML header between `---` delimiters, remaps the old
//! `title/summary/date/tags/draft` schema to `title/description/publishDate/tags/draft`,
//! and renders the result with fixed quoting rules. The body is never touched.

mod date;
mod extract;
mod mapper;
mod serialize;
mod value;

pub use extract::{BOUNDARY, extract};
pub use mapper::map_header;
pub use serialize::render_header;
