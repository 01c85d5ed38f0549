//! Path resolution core.
//!
//! Pure string functions, no I/O:
//!
//! - [`layout`]: source path -> output path / link reference (`output_path_of`, `url_of`)
//! - [`link`]: fragment splitting and external URL detection
//! - [`relative`]: relative links between rendered pages (`relative_link`, `relpath`)

pub mod layout;
pub mod link;
pub mod relative;

pub use layout::{UrlLayout, encode_path, output_path_of, url_from_dest, url_of};
pub use link::{is_external_url, split_fragment};
pub use relative::{relative_link, relative_link_from_output, relpath, resolve_against};
