pub mod escape;
pub mod html;
pub mod style;

pub use html::{render_not_found, render_page};
