// Page composition: which sections show, what fallback text fills gaps,
// and the view-model handed to the renderer.

pub mod format;
pub mod sections;
pub mod view;

pub use sections::Section;
pub use view::PortfolioView;
