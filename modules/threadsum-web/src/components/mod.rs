mod summary_page;

pub use summary_page::{render_summary_page, PageView, URL_PLACEHOLDER};
