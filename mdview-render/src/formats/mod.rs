//! Output format implementations

mod fragment;
mod html;

pub use fragment::FragmentFormat;
pub use html::HtmlFormat;
