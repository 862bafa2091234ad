//! Markdown-dialect to HTML rendering for mdview
//!
//!     This crate turns plain text written in a small markdown dialect into a styled,
//!     self-contained HTML page. It is a pure lib: it powers mdview-cli but never reads
//!     files, stdin, env vars or the clock. Callers hand in text, a title and an already
//!     formatted timestamp, and get a string back.
//!
//! Architecture
//!
//!     Data flows one way through two stages:
//!
//!         text ──▶ render::Renderer ──▶ Rendered (one HTML line per input line)
//!                                           │
//!                                           ▼
//!                               Format (html page | fragment) ──▶ String
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # FormatError
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── document.rs             # Page skeleton around a rendered body
//!     ├── formats
//!     │   ├── html.rs             # Full page
//!     │   └── fragment.rs         # Body only
//!     └── render
//!         ├── mod.rs              # Line scanner and fence state
//!         ├── block.rs            # Block-level line rules
//!         ├── inline.rs           # Emphasis, code span and link substitutions
//!         └── escape.rs           # Entity escaping
//!
//! Core Algorithm
//!
//!     The renderer is a single pass over the lines with one bit of state: inside a fenced
//!     code region or not. Fenced lines are copied untouched. Every other line is escaped,
//!     classified by an ordered rule table (first match wins) and run through the inline
//!     substitutions. See render/mod.rs for the exact order.
//!
//!     The dialect is deliberately small: no tables, nested lists, reference links or raw
//!     HTML. Malformed markers are left as literal text, and the renderer has no error
//!     channel. The only structural anomaly, a fence that is never closed, is reported in
//!     [`Rendered::unterminated_fence`] rather than patched.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── render/                 # Dialect behaviour, snapshots, properties
//!     └── document/               # Page structure
//!
pub mod document;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod render;

pub use document::{default_css, wrap, wrap_with_options, DocumentMetadata, HtmlOptions};
pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
pub use render::{render, RenderOptions, Rendered, Renderer};
