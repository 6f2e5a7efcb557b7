//! yaml-colors - color YAML keys by indentation depth
//!
//! Keys and sequence markers at the same nesting depth share a color, so
//! structure stays readable in deeply nested documents. The engine works
//! from lexical patterns and indentation arithmetic alone; it never
//! parses the document.
//!
//! ```
//! use yaml_colors::syntax::classify;
//!
//! let table = classify("a:\n  b: 1\n", 2, 3);
//! assert_eq!(table.spans(0).len(), 1);
//! assert_eq!(table.spans(1).len(), 1);
//! ```

pub mod config;
pub mod decoration;
pub mod error;
pub mod palette;
pub mod syntax;
pub mod terminal;

pub use config::Config;
pub use decoration::{DecorationSink, Session};
pub use error::{ColorsError, Result};
pub use palette::{Palette, PaletteColor};
