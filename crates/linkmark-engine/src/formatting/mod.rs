//! # Formatting Elements
//!
//! Inline formatting elements (`<strong>`, `<em>`, `<a>`, `<img>`, markdown `_`)
//! positioned within a text buffer.
//!
//! ## Modules
//!
//! - **`element`**: `FormattingElement` with bounds normalization and `to_html()`
//! - **`attributes`**: `Attributes`, an insertion-ordered attribute map
//! - **`diagnostics`**: `Diagnostics` sink receiving `BoundsCorrection` reports
//!
//! ## Bounds
//!
//! Bounds are normalized once, at construction. Inverted bounds are swapped and
//! a negative start is clamped to zero; each correction is reported to the sink.

pub mod attributes;
pub mod diagnostics;
pub mod element;

pub use attributes::Attributes;
pub use diagnostics::{BoundsCorrection, Diagnostics, LogDiagnostics};
pub use element::FormattingElement;
