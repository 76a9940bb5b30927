//! Core types and logic for front matter normalization
//!
//! - `value`: FrontMatter and its closed FrontMatterValue union
//! - `schema`: the canonical key table
//! - `normalize`: rendering front matter into canonical lines
//! - `document`: splitting documents and assembling the output

pub mod document;
pub mod normalize;
pub mod schema;
pub mod value;

pub use document::{convert_str, SplitDocument, DELIMITER};
pub use normalize::{render_entry, Clock, FixedClock, Normalizer, SystemClock};
pub use schema::{CanonicalKey, Coercion, DefaultPolicy, CANONICAL_KEYS, SEPARATOR};
pub use value::{FrontMatter, FrontMatterValue};
