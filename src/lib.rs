//! matterfmt: normalize YAML front matter of static-site markdown posts
//!
//! Each document is split into its front matter mapping, the comment lines
//! inside the front matter block, and the body. The mapping is rendered
//! with a fixed set of known keys in canonical order (filling in defaults),
//! followed by a separator and every unknown key commented out. Comments
//! and body are carried over verbatim.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use matterfmt::{convert_str, Normalizer, Result};
//!
//! fn main() -> Result<()> {
//!     let input = "---\ntitle: Hello\nimage: cover.png\n---\nBody";
//!     let output = convert_str(input, &Normalizer::new())?;
//!     println!("{}", output);
//!     Ok(())
//! }
//! ```
//!
//! ## Converting Files
//!
//! ```rust,no_run
//! use matterfmt::{BatchProcessor, Result};
//!
//! fn main() -> Result<()> {
//!     // Writes content/post/hello.md.dst.md
//!     let result = BatchProcessor::new().convert_file("content/post/hello.md")?;
//!     println!("{:?}", result.destination);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`]: front matter values, the canonical key table, the
//!   normalizer and document splitting/assembly. No I/O.
//! - [`io`]: reading, writing and batch conversion.
//! - [`error`]: the crate error type.

pub use crate::error::{MatterFmtError, Result};

pub use crate::core::{
    convert_str, CanonicalKey, Clock, FixedClock, FrontMatter, FrontMatterValue, Normalizer,
    SplitDocument, SystemClock, CANONICAL_KEYS, SEPARATOR,
};

pub use crate::io::{
    destination_path, BatchConfig, BatchProcessor, BatchSummary, ConvertResult,
    FrontMatterWriter, OutputTarget, WriterConfig, DEFAULT_SUFFIX,
};

pub mod core;
pub mod error;
pub mod io;
