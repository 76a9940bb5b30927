pub mod batch;
pub mod fs;
pub mod reader;
pub mod writer;

pub use batch::{BatchConfig, BatchProcessor, BatchSummary, ConvertResult, OutputTarget};
pub use fs::{is_markdown, resolve_paths};
pub use reader::{read_document, read_lines};
pub use writer::{destination_path, FrontMatterWriter, WriterConfig, DEFAULT_SUFFIX};
