//! Splitting a markdown document into front matter, comments and body,
//! and assembling the normalized result.

use crate::core::normalize::Normalizer;
use crate::core::value::FrontMatter;
use crate::error::{MatterFmtError, Result, UNKNOWN_PATH};
use regex::Regex;
use std::sync::OnceLock;

/// Line that opens and closes the front matter block
pub const DELIMITER: &str = "---";

fn delimiter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^---").expect("delimiter pattern is valid"))
}

fn comment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#").expect("comment pattern is valid"))
}

/// A document separated into its three parts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitDocument {
    front_matter: FrontMatter,
    comments: Vec<String>,
    body: Vec<String>,
}

impl SplitDocument {
    pub fn new(front_matter: FrontMatter, comments: Vec<String>, body: Vec<String>) -> Self {
        Self {
            front_matter,
            comments,
            body,
        }
    }

    /// Split raw lines into front matter, front matter comments and body.
    ///
    /// The block must open on the first line. A document that does not
    /// start with `---` has no front matter and every line is body. An
    /// opened block that never closes is malformed. Once the block has
    /// closed, further `---` lines are body.
    pub fn split<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut started = false;
        let mut in_front_matter = false;
        let mut data_lines: Vec<String> = Vec::new();
        let mut comments = Vec::new();
        let mut body = Vec::new();

        for (index, line) in lines.into_iter().enumerate() {
            let line: String = line.into();

            if delimiter_re().is_match(&line) {
                if index == 0 {
                    started = true;
                    in_front_matter = true;
                    continue;
                }
                if in_front_matter {
                    in_front_matter = false;
                    continue;
                }
            }

            if in_front_matter {
                if comment_re().is_match(line.trim_start()) {
                    comments.push(line);
                } else {
                    data_lines.push(line);
                }
            } else {
                body.push(line);
            }
        }

        if started && in_front_matter {
            return Err(MatterFmtError::malformed_front_matter(
                UNKNOWN_PATH,
                "missing closing delimiter",
            ));
        }

        let front_matter = FrontMatter::from_yaml_str(&data_lines.join("\n"))?;

        Ok(Self::new(front_matter, comments, body))
    }

    /// Split a whole document held in memory
    pub fn parse(content: &str) -> Result<Self> {
        Self::split(content.lines())
    }

    pub fn front_matter(&self) -> &FrontMatter {
        &self.front_matter
    }

    /// Comment lines found inside the front matter block, verbatim
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// Lines of the converted document, in output order
    pub fn assemble(&self, normalized: Vec<String>) -> Vec<String> {
        let mut out =
            Vec::with_capacity(normalized.len() + self.comments.len() + self.body.len() + 2);
        out.push(DELIMITER.to_string());
        out.extend(normalized);
        out.extend(self.comments.iter().cloned());
        out.push(DELIMITER.to_string());
        out.extend(self.body.iter().cloned());
        out
    }

    /// Normalize the front matter and join everything with `\n`
    pub fn render(&self, normalizer: &Normalizer) -> String {
        self.assemble(normalizer.normalize(&self.front_matter))
            .join("\n")
    }
}

/// Convert a document held in memory
pub fn convert_str(content: &str, normalizer: &Normalizer) -> Result<String> {
    Ok(SplitDocument::parse(content)?.render(normalizer))
}
