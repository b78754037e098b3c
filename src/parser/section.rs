//! Section splitter for Surge-style profiles
//!
//! A profile is a sequence of bracketed section headers, each followed by
//! content lines. This module tags every content line with the section that
//! encloses it; interpreting the lines is left to the extractors in
//! [`crate::parser::surge`].

/// Comment marker used by Surge managed profiles
pub const COMMENT_MARKER: &str = "#!";

/// Sections understood by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    General,
    Proxy,
    ProxyGroup,
    Rule,
    /// Any other bracketed section, or content before the first header
    Unknown,
}

impl Section {
    /// Classify a trimmed line as a section header
    ///
    /// Returns `None` when the line is not a header at all. Headers are
    /// matched by prefix, so trailing text after the closing bracket is
    /// tolerated.
    pub fn from_header(line: &str) -> Option<Section> {
        if !line.starts_with('[') {
            return None;
        }

        let section = if line.starts_with("[General]") {
            Section::General
        } else if line.starts_with("[Proxy]") {
            Section::Proxy
        } else if line.starts_with("[Proxy Group]") {
            Section::ProxyGroup
        } else if line.starts_with("[Rule]") {
            Section::Rule
        } else {
            Section::Unknown
        };
        Some(section)
    }

    /// Header text of the section
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::General => "General",
            Section::Proxy => "Proxy",
            Section::ProxyGroup => "Proxy Group",
            Section::Rule => "Rule",
            Section::Unknown => "",
        }
    }
}

/// A trimmed content line tagged with its enclosing section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawLine<'a> {
    /// A header line; `section` is the section it opens
    Header(Section),
    /// A content line inside `section`
    Content { line: &'a str, section: Section },
    /// A `#!` comment line inside `section`
    ///
    /// Only proxy name collection looks at these; record extraction skips them.
    Comment { line: &'a str, section: Section },
}

/// Split a profile into tagged lines
///
/// Blank lines are dropped and `#!` lines become [`RawLine::Comment`].
/// Header lines are kept as [`RawLine::Header`] because the presence of a
/// header alone carries meaning (an empty `[General]` still enables DNS).
pub fn split_sections(content: &str) -> Vec<RawLine<'_>> {
    let mut current = Section::Unknown;
    let mut lines = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with(COMMENT_MARKER) {
            lines.push(RawLine::Comment {
                line,
                section: current,
            });
            continue;
        }

        if let Some(section) = Section::from_header(line) {
            current = section;
            lines.push(RawLine::Header(section));
            continue;
        }

        lines.push(RawLine::Content {
            line,
            section: current,
        });
    }

    lines
}
