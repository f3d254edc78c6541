/// Position of a message inside a `.ts` catalog file.
///
/// Used for error reporting when a catalog entry has a problem.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the catalog file (e.g., "./translations/main_ko.ts").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self::new(file_path, line, 1)
    }
}

/// A reported message together with the text needed to display it.
///
/// `source_line` is the raw line of the `.ts` file at `location`, shown as
/// the excerpt under the diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSite {
    pub location: MessageLocation,
    /// Qt context name (e.g., "AdvancedNetworking").
    pub context: String,
    /// Source string of the message.
    pub source: String,
    /// Line of the catalog file at `location`, if available.
    pub source_line: Option<String>,
}

impl MessageSite {
    pub fn new(
        location: MessageLocation,
        context: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            location,
            context: context.into(),
            source: source.into(),
            source_line: None,
        }
    }

    pub fn with_source_line(mut self, source_line: Option<String>) -> Self {
        self.source_line = source_line;
        self
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}
