//! Source location bookkeeping for `<location>` elements.
//!
//! lupdate writes locations relative to earlier ones: `filename` is omitted
//! while it stays the same, and `line="+5"` means "five lines after the last
//! line recorded for this file". The running state spans the whole document,
//! across messages and contexts.

use std::collections::HashMap;

use crate::core::data::{LocationStyle, SourceRef};

/// Reads `<location>` attributes into absolute [`SourceRef`]s.
#[derive(Debug, Default)]
pub struct LocationResolver {
    current_file: String,
    current_line: HashMap<String, i64>,
    saw_relative: bool,
    saw_absolute: bool,
}

impl LocationResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve one `<location>` element.
    ///
    /// Returns an error message when `line` is not a number.
    pub fn resolve(
        &mut self,
        filename: Option<&str>,
        line: Option<&str>,
    ) -> Result<SourceRef, String> {
        let file = match filename {
            Some(name) if !name.is_empty() => {
                self.current_file = name.to_string();
                name.to_string()
            }
            _ => self.current_file.clone(),
        };

        let Some(line) = line.map(str::trim).filter(|l| !l.is_empty()) else {
            return Ok(SourceRef::new(file, None));
        };

        let relative = line.starts_with('+') || line.starts_with('-');
        let value: i64 = line
            .parse()
            .map_err(|_| format!("invalid line attribute \"{}\"", line))?;

        let entry = self.current_line.entry(file.clone()).or_insert(0);
        if relative {
            *entry += value;
            self.saw_relative = true;
        } else {
            *entry = value;
            self.saw_absolute = true;
        }

        let resolved = u32::try_from(*entry)
            .map_err(|_| format!("line \"{}\" resolves to {}", line, entry))?;
        Ok(SourceRef::new(file, Some(resolved)))
    }

    /// The location style observed so far.
    pub fn style(&self) -> LocationStyle {
        if self.saw_relative {
            LocationStyle::Relative
        } else if self.saw_absolute {
            LocationStyle::Absolute
        } else {
            LocationStyle::None
        }
    }
}

/// Attributes of one `<location>` element to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationAttrs {
    pub filename: Option<String>,
    pub line: Option<String>,
}

/// Turns absolute [`SourceRef`]s back into `<location>` attributes.
#[derive(Debug)]
pub struct LocationEncoder {
    style: LocationStyle,
    current_file: Option<String>,
    current_line: HashMap<String, i64>,
}

impl LocationEncoder {
    pub fn new(style: LocationStyle) -> Self {
        Self {
            style,
            current_file: None,
            current_line: HashMap::new(),
        }
    }

    pub fn encode(&mut self, source_ref: &SourceRef) -> LocationAttrs {
        match self.style {
            LocationStyle::Relative => {
                let line = source_ref.line.map(|line| {
                    let line = i64::from(line);
                    let previous = self.current_line.insert(source_ref.file.clone(), line);
                    let delta = line - previous.unwrap_or(0);
                    if delta >= 0 {
                        format!("+{}", delta)
                    } else {
                        delta.to_string()
                    }
                });

                let filename = if self.current_file.as_deref() == Some(source_ref.file.as_str())
                {
                    None
                } else {
                    self.current_file = Some(source_ref.file.clone());
                    Some(source_ref.file.clone())
                };

                LocationAttrs { filename, line }
            }
            LocationStyle::Absolute | LocationStyle::None => LocationAttrs {
                filename: Some(source_ref.file.clone()),
                line: source_ref.line.map(|l| l.to_string()),
            },
        }
    }
}
