//! Output file kinds, recognised by extension.

use std::path::Path;

use crate::field::FIELD_HEADER_ROWS;
use crate::trace::TRACE_HEADER_ROWS;

/// The two numeric output formats of the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Voltage/current traces (`.vc`).
    Trace,
    /// Field snapshots (`.fd`).
    Field,
}

impl OutputFormat {
    /// Recognise a path by its extension; `None` for anything else.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "vc" => Some(OutputFormat::Trace),
            "fd" => Some(OutputFormat::Field),
            _ => None,
        }
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Trace => "vc",
            OutputFormat::Field => "fd",
        }
    }

    /// Rows before the numeric block.
    pub fn header_rows(self) -> usize {
        match self {
            OutputFormat::Trace => TRACE_HEADER_ROWS,
            OutputFormat::Field => FIELD_HEADER_ROWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("run/out.vc")), Some(OutputFormat::Trace));
        assert_eq!(OutputFormat::from_path(Path::new("fields.fd")), Some(OutputFormat::Field));
        assert_eq!(OutputFormat::from_path(Path::new("log.txt")), None);
        assert_eq!(OutputFormat::from_path(Path::new("noext")), None);
        assert_eq!(OutputFormat::Field.header_rows(), 4);
        assert_eq!(OutputFormat::Trace.header_rows(), 1);
    }
}
