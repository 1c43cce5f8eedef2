use std::fmt;
use std::path::PathBuf;

/// Prefix added once per nesting level.
pub const INDENT_UNIT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMapLine {
    /// 0 for the root's immediate children
    pub depth: usize,
    pub name: String,
}

impl fmt::Display for FileMapLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            f.write_str(INDENT_UNIT)?;
        }
        f.write_str(&self.name)
    }
}

/// Indented listing of a directory tree in depth-first pre-order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileMap {
    lines: Vec<FileMapLine>,
    skipped: Vec<PathBuf>,
}

impl FileMap {
    pub fn push(&mut self, depth: usize, name: impl Into<String>) {
        self.lines.push(FileMapLine {
            depth,
            name: name.into(),
        });
    }

    pub fn mark_skipped(&mut self, path: impl Into<PathBuf>) {
        self.skipped.push(path.into());
    }

    pub fn lines(&self) -> &[FileMapLine] {
        &self.lines
    }

    /// Directories whose contents could not be read and were left out.
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Renders every line as `<base_indent><indent><name>\n`.
    pub fn render(&self, base_indent: &str) -> String {
        self.lines.iter().fold(String::new(), |mut out, line| {
            out.push_str(base_indent);
            out.push_str(&line.to_string());
            out.push('\n');
            out
        })
    }
}

impl fmt::Display for FileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.lines
            .iter()
            .try_for_each(|line| writeln!(f, "{line}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> FileMap {
        let mut file_map = FileMap::default();
        file_map.push(0, "a.txt");
        file_map.push(0, "sub");
        file_map.push(1, "b.txt");
        file_map
    }

    #[test]
    fn display_matches_documented_example() {
        assert_eq!(sample().to_string(), "a.txt\nsub\n  b.txt\n");
    }

    #[test]
    fn empty_map_renders_nothing() {
        let file_map = FileMap::default();
        assert!(file_map.is_empty());
        assert_eq!(file_map.to_string(), "");
        assert_eq!(file_map.render("    "), "");
    }

    #[test]
    fn render_prepends_base_indent_to_every_line() {
        assert_eq!(sample().render("  "), "  a.txt\n  sub\n    b.txt\n");
    }

    #[test]
    fn render_with_empty_indent_equals_display() {
        let file_map = sample();
        assert_eq!(file_map.render(""), file_map.to_string());
    }

    #[rstest]
    #[case(0, "")]
    #[case(1, "  ")]
    #[case(3, "      ")]
    fn line_indent_is_two_spaces_per_level(#[case] depth: usize, #[case] prefix: &str) {
        let line = FileMapLine {
            depth,
            name: "entry".to_string(),
        };
        assert_eq!(line.to_string(), format!("{prefix}entry"));
    }

    #[test]
    fn skipped_directories_are_tracked_separately_from_lines() {
        let mut file_map = sample();
        file_map.mark_skipped("/tmp/locked");

        assert_eq!(file_map.len(), 3);
        assert_eq!(file_map.skipped(), [PathBuf::from("/tmp/locked")]);
        assert_eq!(file_map.to_string(), "a.txt\nsub\n  b.txt\n");
    }
}
