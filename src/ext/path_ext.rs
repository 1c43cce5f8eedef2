use std::path::{Component, Path, PathBuf};

/// Renders a path for messages: canonical when it exists, otherwise made
/// absolute against the working directory and lexically normalized.
fn resolved_path_display(path: &Path) -> String {
    if let Ok(canonical) = path.canonicalize() {
        return canonical.display().to_string();
    }

    let absolute = match std::env::current_dir() {
        Ok(current_dir) if path.is_relative() => current_dir.join(path),
        _ => path.to_path_buf(),
    };
    normalize_lexically(&absolute).display().to_string()
}

fn normalize_lexically(path: &Path) -> PathBuf {
    path.components()
        .fold(Vec::new(), |mut kept: Vec<Component>, component| {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if matches!(kept.last(), Some(Component::Normal(_))) {
                        kept.pop();
                    }
                }
                other => kept.push(other),
            }
            kept
        })
        .iter()
        .collect()
}

pub trait PathExt {
    /// Final component as it appears in a listing, or the whole path when
    /// there is none (e.g. `/` or `..`).
    fn entry_name(&self) -> String;
    fn resolved_display(&self) -> String;
}

impl PathExt for Path {
    fn entry_name(&self) -> String {
        self.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.to_string_lossy().into_owned())
    }

    fn resolved_display(&self) -> String {
        resolved_path_display(self)
    }
}

impl PathExt for PathBuf {
    fn entry_name(&self) -> String {
        self.as_path().entry_name()
    }

    fn resolved_display(&self) -> String {
        resolved_path_display(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("lib/sub/b.txt", "b.txt")]
    #[case("a.txt", "a.txt")]
    #[case("lib/sub/", "sub")]
    #[case("/", "/")]
    fn entry_name_is_last_component(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(Path::new(path).entry_name(), expected);
    }

    #[test]
    fn normalize_drops_cur_dir_and_resolves_parent_dir() {
        let normalized = normalize_lexically(Path::new("/a/./b/../c"));
        assert_eq!(normalized, PathBuf::from("/a/c"));
    }

    #[test]
    fn normalize_never_pops_past_root() {
        let normalized = normalize_lexically(Path::new("/../a"));
        assert_eq!(normalized, PathBuf::from("/a"));
    }

    #[test]
    fn resolved_display_of_missing_relative_path_is_absolute() {
        let display = Path::new("does/not/exist/../here").resolved_display();
        assert!(Path::new(&display).is_absolute());
        assert!(display.ends_with("does/not/here"));
    }
}
