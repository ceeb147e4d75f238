use std::path::{Component, Path, PathBuf};

/// Renders a path for diagnostics: canonical when it exists, otherwise made absolute
/// against the current directory with `.` and `..` folded away lexically.
pub fn best_effort_path_display(path: &Path) -> String {
    if let Ok(canonical) = path.canonicalize() {
        return canonical.display().to_string();
    }

    let absolute = match std::env::current_dir() {
        Ok(current_dir) if path.is_relative() => current_dir.join(path),
        _ => path.to_path_buf(),
    };

    let mut folded = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(folded.components().next_back(), None | Some(Component::RootDir)) {
                    folded.pop();
                }
            }
            other => folded.push(other),
        }
    }
    folded.display().to_string()
}

pub trait BestEffortPathExt {
    fn best_effort_path_display(&self) -> String;
}

impl<P: AsRef<Path> + ?Sized> BestEffortPathExt for P {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn existing_path_is_canonicalized() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested = temp_dir.path().join(".").join("x").join("..");
        std::fs::create_dir(temp_dir.path().join("x")).expect("Failed to create directory");

        let expected = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp directory");
        assert_eq!(nested.best_effort_path_display(), expected.display().to_string());
    }

    #[test]
    fn missing_path_is_folded_lexically() {
        let display = "/definitely/missing/./a/../b.tree".best_effort_path_display();
        assert_eq!(display, "/definitely/missing/b.tree");
    }

    #[test]
    fn missing_relative_path_becomes_absolute() {
        let display = Path::new("missing-dir/tree.txt").best_effort_path_display();
        assert!(Path::new(&display).is_absolute());
        assert!(display.ends_with("missing-dir/tree.txt"));
    }
}
