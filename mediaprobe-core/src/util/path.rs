use std::io;
use std::path::{self, Component, Path, PathBuf};

/// Makes `path` absolute against the current directory and removes `.` and
/// `..` components lexically.
///
/// Symlinks are not resolved and the path does not need to exist.
pub fn absolute_normalized(path: &Path) -> io::Result<PathBuf> {
    let absolute = path::absolute(path)?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_removes_dot_components() {
        let p = absolute_normalized(Path::new("/media/./shows/../movies/film.mkv")).unwrap();
        assert_eq!(p, PathBuf::from("/media/movies/film.mkv"));
    }

    #[cfg(unix)]
    #[test]
    fn test_parent_of_root_stays_at_root() {
        let p = absolute_normalized(Path::new("/../film.mkv")).unwrap();
        assert_eq!(p, PathBuf::from("/film.mkv"));
    }

    #[test]
    fn test_relative_paths_become_absolute() {
        let p = absolute_normalized(Path::new("film.mkv")).unwrap();
        assert!(p.is_absolute());
        assert!(p.ends_with("film.mkv"));
        assert_eq!(p, std::env::current_dir().unwrap().join("film.mkv"));
    }

    #[test]
    fn test_empty_path_is_an_error() {
        assert!(absolute_normalized(Path::new("")).is_err());
    }
}
