use super::*;

#[test]
fn test_dir_entry_new() {
    let entry = DirEntry::new(PathBuf::from("/test/file.txt"), false);
    assert_eq!(entry.name, "file.txt");
    assert!(!entry.is_dir);
}

#[test]
fn test_file_error_display() {
    let err = FileError::NotFound(PathBuf::from("/test"));
    assert!(err.to_string().contains("/test"));
}

#[test]
fn test_from_io_classifies_kinds() {
    let path = Path::new("/notes.txt");
    let err = FileError::from_io(io::Error::from(io::ErrorKind::NotFound), path);
    assert!(matches!(err, FileError::NotFound(p) if p == path));

    let err = FileError::from_io(io::Error::from(io::ErrorKind::PermissionDenied), path);
    assert!(matches!(err, FileError::PermissionDenied(_)));

    let err = FileError::from_io(io::Error::from(io::ErrorKind::InvalidData), path);
    assert!(err.to_string().contains("UTF-8"));

    let err = FileError::from_io(io::Error::from(io::ErrorKind::Interrupted), path);
    assert!(matches!(err, FileError::Io(_)));
}
