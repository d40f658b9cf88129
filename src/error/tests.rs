use super::*;
use std::io;

#[test]
fn test_severity_ordering() {
    assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
}

#[test]
fn test_constructors_set_severity() {
    let err = SwatchError::new(ErrorType::Buffer, errors::INVALID_CURSOR, "past end");
    assert_eq!(err.severity, ErrorSeverity::Error);
    assert_eq!(err.kind, ErrorType::Buffer);
    assert_eq!(err.code, "INVALID_CURSOR");

    let err = SwatchError::critical(ErrorType::Internal, errors::RANGE_ORDER, "unsorted");
    assert_eq!(err.severity, ErrorSeverity::Critical);
    assert_eq!(err.message, "unsorted");
}

#[test]
fn test_display() {
    let err = SwatchError::critical(
        ErrorType::Internal,
        errors::RANGE_ORDER,
        "Range 3..4 added after 5..6",
    );
    assert_eq!(
        err.to_string(),
        "[CRITICAL] Internal(RANGE_ORDER): Range 3..4 added after 5..6"
    );

    let err = SwatchError::new(ErrorType::Io, errors::IO_ERROR, "denied");
    assert_eq!(err.to_string(), "[ERROR] IO(IO_ERROR): denied");
}

#[test]
fn test_question_mark_converts_io_errors() {
    fn read_missing() -> Result<String> {
        Ok(std::fs::read_to_string("/definitely/not/a/real/path.md")?)
    }

    let err = read_missing().unwrap_err();
    assert_eq!(err.kind, ErrorType::Io);
    assert_eq!(err.code, errors::IO_ERROR);

    let err: SwatchError = io::Error::new(io::ErrorKind::NotFound, "no such file").into();
    assert!(err.message.contains("no such file"));
}
