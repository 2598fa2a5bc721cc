//! Tests for the IMAT container reader

use std::io::Cursor;

use super::test_utils::create_test_container;
use crate::matrix::{ContainerReader, MatrixError};

#[test]
fn test_read_valid_container() {
    let mut cursor = create_test_container(1, 2, 1, 3, 8, &[10, 20, 30, 40, 50, 60]);

    let (header, matrix) = ContainerReader::read(&mut cursor).unwrap();
    assert_eq!(header.version, 1);
    assert_eq!((header.width, header.height, header.channels, header.depth), (2, 1, 3, 8));
    assert_eq!(matrix.data(), &[10, 20, 30, 40, 50, 60]);
}

#[test]
fn test_bad_magic() {
    let mut bytes = create_test_container(1, 1, 1, 1, 8, &[0]).into_inner();
    bytes[0] = b'X';

    let result = ContainerReader::read(&mut Cursor::new(bytes));
    assert!(matches!(result, Err(MatrixError::InvalidContainer(_))));
}

#[test]
fn test_unsupported_version() {
    let mut cursor = create_test_container(2, 1, 1, 1, 8, &[0]);
    assert!(matches!(ContainerReader::read(&mut cursor), Err(MatrixError::InvalidContainer(_))));
}

#[test]
fn test_unsupported_depth() {
    let mut cursor = create_test_container(1, 1, 1, 1, 16, &[0, 0]);
    assert!(matches!(ContainerReader::read(&mut cursor), Err(MatrixError::InvalidContainer(_))));
}

#[test]
fn test_truncated_header() {
    let mut cursor = Cursor::new(b"IMAT\x01\x00".to_vec());
    assert!(matches!(ContainerReader::read(&mut cursor), Err(MatrixError::InvalidContainer(_))));
}

#[test]
fn test_truncated_payload() {
    let mut cursor = create_test_container(1, 2, 2, 1, 8, &[1, 2, 3]);
    assert!(matches!(
        ContainerReader::read(&mut cursor),
        Err(MatrixError::InvalidLength { expected: 4, actual: 3 })
    ));
}

#[test]
fn test_trailing_data() {
    let mut cursor = create_test_container(1, 1, 1, 1, 8, &[1, 2]);
    assert!(matches!(ContainerReader::read(&mut cursor), Err(MatrixError::InvalidContainer(_))));
}
