//! Unit tests for the matrix module

#[cfg(test)]
mod mode_tests;
#[cfg(test)]
mod reader_tests;
