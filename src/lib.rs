pub mod arena;
pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod tree;
pub mod util;

use std::fs;
use std::path::Path;

use crate::errors::{BstError, BstResult};
use crate::tree::Bst;

/// Reference dataset from the original exercise, in insertion order.
pub const DEMO_DATASET: [i64; 9] = [25, 36, 48, 41, 29, 65, 62, 12, 10];

/// Builds a tree by inserting the values in the order given.
pub fn build_tree(values: impl IntoIterator<Item = i64>) -> Bst {
    values.into_iter().collect()
}

/// Formats the traversal line exactly as the reference program prints it:
/// every value is followed by a single space, including the last one.
pub fn format_traversal(keys: impl IntoIterator<Item = i64>) -> String {
    let mut line = String::from("In-order Traversal: ");
    for key in keys {
        line.push_str(&key.to_string());
        line.push(' ');
    }
    line
}

/// Parses whitespace-separated signed integers.
///
/// Any token that is not a valid `i64` fails the whole parse and names the
/// offending token in the error.
pub fn parse_values(input: &str) -> BstResult<Vec<i64>> {
    input
        .split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|e| BstError::InvalidValue {
                input: token.to_string(),
                source: e,
            })
        })
        .collect()
}

/// Reads whitespace-separated integers from a file.
pub fn read_values_file(path: &Path) -> BstResult<Vec<i64>> {
    let contents = fs::read_to_string(path)?;
    parse_values(&contents)
}
