//! Generic helpers.

use std::fmt::Debug;
use std::io::{self, Write};

/// Returns whether `value` occurs in `list`.
pub fn includes<T: PartialEq>(list: &[T], value: &T) -> bool {
    list.iter().any(|item| item == value)
}

/// Sums any numeric slice.
pub fn sum<T: Copy + std::iter::Sum<T>>(nums: &[T]) -> T {
    nums.iter().copied().sum()
}

/// Keeps the items for which `keep` returns true, preserving order.
pub fn filter<T: PartialOrd + Clone>(list: &[T], keep: impl Fn(&T) -> bool) -> Vec<T> {
    list.iter().filter(|item| keep(item)).cloned().collect()
}

/// Writes one debug line per item.
pub fn print_list<T: Debug>(out: &mut impl Write, items: &[T]) -> io::Result<()> {
    for item in items {
        writeln!(out, "{item:?}")?;
    }
    Ok(())
}

/// Product keyed by any identifier type (numeric SKU, string code, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Product<Id> {
    pub id: Id,
    pub description: String,
    pub price: f32,
}

impl<Id> Product<Id> {
    pub fn new(id: Id, description: impl Into<String>, price: f32) -> Self {
        Self {
            id,
            description: description.into(),
            price,
        }
    }
}
