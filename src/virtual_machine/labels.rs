//! Label table.
//!
//! Maps each instruction label to the index of the instruction carrying it.
//! Labels are unique within a program.

use crate::virtual_machine::errors::VMError;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Label table mapping label names to instruction indices.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Labels {
    labels: HashMap<String, usize>,
}

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `label` to `address`.
    ///
    /// Returns [`VMError::DuplicateLabel`] if the label is already bound.
    pub fn add_label(&mut self, label: &str, address: usize) -> Result<(), VMError> {
        if self.labels.contains_key(label) {
            return Err(VMError::DuplicateLabel {
                label: label.to_string(),
            });
        }
        self.labels.insert(label.to_string(), address);
        Ok(())
    }

    /// Returns the instruction index bound to `label`.
    ///
    /// Returns [`VMError::UndefinedLabel`] if no instruction carries it.
    pub fn address_of(&self, label: &str) -> Result<usize, VMError> {
        self.labels
            .get(label)
            .copied()
            .ok_or_else(|| VMError::UndefinedLabel {
                label: label.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }
}

impl Display for Labels {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut entries: Vec<_> = self.labels.iter().collect();
        entries.sort();
        f.write_str("[")?;
        for (i, (label, address)) in entries.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{label} -> {address}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_lookup() {
        let mut labels = Labels::new();
        labels.add_label("f1", 0).unwrap();
        labels.add_label("f2", 3).unwrap();
        assert_eq!(labels.address_of("f1"), Ok(0));
        assert_eq!(labels.address_of("f2"), Ok(3));
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn duplicate_label_rejected() {
        let mut labels = Labels::new();
        labels.add_label("loop", 1).unwrap();
        assert_eq!(
            labels.add_label("loop", 4),
            Err(VMError::DuplicateLabel {
                label: "loop".into()
            })
        );
        // First binding wins
        assert_eq!(labels.address_of("loop"), Ok(1));
    }

    #[test]
    fn undefined_label() {
        let labels = Labels::new();
        assert!(matches!(
            labels.address_of("nowhere"),
            Err(VMError::UndefinedLabel { label }) if label == "nowhere"
        ));
    }

    #[test]
    fn display_sorted() {
        let mut labels = Labels::new();
        labels.add_label("f3", 2).unwrap();
        labels.add_label("f1", 0).unwrap();
        labels.add_label("f2", 1).unwrap();
        assert_eq!(labels.to_string(), "[f1 -> 0, f2 -> 1, f3 -> 2]");
    }

    #[test]
    fn clear_empties_table() {
        let mut labels = Labels::new();
        labels.add_label("a", 0).unwrap();
        labels.clear();
        assert!(labels.is_empty());
        assert_eq!(labels.to_string(), "[]");
    }
}
