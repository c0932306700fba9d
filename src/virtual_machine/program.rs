//! Loaded program representation.
//!
//! A [`Program`] is the ordered instruction sequence the machine runs,
//! together with the label table derived from the instructions' labels.

use crate::virtual_machine::errors::VMError;
use crate::virtual_machine::instruction::Instruction;
use crate::virtual_machine::labels::Labels;
use std::fmt::{Display, Formatter};

/// Immutable instruction sequence with its labels.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Program {
    instructions: Vec<Instruction>,
    labels: Labels,
}

impl Program {
    /// Builds a program, binding every label to its instruction index.
    ///
    /// Returns [`VMError::DuplicateLabel`] if two instructions share a label.
    pub fn new(instructions: Vec<Instruction>) -> Result<Self, VMError> {
        let mut labels = Labels::new();
        for (address, instr) in instructions.iter().enumerate() {
            if let Some(label) = instr.label() {
                labels.add_label(label, address)?;
            }
        }
        Ok(Self {
            instructions,
            labels,
        })
    }

    /// Returns the instruction at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}

/// Program listing, one instruction per line.
impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for instr in &self.instructions {
            writeln!(f, "{instr}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::virtual_machine::registers::Register::*;

    #[test]
    fn labels_bound_to_indices() {
        let program = Program::new(vec![
            Instruction::add(Some("f1"), EAX, EBX),
            Instruction::add(None, EAX, ECX),
            Instruction::add(Some("f3"), EDX, EAX),
        ])
        .unwrap();
        assert_eq!(program.len(), 3);
        assert_eq!(program.labels().len(), 2);
        assert_eq!(program.labels().address_of("f1"), Ok(0));
        assert_eq!(program.labels().address_of("f3"), Ok(2));
    }

    #[test]
    fn duplicate_label_rejected() {
        let result = Program::new(vec![
            Instruction::add(Some("f1"), EAX, EBX),
            Instruction::add(Some("f1"), EAX, ECX),
        ]);
        assert_eq!(
            result,
            Err(VMError::DuplicateLabel { label: "f1".into() })
        );
    }

    #[test]
    fn get_out_of_range() {
        let program = Program::new(vec![Instruction::add(None, EAX, EBX)]).unwrap();
        assert!(program.get(0).is_some());
        assert!(program.get(1).is_none());
        assert!(Program::default().is_empty());
    }

    #[test]
    fn listing() {
        let program = Program::new(vec![
            Instruction::add(Some("f3"), EAX, ECX),
            Instruction::add(None, EBX, EBX),
        ])
        .unwrap();
        assert_eq!(program.to_string(), "f3: add EAX ECX\nadd EBX EBX\n");
        assert_eq!(program.instructions()[1], Instruction::add(None, EBX, EBX));
    }
}
