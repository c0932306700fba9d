//! The instruction contract.
//!
//! An [`Instruction`] pairs an optional label with an [`Operation`]. The run
//! loop calls [`Instruction::execute`] on the instruction at the program
//! counter and applies the returned [`ControlSignal`].
//!
//! Equality and hashing are structural over the label and the operation, the
//! latter including its variant tag, so instructions of different kinds never
//! compare equal.

use crate::virtual_machine::errors::VMError;
use crate::virtual_machine::isa::Operation;
use crate::virtual_machine::registers::{Register, Registers};
use crate::virtual_machine::vm::Machine;
use std::fmt::{Display, Formatter};

/// What the machine should do with its program counter after an instruction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ControlSignal {
    /// Continue with the next instruction (`pc += 1`).
    Advance,
    /// Continue at the given absolute instruction index.
    JumpTo(usize),
}

/// A single SML instruction.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Instruction {
    label: Option<String>,
    operation: Operation,
}

impl Instruction {
    /// Creates an instruction from an optional label and an operation.
    pub fn new(label: Option<&str>, operation: Operation) -> Self {
        Self {
            label: label.map(str::to_string),
            operation,
        }
    }

    /// Creates an `add result source` instruction.
    pub fn add(label: Option<&str>, result: Register, source: Register) -> Self {
        Self::new(label, Operation::Add { result, source })
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn opcode(&self) -> &'static str {
        self.operation.opcode()
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    /// Executes this instruction against `machine`.
    ///
    /// The instruction only touches the machine for the duration of the call
    /// and never moves the program counter itself.
    pub fn execute(&self, machine: &mut Machine) -> Result<ControlSignal, VMError> {
        self.execute_on(machine.registers_mut())
    }

    /// Executes this instruction against a bare register file.
    pub(crate) fn execute_on(&self, registers: &mut Registers) -> Result<ControlSignal, VMError> {
        match &self.operation {
            Operation::Add { result, source } => op_add(registers, *result, *source),
        }
    }
}

/// `result = result + source`, wrapping on overflow. Never branches.
fn op_add(
    registers: &mut Registers,
    result: Register,
    source: Register,
) -> Result<ControlSignal, VMError> {
    let value1 = registers.get(result);
    let value2 = registers.get(source);
    registers.set(result, value1.wrapping_add(value2));
    Ok(ControlSignal::Advance)
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "{label}: ")?;
        }
        write!(f, "{}", self.operation)
    }
}
