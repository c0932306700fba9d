//! Register-based virtual machine for SML programs.
//!
//! # Architecture
//!
//! - **Registers**: eight named registers (`EAX` .. `EDI`) holding `i32` values,
//!   all starting at zero
//! - **Instructions**: an optional label plus an [`isa::Operation`]; executing one
//!   mutates registers and returns an [`instruction::ControlSignal`]
//! - **Execution model**: fetch the instruction at the program counter, execute,
//!   then advance by one or jump to an absolute index; halt at the end of the program
//! - **Arithmetic**: 32-bit signed, wrapping on overflow
//!
//! # Modules
//!
//! - [`config`]: Run-loop configuration and environment overrides
//! - [`errors`]: Machine error type
//! - [`instruction`]: Instruction contract and control signals
//! - [`isa`]: Operation table and opcode mappings
//! - [`labels`]: Label to instruction index table
//! - [`program`]: Loaded instruction sequence and listing
//! - [`registers`]: Register names and register file
//! - [`vm`]: The machine and its run loop

pub mod config;
pub mod errors;
pub mod instruction;
pub mod isa;
#[cfg(test)]
mod isa_static_check;
pub mod labels;
pub mod program;
pub mod registers;
pub mod vm;
