//! SML virtual machine library.
//!
//! Provides the instruction contract of the SML teaching machine, the `add`
//! reference instruction, and the register file and run loop that drive it.

pub mod utils;
pub mod virtual_machine;
