//! Instruction set definition.
//!
//! The [`for_each_operation!`](crate::for_each_operation) macro holds the
//! canonical operation table and invokes a callback macro for code generation,
//! so every piece of per-operation boilerplate is derived from one list.
//!
//! This module generates:
//! - The [`Operation`] enum, one struct-like variant per opcode
//! - [`Operation::opcode`] returning the assembly mnemonic
//! - Operand rendering used by the instruction listing
//!
//! Adding an operation means adding one table row here and one execution arm
//! in [`instruction`](super::instruction).

use crate::virtual_machine::registers::Register;
use std::fmt::{Display, Formatter};

/// Invokes a callback macro with the complete operation table.
#[macro_export]
macro_rules! for_each_operation {
    ($callback:ident) => {
        $callback! {
            /// add result source ; result = result + source (32-bit wrapping)
            Add = "add" => [result: Register, source: Register],
        }
    };
}

#[macro_export]
macro_rules! define_operations {
    (
        $(
            $(#[$doc:meta])*
            $name:ident = $opcode:literal => [
                $( $field:ident : $ty:ident ),* $(,)?
            ]
        ),* $(,)?
    ) => {
        /// Opcode together with its operands.
        #[derive(Clone, Debug, Eq, PartialEq, Hash)]
        pub enum Operation {
            $(
                $(#[$doc])*
                $name { $( $field: $ty ),* },
            )*
        }

        impl Operation {
            /// Returns the assembly mnemonic for this operation.
            pub const fn opcode(&self) -> &'static str {
                match self {
                    $( Operation::$name { .. } => $opcode, )*
                }
            }

            /// Writes each operand preceded by a single space.
            fn fmt_operands(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Operation::$name { $( $field ),* } => {
                            $( write!(f, " {}", $field)?; )*
                            Ok(())
                        }
                    )*
                }
            }
        }
    };
}

for_each_operation!(define_operations);

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.opcode())?;
        self.fmt_operands(f)
    }
}
