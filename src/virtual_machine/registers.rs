//! Register names and the register file.
//!
//! SML has a fixed set of eight general-purpose registers, each holding a
//! signed 32-bit integer. All registers start at zero.

use crate::virtual_machine::errors::VMError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Number of registers in the SML register file.
pub const REGISTER_COUNT: usize = 8;

/// Symbolic name of an SML register.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Register {
    EAX = 0,
    EBX = 1,
    ECX = 2,
    EDX = 3,
    ESP = 4,
    EBP = 5,
    ESI = 6,
    EDI = 7,
}

impl Register {
    /// All registers in declaration order.
    pub const ALL: [Register; REGISTER_COUNT] = [
        Register::EAX,
        Register::EBX,
        Register::ECX,
        Register::EDX,
        Register::ESP,
        Register::EBP,
        Register::ESI,
        Register::EDI,
    ];

    /// Returns the register's assembly name.
    pub const fn name(&self) -> &'static str {
        match self {
            Register::EAX => "EAX",
            Register::EBX => "EBX",
            Register::ECX => "ECX",
            Register::EDX => "EDX",
            Register::ESP => "ESP",
            Register::EBP => "EBP",
            Register::ESI => "ESI",
            Register::EDI => "EDI",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl Display for Register {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Register {
    type Err = VMError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Register::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| VMError::UnknownRegister {
                name: s.to_string(),
            })
    }
}

/// Register file holding one `i32` per [`Register`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Registers {
    regs: [i32; REGISTER_COUNT],
}

impl Registers {
    /// Creates a register file with every register set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value held in `reg`.
    pub fn get(&self, reg: Register) -> i32 {
        self.regs[reg.index()]
    }

    /// Stores `value` into `reg`.
    pub fn set(&mut self, reg: Register, value: i32) {
        self.regs[reg.index()] = value;
    }

    /// Resets every register to zero.
    pub fn clear(&mut self) {
        self.regs = [0; REGISTER_COUNT];
    }
}

impl Display for Registers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, reg) in Register::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} = {}", reg, self.get(*reg))?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_start_at_zero() {
        let regs = Registers::new();
        for reg in Register::ALL {
            assert_eq!(regs.get(reg), 0);
        }
    }

    #[test]
    fn set_only_touches_target() {
        let mut regs = Registers::new();
        regs.set(Register::ECX, -7);
        assert_eq!(regs.get(Register::ECX), -7);
        assert_eq!(regs.get(Register::EAX), 0);
        assert_eq!(regs.get(Register::EDX), 0);
    }

    #[test]
    fn clear_resets_all() {
        let mut regs = Registers::new();
        regs.set(Register::EAX, 1);
        regs.set(Register::EDI, i32::MIN);
        regs.clear();
        assert_eq!(regs, Registers::new());
    }

    #[test]
    fn parse_known_names() {
        for reg in Register::ALL {
            assert_eq!(reg.name().parse::<Register>(), Ok(reg));
        }
    }

    #[test]
    fn parse_unknown_name() {
        assert_eq!(
            "eax".parse::<Register>(),
            Err(VMError::UnknownRegister {
                name: "eax".into()
            })
        );
        assert!(matches!(
            "R1".parse::<Register>(),
            Err(VMError::UnknownRegister { .. })
        ));
    }

    #[test]
    fn display_register_file() {
        let mut regs = Registers::new();
        regs.set(Register::EBX, 5);
        assert_eq!(
            regs.to_string(),
            "[EAX = 0, EBX = 5, ECX = 0, EDX = 0, ESP = 0, EBP = 0, ESI = 0, EDI = 0]"
        );
    }
}
