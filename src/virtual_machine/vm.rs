//! The SML machine and its fetch-execute loop.
//!
//! The machine owns the program, the register file and the program counter.
//! Each step fetches the instruction at the counter, executes it, and applies
//! the returned [`ControlSignal`]. A run halts when the counter reaches the
//! end of the program.
//!
//! The machine never touches the process-wide log level. Its own messages are
//! filtered against [`MachineConfig::log_level`], and trace lines, once
//! enabled, are always written.

use crate::utils::log::Level;
use crate::virtual_machine::config::MachineConfig;
use crate::virtual_machine::errors::VMError;
use crate::virtual_machine::instruction::{ControlSignal, Instruction};
use crate::virtual_machine::program::Program;
use crate::virtual_machine::registers::Registers;
use crate::{debug, error, info, warn};

/// SML virtual machine.
pub struct Machine {
    /// Loaded program, immutable after construction.
    program: Program,
    /// Register file.
    registers: Registers,
    /// Index of the next instruction to execute.
    pc: usize,
    /// Instructions executed since the last [`Machine::run`].
    steps: u64,
    config: MachineConfig,
}

impl Machine {
    /// Creates a machine for `program` with the default configuration.
    pub fn new(program: Program) -> Self {
        Self::with_config(program, MachineConfig::default())
    }

    /// Creates a machine for `program` with an explicit configuration.
    pub fn with_config(program: Program, config: MachineConfig) -> Self {
        Self {
            program,
            registers: Registers::new(),
            pc: 0,
            steps: 0,
            config,
        }
    }

    /// Creates a machine for `program` configured from the `SML_*`
    /// environment variables.
    pub fn from_env(program: Program) -> Result<Self, VMError> {
        Ok(Self::with_config(program, MachineConfig::from_env()?))
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Runs the program from the first instruction until it halts.
    ///
    /// Registers keep their current values, so callers can seed inputs
    /// before running.
    pub fn run(&mut self) -> Result<(), VMError> {
        self.pc = 0;
        self.steps = 0;
        let min = self.config.log_level;
        debug!(min: min; "running {} instructions", self.program.len());
        while self.step().inspect_err(|e| match e {
            VMError::StepLimitExceeded { .. } => warn!(min: min; "{e}"),
            _ => error!(min: min; "pc {}: {e}", self.pc),
        })? {}
        debug!(min: min; "halted after {} steps: {}", self.steps, self.registers);
        Ok(())
    }

    /// Executes the instruction at the program counter.
    ///
    /// Returns `false` without executing anything once the counter is at the
    /// end of the program.
    pub fn step(&mut self) -> Result<bool, VMError> {
        let Some(instr) = self.program.get(self.pc) else {
            return Ok(false);
        };
        if let Some(limit) = self.config.step_limit {
            if self.steps >= limit {
                return Err(VMError::StepLimitExceeded { limit, pc: self.pc });
            }
        }
        if self.config.trace {
            info!(min: Level::Debug; "{}", trace_line(self.pc, instr));
        }
        let signal = instr.execute_on(&mut self.registers)?;
        self.steps += 1;
        self.apply(signal)?;
        Ok(true)
    }

    /// Moves the program counter according to `signal`.
    ///
    /// A jump may target one past the last instruction, which halts the run.
    fn apply(&mut self, signal: ControlSignal) -> Result<(), VMError> {
        self.pc = match signal {
            ControlSignal::Advance => self.pc + 1,
            ControlSignal::JumpTo(target) if target <= self.program.len() => target,
            ControlSignal::JumpTo(target) => {
                return Err(VMError::InvalidJumpTarget {
                    target,
                    len: self.program.len(),
                });
            }
        };
        Ok(())
    }
}

/// Formats the trace line written before executing `instr` at `pc`.
fn trace_line(pc: usize, instr: &Instruction) -> String {
    format!("{pc:>4}: {instr}")
}
