/// Fatal decode faults raised by [`crate::Cpu::step`].
///
/// Hardware has no graceful continuation for these, so the CPU latches the
/// first fault and keeps returning it until it is reset.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    #[error("undefined opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    UndefinedOpcode { pc: u16, opcode: u8 },
    #[error("undefined CB-prefixed opcode 0xCB 0x{opcode:02X} at PC=0x{pc:04X}")]
    UndefinedExtendedOpcode { pc: u16, opcode: u8 },
}

impl CpuError {
    /// Address of the instruction that failed to decode.
    pub fn pc(&self) -> u16 {
        match *self {
            CpuError::UndefinedOpcode { pc, .. } | CpuError::UndefinedExtendedOpcode { pc, .. } => pc,
        }
    }

    pub fn opcode(&self) -> u8 {
        match *self {
            CpuError::UndefinedOpcode { opcode, .. }
            | CpuError::UndefinedExtendedOpcode { opcode, .. } => opcode,
        }
    }
}

pub type Result<T> = std::result::Result<T, CpuError>;
