use crate::{Error, Result};

/// A decoded instruction word.
///
/// `x`/`y` are register indices (0x0..=0xF), `nn` an 8-bit immediate,
/// `n` a 4-bit immediate and `addr` a 12-bit address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    ClearScreen,
    /// 00EE
    Return,
    /// 1NNN
    Jump { addr: u16 },
    /// 2NNN
    Call { addr: u16 },
    /// 3XNN
    SkipIfEqualImm { x: usize, nn: u8 },
    /// 4XNN
    SkipIfNotEqualImm { x: usize, nn: u8 },
    /// 5XY0
    SkipIfEqual { x: usize, y: usize },
    /// 6XNN
    SetImm { x: usize, nn: u8 },
    /// 7XNN
    AddImm { x: usize, nn: u8 },
    /// 8XY0
    Assign { x: usize, y: usize },
    /// 8XY1
    Or { x: usize, y: usize },
    /// 8XY2
    And { x: usize, y: usize },
    /// 8XY3
    Xor { x: usize, y: usize },
    /// 8XY4
    AddWithCarry { x: usize, y: usize },
    /// 8XY5
    Sub { x: usize, y: usize },
    /// 8XY6
    ShiftRight { x: usize, y: usize },
    /// 8XY7
    SubReversed { x: usize, y: usize },
    /// 8XYE
    ShiftLeft { x: usize, y: usize },
    /// 9XY0
    SkipIfNotEqual { x: usize, y: usize },
    /// ANNN
    SetIndex { addr: u16 },
    /// BNNN (BXNN under modern rules)
    JumpWithOffset { x: usize, addr: u16 },
    /// CXNN
    Random { x: usize, nn: u8 },
    /// DXYN
    Draw { x: usize, y: usize, n: u8 },
    /// EX9E
    SkipIfKeyPressed { x: usize },
    /// EXA1
    SkipIfKeyNotPressed { x: usize },
    /// FX07
    ReadDelayTimer { x: usize },
    /// FX0A
    WaitForKey { x: usize },
    /// FX15
    SetDelayTimer { x: usize },
    /// FX18
    SetSoundTimer { x: usize },
    /// FX1E
    AddToIndex { x: usize },
    /// FX29
    FontCharAddress { x: usize },
    /// FX33
    StoreBcd { x: usize },
    /// FX55
    StoreRegisters { x: usize },
    /// FX65
    LoadRegisters { x: usize },
}

impl Instruction {
    pub fn decode(op: u16) -> Result<Self> {
        let digit1 = (op & 0xF000) >> 12;
        let digit2 = (op & 0x0F00) >> 8;
        let digit3 = (op & 0x00F0) >> 4;
        let digit4 = op & 0x000F;

        let x = digit2 as usize;
        let y = digit3 as usize;
        let n = digit4 as u8;
        let nn = (op & 0x00FF) as u8;
        let addr = op & 0x0FFF;

        let instruction = match (digit1, digit2, digit3, digit4) {
            (0x0, 0x0, 0xE, 0x0) => Self::ClearScreen,
            (0x0, 0x0, 0xE, 0xE) => Self::Return,
            (0x1, _, _, _) => Self::Jump { addr },
            (0x2, _, _, _) => Self::Call { addr },
            (0x3, _, _, _) => Self::SkipIfEqualImm { x, nn },
            (0x4, _, _, _) => Self::SkipIfNotEqualImm { x, nn },
            (0x5, _, _, 0x0) => Self::SkipIfEqual { x, y },
            (0x6, _, _, _) => Self::SetImm { x, nn },
            (0x7, _, _, _) => Self::AddImm { x, nn },
            (0x8, _, _, 0x0) => Self::Assign { x, y },
            (0x8, _, _, 0x1) => Self::Or { x, y },
            (0x8, _, _, 0x2) => Self::And { x, y },
            (0x8, _, _, 0x3) => Self::Xor { x, y },
            (0x8, _, _, 0x4) => Self::AddWithCarry { x, y },
            (0x8, _, _, 0x5) => Self::Sub { x, y },
            (0x8, _, _, 0x6) => Self::ShiftRight { x, y },
            (0x8, _, _, 0x7) => Self::SubReversed { x, y },
            (0x8, _, _, 0xE) => Self::ShiftLeft { x, y },
            (0x9, _, _, 0x0) => Self::SkipIfNotEqual { x, y },
            (0xA, _, _, _) => Self::SetIndex { addr },
            (0xB, _, _, _) => Self::JumpWithOffset { x, addr },
            (0xC, _, _, _) => Self::Random { x, nn },
            (0xD, _, _, _) => Self::Draw { x, y, n },
            (0xE, _, 0x9, 0xE) => Self::SkipIfKeyPressed { x },
            (0xE, _, 0xA, 0x1) => Self::SkipIfKeyNotPressed { x },
            (0xF, _, 0x0, 0x7) => Self::ReadDelayTimer { x },
            (0xF, _, 0x0, 0xA) => Self::WaitForKey { x },
            (0xF, _, 0x1, 0x5) => Self::SetDelayTimer { x },
            (0xF, _, 0x1, 0x8) => Self::SetSoundTimer { x },
            (0xF, _, 0x1, 0xE) => Self::AddToIndex { x },
            (0xF, _, 0x2, 0x9) => Self::FontCharAddress { x },
            (0xF, _, 0x3, 0x3) => Self::StoreBcd { x },
            (0xF, _, 0x5, 0x5) => Self::StoreRegisters { x },
            (0xF, _, 0x6, 0x5) => Self::LoadRegisters { x },
            // 0NNN machine-code calls and every malformed sub-opcode.
            _ => return Err(Error::UnknownOpcode(op)),
        };
        Ok(instruction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_operand_fields() {
        assert_eq!(
            Instruction::decode(0xD123),
            Ok(Instruction::Draw { x: 1, y: 2, n: 3 })
        );
        assert_eq!(
            Instruction::decode(0x6A42),
            Ok(Instruction::SetImm { x: 0xA, nn: 0x42 })
        );
        assert_eq!(
            Instruction::decode(0xB2F0),
            Ok(Instruction::JumpWithOffset { x: 2, addr: 0x2F0 })
        );
        assert_eq!(
            Instruction::decode(0xF733),
            Ok(Instruction::StoreBcd { x: 7 })
        );
    }

    #[test]
    fn register_compare_needs_zero_low_nibble() {
        assert_eq!(
            Instruction::decode(0x5120),
            Ok(Instruction::SkipIfEqual { x: 1, y: 2 })
        );
        assert_eq!(
            Instruction::decode(0x5121),
            Err(Error::UnknownOpcode(0x5121))
        );
        assert_eq!(
            Instruction::decode(0x912F),
            Err(Error::UnknownOpcode(0x912F))
        );
    }

    #[test]
    fn unknown_sub_opcodes_are_rejected() {
        for op in [0x0000, 0x0123, 0x00E1, 0x8128, 0x812F, 0xE19F, 0xF1FF, 0xF166] {
            assert_eq!(Instruction::decode(op), Err(Error::UnknownOpcode(op)));
        }
    }
}
