use crate::opcode::Instruction;
use crate::{Quirks, Registers};

/// Human-readable description of `op` for step-mode debuggers.
///
/// Register values are substituted where they help; nothing is mutated.
pub fn describe(op: u16, regs: &Registers, delay_timer: u8, quirks: Quirks) -> String {
    let v = &regs.v;
    let Ok(instruction) = Instruction::decode(op) else {
        return "Unknown opcode".to_string();
    };

    match instruction {
        Instruction::ClearScreen => "Clear screen".to_string(),
        Instruction::Return => "Return from subroutine".to_string(),
        Instruction::Jump { addr } => format!("Jump to address 0x{:03X}", addr),
        Instruction::Call { addr } => format!("Call subroutine at 0x{:03X}", addr),
        Instruction::SkipIfEqualImm { x, nn } => format!(
            "Skip next instruction if V{:X} (0x{:02X}) == 0x{:02X}",
            x, v[x], nn
        ),
        Instruction::SkipIfNotEqualImm { x, nn } => format!(
            "Skip next instruction if V{:X} (0x{:02X}) != 0x{:02X}",
            x, v[x], nn
        ),
        Instruction::SkipIfEqual { x, y } => format!(
            "Skip next instruction if V{:X} (0x{:02X}) == V{:X} (0x{:02X})",
            x, v[x], y, v[y]
        ),
        Instruction::SetImm { x, nn } => format!("Set V{:X} = 0x{:02X}", x, nn),
        Instruction::AddImm { x, nn } => format!("Add 0x{:02X} to V{:X}", nn, x),
        Instruction::Assign { x, y } => format!("Set V{:X} = V{:X} (0x{:02X})", x, y, v[y]),
        Instruction::Or { x, y } => format!(
            "Set V{:X} = V{:X} | V{:X} (0x{:02X} | 0x{:02X})",
            x, x, y, v[x], v[y]
        ),
        Instruction::And { x, y } => format!(
            "Set V{:X} = V{:X} & V{:X} (0x{:02X} & 0x{:02X})",
            x, x, y, v[x], v[y]
        ),
        Instruction::Xor { x, y } => format!(
            "Set V{:X} = V{:X} ^ V{:X} (0x{:02X} ^ 0x{:02X})",
            x, x, y, v[x], v[y]
        ),
        Instruction::AddWithCarry { x, y } => format!(
            "Add V{:X} += V{:X} (0x{:02X} + 0x{:02X}) with carry",
            x, y, v[x], v[y]
        ),
        Instruction::Sub { x, y } => format!(
            "Subtract V{:X} -= V{:X} (0x{:02X} - 0x{:02X}) with borrow",
            x, y, v[x], v[y]
        ),
        Instruction::ShiftRight { x, y } if quirks.legacy_shift => format!(
            "Set V{:X} = V{:X} (0x{:02X}) >> 1 with VF = LSB",
            x, y, v[y]
        ),
        Instruction::ShiftRight { x, .. } => {
            format!("Shift V{:X} (0x{:02X}) >> 1 with VF = LSB", x, v[x])
        }
        Instruction::SubReversed { x, y } => format!(
            "Set V{:X} = V{:X} - V{:X} (0x{:02X} - 0x{:02X}) with borrow",
            x, y, x, v[y], v[x]
        ),
        Instruction::ShiftLeft { x, y } if quirks.legacy_shift => format!(
            "Set V{:X} = V{:X} (0x{:02X}) << 1 with VF = MSB",
            x, y, v[y]
        ),
        Instruction::ShiftLeft { x, .. } => {
            format!("Shift V{:X} (0x{:02X}) << 1 with VF = MSB", x, v[x])
        }
        Instruction::SkipIfNotEqual { x, y } => format!(
            "Skip next instruction if V{:X} (0x{:02X}) != V{:X} (0x{:02X})",
            x, v[x], y, v[y]
        ),
        Instruction::SetIndex { addr } => format!("Set I = 0x{:03X}", addr),
        Instruction::JumpWithOffset { addr, .. } if quirks.legacy_jump => {
            format!("Jump to address 0x{:03X} + V0 (0x{:02X})", addr, v[0])
        }
        Instruction::JumpWithOffset { x, addr } => format!(
            "Jump to address 0x{:03X} + V{:X} (0x{:02X})",
            addr, x, v[x]
        ),
        Instruction::Random { x, nn } => format!("Set V{:X} = random & 0x{:02X}", x, nn),
        Instruction::Draw { x, y, n } => format!(
            "Draw sprite at (V{:X},V{:X}) = ({},{}) with height {}",
            x, y, v[x], v[y], n
        ),
        Instruction::SkipIfKeyPressed { x } => format!(
            "Skip next instruction if key V{:X} (0x{:02X}) is pressed",
            x, v[x]
        ),
        Instruction::SkipIfKeyNotPressed { x } => format!(
            "Skip next instruction if key V{:X} (0x{:02X}) is not pressed",
            x, v[x]
        ),
        Instruction::ReadDelayTimer { x } => {
            format!("Set V{:X} = delay timer (0x{:02X})", x, delay_timer)
        }
        Instruction::WaitForKey { x } => format!("Wait for key press and store in V{:X}", x),
        Instruction::SetDelayTimer { x } => {
            format!("Set delay timer = V{:X} (0x{:02X})", x, v[x])
        }
        Instruction::SetSoundTimer { x } => {
            format!("Set sound timer = V{:X} (0x{:02X})", x, v[x])
        }
        Instruction::AddToIndex { x } => format!(
            "Add I += V{:X} (0x{:04X} + 0x{:02X})",
            x, regs.i, v[x]
        ),
        Instruction::FontCharAddress { x } => format!(
            "Set I to font address for hex digit V{:X} (0x{:02X})",
            x, v[x]
        ),
        Instruction::StoreBcd { x } => {
            format!("Store BCD of V{:X} (0x{:02X}) at I, I+1, I+2", x, v[x])
        }
        Instruction::StoreRegisters { x } => format!(
            "Store registers V0-V{:X} at address I (0x{:04X})",
            x, regs.i
        ),
        Instruction::LoadRegisters { x } => format!(
            "Load registers V0-V{:X} from address I (0x{:04X})",
            x, regs.i
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_descriptions() {
        let regs = Registers::default();
        let quirks = Quirks::default();
        assert_eq!(describe(0x00E0, &regs, 0, quirks), "Clear screen");
        assert_eq!(describe(0x1350, &regs, 0, quirks), "Jump to address 0x350");
        assert_eq!(describe(0x6A42, &regs, 0, quirks), "Set VA = 0x42");
        assert_eq!(describe(0x5121, &regs, 0, quirks), "Unknown opcode");
    }

    #[test]
    fn register_values_are_substituted() {
        let mut regs = Registers::default();
        regs.v[5] = 0x10;
        regs.v[6] = 0x20;
        assert_eq!(
            describe(0x8564, &regs, 0, Quirks::default()),
            "Add V5 += V6 (0x10 + 0x20) with carry"
        );
        assert_eq!(
            describe(0xF507, &regs, 0x3C, Quirks::default()),
            "Set V5 = delay timer (0x3C)"
        );
    }

    #[test]
    fn quirks_change_the_text() {
        let mut regs = Registers::default();
        regs.v[0] = 0x01;
        regs.v[2] = 0x07;
        let legacy = Quirks {
            legacy_shift: true,
            legacy_jump: true,
            legacy_store_load: false,
        };
        let modern = Quirks {
            legacy_shift: false,
            legacy_jump: false,
            legacy_store_load: false,
        };

        assert_eq!(
            describe(0xB234, &regs, 0, legacy),
            "Jump to address 0x234 + V0 (0x01)"
        );
        assert_eq!(
            describe(0xB234, &regs, 0, modern),
            "Jump to address 0x234 + V2 (0x07)"
        );
        assert_eq!(
            describe(0x8026, &regs, 0, legacy),
            "Set V0 = V2 (0x07) >> 1 with VF = LSB"
        );
        assert_eq!(
            describe(0x8026, &regs, 0, modern),
            "Shift V0 (0x01) >> 1 with VF = LSB"
        );
    }
}
