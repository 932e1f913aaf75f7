//! Static LFSR tap-mask preset tables.
//!
//! Read-only reference data for the 8/16/32/64-bit Galois shift registers.
//! Tap masks are bare hexadecimal strings, never derived at runtime.

use crate::config::AlgorithmId;

/// A named feedback polynomial for one LFSR width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LfsrPreset {
    pub name: &'static str,
    /// Tap mask in hexadecimal, width matching the register.
    pub tap: &'static str,
    pub description: &'static str,
}

/// 8-bit presets.
pub const LFSR8_PRESETS: [LfsrPreset; 6] = [
    LfsrPreset {
        name: "Max Length (1D)",
        tap: "1D",
        description: "Maximal length period (255).",
    },
    LfsrPreset {
        name: "Standard (B8)",
        tap: "B8",
        description: "Maximal length configuration.",
    },
    LfsrPreset {
        name: "Alt Max (8D)",
        tap: "8D",
        description: "Another primitive polynomial.",
    },
    LfsrPreset {
        name: "Simple (8E)",
        tap: "8E",
        description: "Non-maximal, shorter cycle.",
    },
    LfsrPreset {
        name: "CRT (71)",
        tap: "71",
        description: "CRT controller timing circuits.",
    },
    LfsrPreset {
        name: "Compact (9B)",
        tap: "9B",
        description: "Optimized for hardware gates.",
    },
];

/// 16-bit presets.
pub const LFSR16_PRESETS: [LfsrPreset; 6] = [
    LfsrPreset {
        name: "Standard (B400)",
        tap: "B400",
        description: "Standard maximal length (65535).",
    },
    LfsrPreset {
        name: "CCITT (1021)",
        tap: "1021",
        description: "Common in CRC-CCITT (X.25).",
    },
    LfsrPreset {
        name: "IBM (8005)",
        tap: "8005",
        description: "Used in CRC-16 (IBM/ANSI).",
    },
    LfsrPreset {
        name: "Maxim (8003)",
        tap: "8003",
        description: "Used in Maxim iButton devices.",
    },
    LfsrPreset {
        name: "Modbus (A001)",
        tap: "A001",
        description: "Used in Modbus communication protocol.",
    },
    LfsrPreset {
        name: "USB (800D)",
        tap: "800D",
        description: "Polynomial used in USB CRC16.",
    },
];

/// 32-bit presets.
pub const LFSR32_PRESETS: [LfsrPreset; 6] = [
    LfsrPreset {
        name: "Xilinx Standard",
        tap: "80200003",
        description: "Xilinx application note standard taps.",
    },
    LfsrPreset {
        name: "CRC-32 (04C11DB7)",
        tap: "04C11DB7",
        description: "Ethernet, ZIP, PNG checksum standard.",
    },
    LfsrPreset {
        name: "Ethernet (EDB88320)",
        tap: "EDB88320",
        description: "Reversed representation of CRC-32.",
    },
    LfsrPreset {
        name: "SATA (00000057)",
        tap: "00000057",
        description: "Used in SATA hashing.",
    },
    LfsrPreset {
        name: "Castagnoli (1EDC6F41)",
        tap: "1EDC6F41",
        description: "CRC-32C, used in iSCSI/Btrfs.",
    },
    LfsrPreset {
        name: "Koopman (741B8CD7)",
        tap: "741B8CD7",
        description: "Optimized for error detection.",
    },
];

/// 64-bit presets.
pub const LFSR64_PRESETS: [LfsrPreset; 4] = [
    LfsrPreset {
        name: "Standard Max Length",
        tap: "D800000000000000",
        description: "Primitive polynomial for maximal period.",
    },
    LfsrPreset {
        name: "ECMA-182",
        tap: "C96C5795D7870F42",
        description: "ECMA-182 standard for 64-bit CRC.",
    },
    LfsrPreset {
        name: "Jones (95AC9329AC4BC9B5)",
        tap: "95AC9329AC4BC9B5",
        description: "Another primitive polynomial.",
    },
    LfsrPreset {
        name: "ISO 3309 (000000000000001B)",
        tap: "000000000000001B",
        description: "Used in HDLC.",
    },
];

/// Returns the preset table for an LFSR algorithm, or an empty slice for
/// non-LFSR algorithms.
pub fn presets_for(id: AlgorithmId) -> &'static [LfsrPreset] {
    match id {
        AlgorithmId::Lfsr8 => &LFSR8_PRESETS,
        AlgorithmId::Lfsr16 => &LFSR16_PRESETS,
        AlgorithmId::Lfsr32 => &LFSR32_PRESETS,
        AlgorithmId::Lfsr64 => &LFSR64_PRESETS,
        _ => &[],
    }
}
