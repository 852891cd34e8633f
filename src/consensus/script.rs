//! Script byte builder
//!
//! Only the push and opcode encoding needed to assemble coinbase scripts and
//! pay-to-pubkey outputs. Script execution lives outside this crate.

use serde::{Deserialize, Serialize};

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_CHECKSIG: u8 = 0xac;

/// Raw script bytes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script(pub Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Push an integer, using `OP_N` for -1 and 0..=16
    pub fn push_int(mut self, n: i64) -> Self {
        match n {
            0 => self.0.push(OP_0),
            -1 => self.0.push(OP_1NEGATE),
            1..=16 => self.0.push(OP_1 + (n as u8) - 1),
            _ => return self.push_slice(&script_num_bytes(n)),
        }
        self
    }

    /// Push an integer as minimally encoded script-number data, never as `OP_N`
    pub fn push_script_num(self, n: i64) -> Self {
        self.push_slice(&script_num_bytes(n))
    }

    /// Push raw data with the smallest applicable push opcode
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.0.push(opcode);
        self
    }

    /// Pay-to-pubkey output script: `<pubkey> OP_CHECKSIG`
    pub fn pay_to_pubkey(pubkey: &[u8]) -> Self {
        Self::new().push_slice(pubkey).push_opcode(OP_CHECKSIG)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Little-endian sign-magnitude encoding used for numbers inside scripts
pub fn script_num_bytes(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }

    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // The top bit carries the sign, so a set top bit needs an extra byte
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}
