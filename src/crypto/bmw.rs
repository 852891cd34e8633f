//! BMW-512 (Blue Midnight Wish)
//!
//! One of the six Quark primitives and the only one without a registry crate.
//! Works on 64-bit little-endian words and 128-byte blocks; the digest is the
//! upper half of the chaining value after a final compression under a fixed key.

const BLOCK_LEN: usize = 128;

const INITIAL_STATE: [u64; 16] = {
    let mut state = [0u64; 16];
    let mut i = 0;
    while i < 16 {
        state[i] = 0x8081_8283_8485_8687u64.wrapping_add(0x0808_0808_0808_0808 * i as u64);
        i += 1;
    }
    state
};

const FINAL_STATE: [u64; 16] = {
    let mut state = [0u64; 16];
    let mut i = 0;
    while i < 16 {
        state[i] = 0xaaaa_aaaa_aaaa_aaa0 + i as u64;
        i += 1;
    }
    state
};

/// Terms of W0..W15 over `M ^ H`; `true` marks a subtracted word
const W_TERMS: [[(usize, bool); 5]; 16] = [
    [(5, false), (7, true), (10, false), (13, false), (14, false)],
    [(6, false), (8, true), (11, false), (14, false), (15, true)],
    [(0, false), (7, false), (9, false), (12, true), (15, false)],
    [(0, false), (1, true), (8, false), (10, true), (13, false)],
    [(1, false), (2, false), (9, false), (11, true), (14, true)],
    [(3, false), (2, true), (10, false), (12, true), (15, false)],
    [(4, false), (0, true), (3, true), (11, true), (13, false)],
    [(1, false), (4, true), (5, true), (12, true), (14, true)],
    [(2, false), (5, true), (6, true), (13, false), (15, true)],
    [(0, false), (3, true), (6, false), (7, true), (14, false)],
    [(8, false), (1, true), (4, true), (7, true), (15, false)],
    [(8, false), (0, true), (2, true), (5, true), (9, false)],
    [(1, false), (3, false), (6, true), (9, true), (10, false)],
    [(2, false), (4, false), (7, false), (10, false), (11, false)],
    [(3, false), (5, true), (8, false), (11, true), (12, true)],
    [(12, false), (4, true), (6, true), (9, true), (13, false)],
];

const EXPAND_ROTATIONS: [u32; 7] = [5, 11, 27, 32, 37, 43, 53];

fn s0(x: u64) -> u64 {
    (x >> 1) ^ (x << 3) ^ x.rotate_left(4) ^ x.rotate_left(37)
}

fn s1(x: u64) -> u64 {
    (x >> 1) ^ (x << 2) ^ x.rotate_left(13) ^ x.rotate_left(43)
}

fn s2(x: u64) -> u64 {
    (x >> 2) ^ (x << 1) ^ x.rotate_left(19) ^ x.rotate_left(53)
}

fn s3(x: u64) -> u64 {
    (x >> 2) ^ (x << 2) ^ x.rotate_left(28) ^ x.rotate_left(59)
}

fn s4(x: u64) -> u64 {
    (x >> 1) ^ x
}

fn s5(x: u64) -> u64 {
    (x >> 2) ^ x
}

/// Message-dependent term shared by both expansion functions
fn add_element(m: &[u64; 16], h: &[u64; 16], j: usize) -> u64 {
    let a = j - 16;
    let rot = |i: usize| m[i % 16].rotate_left((i % 16) as u32 + 1);
    rot(a)
        .wrapping_add(rot(a + 3))
        .wrapping_sub(rot(a + 10))
        .wrapping_add((j as u64).wrapping_mul(0x0555_5555_5555_5555))
        ^ h[(a + 7) % 16]
}

fn compress(h: &[u64; 16], m: &[u64; 16]) -> [u64; 16] {
    let mut q = [0u64; 32];
    let x: [u64; 16] = std::array::from_fn(|i| m[i] ^ h[i]);

    let bijective: [fn(u64) -> u64; 5] = [s0, s1, s2, s3, s4];
    for (j, terms) in W_TERMS.iter().enumerate() {
        let w = terms.iter().fold(0u64, |acc, &(i, subtract)| {
            if subtract {
                acc.wrapping_sub(x[i])
            } else {
                acc.wrapping_add(x[i])
            }
        });
        q[j] = bijective[j % 5](w).wrapping_add(h[(j + 1) % 16]);
    }

    let expand1: [fn(u64) -> u64; 4] = [s1, s2, s3, s0];
    for j in 16..18 {
        let sum = (0..16).fold(0u64, |acc, k| acc.wrapping_add(expand1[k % 4](q[j - 16 + k])));
        q[j] = sum.wrapping_add(add_element(m, h, j));
    }
    for j in 18..32 {
        let mut sum = 0u64;
        for k in 0..14 {
            let word = q[j - 16 + k];
            sum = sum.wrapping_add(if k % 2 == 0 {
                word
            } else {
                word.rotate_left(EXPAND_ROTATIONS[k / 2])
            });
        }
        sum = sum.wrapping_add(s4(q[j - 2])).wrapping_add(s5(q[j - 1]));
        q[j] = sum.wrapping_add(add_element(m, h, j));
    }

    let xl = q[16..24].iter().fold(0u64, |acc, v| acc ^ v);
    let xh = q[24..32].iter().fold(xl, |acc, v| acc ^ v);

    let mut out = [0u64; 16];
    out[0] = ((xh << 5) ^ (q[16] >> 5) ^ m[0]).wrapping_add(xl ^ q[24] ^ q[0]);
    out[1] = ((xh >> 7) ^ (q[17] << 8) ^ m[1]).wrapping_add(xl ^ q[25] ^ q[1]);
    out[2] = ((xh >> 5) ^ (q[18] << 5) ^ m[2]).wrapping_add(xl ^ q[26] ^ q[2]);
    out[3] = ((xh >> 1) ^ (q[19] << 5) ^ m[3]).wrapping_add(xl ^ q[27] ^ q[3]);
    out[4] = ((xh >> 3) ^ q[20] ^ m[4]).wrapping_add(xl ^ q[28] ^ q[4]);
    out[5] = ((xh << 6) ^ (q[21] >> 6) ^ m[5]).wrapping_add(xl ^ q[29] ^ q[5]);
    out[6] = ((xh >> 4) ^ (q[22] << 6) ^ m[6]).wrapping_add(xl ^ q[30] ^ q[6]);
    out[7] = ((xh >> 11) ^ (q[23] << 2) ^ m[7]).wrapping_add(xl ^ q[31] ^ q[7]);

    out[8] = out[4]
        .rotate_left(9)
        .wrapping_add(xh ^ q[24] ^ m[8])
        .wrapping_add((xl << 8) ^ q[23] ^ q[8]);
    out[9] = out[5]
        .rotate_left(10)
        .wrapping_add(xh ^ q[25] ^ m[9])
        .wrapping_add((xl >> 6) ^ q[16] ^ q[9]);
    out[10] = out[6]
        .rotate_left(11)
        .wrapping_add(xh ^ q[26] ^ m[10])
        .wrapping_add((xl << 6) ^ q[17] ^ q[10]);
    out[11] = out[7]
        .rotate_left(12)
        .wrapping_add(xh ^ q[27] ^ m[11])
        .wrapping_add((xl << 4) ^ q[18] ^ q[11]);
    out[12] = out[0]
        .rotate_left(13)
        .wrapping_add(xh ^ q[28] ^ m[12])
        .wrapping_add((xl >> 3) ^ q[19] ^ q[12]);
    out[13] = out[1]
        .rotate_left(14)
        .wrapping_add(xh ^ q[29] ^ m[13])
        .wrapping_add((xl >> 4) ^ q[20] ^ q[13]);
    out[14] = out[2]
        .rotate_left(15)
        .wrapping_add(xh ^ q[30] ^ m[14])
        .wrapping_add((xl >> 7) ^ q[21] ^ q[14]);
    out[15] = out[3]
        .rotate_left(16)
        .wrapping_add(xh ^ q[31] ^ m[15])
        .wrapping_add((xl >> 2) ^ q[22] ^ q[15]);
    out
}

fn load_block(block: &[u8]) -> [u64; 16] {
    std::array::from_fn(|i| {
        let mut word = [0u8; 8];
        word.copy_from_slice(&block[i * 8..i * 8 + 8]);
        u64::from_le_bytes(word)
    })
}

/// BMW-512 digest of `data`
pub fn bmw512(data: &[u8]) -> [u8; 64] {
    let mut state = INITIAL_STATE;

    let mut blocks = data.chunks_exact(BLOCK_LEN);
    for block in &mut blocks {
        state = compress(&state, &load_block(block));
    }

    // 0x80, zero fill, then the bit length in the last 8 bytes
    let tail = blocks.remainder();
    let mut padded = [0u8; 2 * BLOCK_LEN];
    padded[..tail.len()].copy_from_slice(tail);
    padded[tail.len()] = 0x80;
    let padded_len = if tail.len() < BLOCK_LEN - 8 {
        BLOCK_LEN
    } else {
        2 * BLOCK_LEN
    };
    let bit_len = (data.len() as u64).wrapping_mul(8);
    padded[padded_len - 8..padded_len].copy_from_slice(&bit_len.to_le_bytes());
    for block in padded[..padded_len].chunks_exact(BLOCK_LEN) {
        state = compress(&state, &load_block(block));
    }

    let state = compress(&FINAL_STATE, &state);
    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(8).zip(&state[8..]) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}
