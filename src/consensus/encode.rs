//! Wire serialization helpers shared by transactions and headers

/// Append a compact-size length prefix
pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

/// Append a length-prefixed byte vector
pub fn write_var_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    write_compact_size(out, bytes.len() as u64);
    out.extend_from_slice(bytes);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(n: u64) -> Vec<u8> {
        let mut out = Vec::new();
        write_compact_size(&mut out, n);
        out
    }

    #[test]
    fn test_compact_size_boundaries() {
        assert_eq!(encoded(0), vec![0x00]);
        assert_eq!(encoded(0xfc), vec![0xfc]);
        assert_eq!(encoded(0xfd), vec![0xfd, 0xfd, 0x00]);
        assert_eq!(encoded(0xffff), vec![0xfd, 0xff, 0xff]);
        assert_eq!(encoded(0x1_0000), vec![0xfe, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(encoded(0x1_0000_0000).len(), 9);
    }

    #[test]
    fn test_var_bytes_prefix() {
        let mut out = Vec::new();
        write_var_bytes(&mut out, &[1, 2, 3]);
        assert_eq!(out, vec![3, 1, 2, 3]);
    }
}
