//! BLAKE2b with a per-call digest size, as Argon2 consumes it: unkeyed,
//! sequential, digest lengths from 1 to 64 bytes.

const BLOCK_BYTES: usize = 128;

pub const MAX_DIGEST_BYTES: usize = 64;

const IV: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

// Rounds 10 and 11 of the twelve reuse rows 0 and 1.
const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

#[inline(always)]
fn g(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(24);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(63);
}

fn compress(h: &mut [u64; 8], block: &[u8], count: u64, last: bool) {
    debug_assert_eq!(block.len(), BLOCK_BYTES);
    let mut m = [0u64; 16];
    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
        *word = u64::from_le_bytes(chunk.try_into().unwrap());
    }

    let mut v = [0u64; 16];
    v[..8].copy_from_slice(h);
    v[8..].copy_from_slice(&IV);
    v[12] ^= count;
    if last {
        v[14] = !v[14];
    }

    for r in 0..12 {
        let s = &SIGMA[r % 10];
        g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
        g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
        g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
        g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);
        g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
        g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
        g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
        g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
    }

    for (i, hw) in h.iter_mut().enumerate() {
        *hw ^= v[i] ^ v[i + 8];
    }
}

pub struct Blake2b {
    h: [u64; 8],
    buf: [u8; BLOCK_BYTES],
    buflen: usize,
    count: u64,
    nn: usize,
}

impl Blake2b {
    pub fn new(nn: usize) -> Blake2b {
        debug_assert!(1 <= nn && nn <= MAX_DIGEST_BYTES);
        let mut h = IV;
        // Parameter block: digest length, no key, fanout 1, depth 1.
        h[0] ^= 0x0101_0000 ^ nn as u64;
        Blake2b {
            h,
            buf: [0; BLOCK_BYTES],
            buflen: 0,
            count: 0,
            nn,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        let mut data = data;
        if self.buflen > 0 {
            let fill = BLOCK_BYTES - self.buflen;
            if data.len() <= fill {
                self.buf[self.buflen..self.buflen + data.len()].copy_from_slice(data);
                self.buflen += data.len();
                return;
            }
            self.buf[self.buflen..].copy_from_slice(&data[..fill]);
            self.count += BLOCK_BYTES as u64;
            compress(&mut self.h, &self.buf, self.count, false);
            self.buflen = 0;
            data = &data[fill..];
        }

        // A full trailing block stays buffered: it may turn out to be final.
        while data.len() > BLOCK_BYTES {
            self.count += BLOCK_BYTES as u64;
            compress(&mut self.h, &data[..BLOCK_BYTES], self.count, false);
            data = &data[BLOCK_BYTES..];
        }

        self.buf[..data.len()].copy_from_slice(data);
        self.buflen = data.len();
    }

    pub fn finalize(mut self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.nn);
        self.count += self.buflen as u64;
        for b in self.buf[self.buflen..].iter_mut() {
            *b = 0;
        }
        compress(&mut self.h, &self.buf, self.count, true);

        let mut chain = [0u8; MAX_DIGEST_BYTES];
        for (chunk, word) in chain.chunks_exact_mut(8).zip(self.h.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out.copy_from_slice(&chain[..self.nn]);
    }
}

#[cfg(test)]
mod tests {
    use super::Blake2b;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    fn b2b(nn: usize, data: &[u8]) -> Vec<u8> {
        let mut out = vec![0; nn];
        let mut b = Blake2b::new(nn);
        b.update(data);
        b.finalize(&mut out);
        out
    }

    #[test]
    fn rfc7693_abc() {
        assert_eq!(
            hex(&b2b(64, b"abc")),
            "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1\
             7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923"
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(
            hex(&b2b(64, b"")),
            "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419\
             d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce"
        );
    }

    #[test]
    fn digest_length_is_bound_into_state() {
        // A shorter digest is not a prefix of a longer one.
        let long = b2b(64, b"somesalt");
        let short = b2b(32, b"somesalt");
        assert_ne!(&long[..32], &short[..]);
    }

    #[test]
    fn incremental_matches_oneshot() {
        let data: Vec<u8> = (0..3000u32).map(|i| (i * 7 % 256) as u8).collect();
        for splits in [1usize, 64, 127, 128, 129, 1024] {
            let mut b = Blake2b::new(48);
            for chunk in data.chunks(splits) {
                b.update(chunk);
            }
            let mut out = [0u8; 48];
            b.finalize(&mut out);
            assert_eq!(out.to_vec(), b2b(48, &data), "chunk size {}", splits);
        }
    }
}
