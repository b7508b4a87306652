use crate::{Argon2, Error, Variant, ARGON2_VERSION};
use std::str;

const LUT64: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

fn lut(n: u8) -> u8 {
    LUT64[n as usize & 0x3f]
}

fn delut(c: u8) -> Option<u8> {
    match c {
        b'+' => Some(62),
        b'/' => Some(63),
        b'A'..=b'Z' => Some(c - b'A'),
        b'a'..=b'z' => Some(c - b'a' + 26),
        b'0'..=b'9' => Some(c - b'0' + 52),
        _ => None,
    }
}

fn quad(n: &[u8]) -> [u8; 4] {
    assert!(n.len() == 3);
    let (b, c) = (n[1] >> 4 | n[0] << 4, n[2] >> 6 | n[1] << 2);
    [lut(n[0] >> 2), lut(b), lut(c), lut(n[2])]
}

fn triplet(n: &[u8]) -> Option<[u8; 3]> {
    assert!(n.len() == 4);
    let a = delut(n[0])?;
    let b = delut(n[1])?;
    let c = delut(n[2])?;
    let d = delut(n[3])?;
    Some([a << 2 | b >> 4, b << 4 | c >> 2, c << 6 | d])
}

fn base64_no_pad(bytes: &[u8]) -> Vec<u8> {
    let mut rv = vec![];
    let mut pos = 0;
    while pos + 3 <= bytes.len() {
        rv.extend_from_slice(&quad(&bytes[pos..pos + 3]));
        pos += 3;
    }

    if bytes.len() - pos == 1 {
        rv.push(lut(bytes[pos] >> 2));
        rv.push(lut((bytes[pos] & 0x03) << 4));
    } else if bytes.len() - pos == 2 {
        rv.extend_from_slice(&quad(&[bytes[pos], bytes[pos + 1], 0]));
        rv.pop();
    }
    rv
}

fn debase64_no_pad(bytes: &[u8]) -> Option<Vec<u8>> {
    if bytes.is_empty() || bytes.len() % 4 == 1 {
        return None;
    }

    let mut rv = vec![];
    let mut pos = 0;
    while pos + 4 <= bytes.len() {
        rv.extend_from_slice(&triplet(&bytes[pos..pos + 4])?);
        pos += 4;
    }

    if bytes.len() - pos == 2 {
        let a = delut(bytes[pos])?;
        let b = delut(bytes[pos + 1])?;
        rv.push(a << 2 | b >> 4);
    } else if bytes.len() - pos == 3 {
        let a = delut(bytes[pos])?;
        let b = delut(bytes[pos + 1])?;
        let c = delut(bytes[pos + 2])?;
        rv.push(a << 2 | b >> 4);
        rv.push(b << 4 | c >> 2);
    }
    Some(rv)
}

/// Cursor over the bytes of an encoded hash. Errors carry the byte
/// position of the first mismatch.
struct Parser<'a> {
    enc: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn expect(&mut self, exp: &[u8]) -> Result<(), Error> {
        if self.enc.len() - self.pos < exp.len()
            || &self.enc[self.pos..self.pos + exp.len()] != exp
        {
            return Err(Error::InvalidEncoding(self.pos));
        }
        self.pos += exp.len();
        Ok(())
    }

    fn until(&mut self, stopchar: u8) -> &'a [u8] {
        let end = self.enc[self.pos..]
            .iter()
            .position(|&c| c == stopchar)
            .map_or(self.enc.len(), |k| self.pos + k);
        let rv = &self.enc[self.pos..end];
        self.pos = end;
        rv
    }

    fn read_u32(&mut self) -> Result<u32, Error> {
        let mut end = self.pos;
        while end < self.enc.len() && self.enc[end].is_ascii_digit() {
            end += 1;
        }
        let parsed = str::from_utf8(&self.enc[self.pos..end])
            .ok()
            .and_then(|s| s.parse().ok());
        match parsed {
            Some(n) => {
                self.pos = end;
                Ok(n)
            }
            None => Err(Error::InvalidEncoding(self.pos)),
        }
    }

    fn decode64_till(&mut self, stopchar: Option<u8>) -> Result<Vec<u8>, Error> {
        let end = match stopchar {
            None => self.enc.len(),
            Some(c) => self.enc[self.pos..]
                .iter()
                .position(|&k| k == c)
                .map_or(self.enc.len(), |k| self.pos + k),
        };
        match debase64_no_pad(&self.enc[self.pos..end]) {
            None => Err(Error::InvalidEncoding(self.pos)),
            Some(rv) => {
                self.pos = end;
                Ok(rv)
            }
        }
    }
}

type Packed = (Variant, u32, u32, u32, Vec<u8>, Vec<u8>);

// $name$v=19$m=..,t=..,p=..$salt$tag
fn parse(encoded: &[u8]) -> Result<Packed, Error> {
    let mut p = Parser {
        enc: encoded,
        pos: 0,
    };

    p.expect(b"$")?;
    let variant = Variant::from_name(p.until(b'$')).ok_or(Error::UnsupportedType)?;

    p.expect(b"$v=")?;
    let version = p.read_u32()?;
    if version != ARGON2_VERSION {
        return Err(Error::UnsupportedVersion(version));
    }

    p.expect(b"$m=")?;
    let kib = p.read_u32()?;
    p.expect(b",t=")?;
    let passes = p.read_u32()?;
    p.expect(b",p=")?;
    let lanes = p.read_u32()?;

    p.expect(b"$")?;
    let salt = p.decode64_till(Some(b'$'))?;
    p.expect(b"$")?;
    let hash = p.decode64_till(None)?;
    Ok((variant, kib, passes, lanes, salt, hash))
}

/// A parameter set together with the salt and tag it produced, in the
/// shape of the `$argon2…$v=19$…` encoded string.
pub struct Encoded {
    params: Argon2,
    salt: Vec<u8>,
    hash: Vec<u8>,
}

impl Encoded {
    /// Hashes `p` under `params` and captures everything the encoded
    /// string carries.
    pub fn new(params: Argon2, hash_length: usize, p: &[u8], s: &[u8],
               k: &[u8], x: &[u8])
               -> Result<Encoded, Error> {
        let mut hash = vec![0u8; hash_length];
        params.hash(&mut hash, p, s, k, x)?;
        Ok(Encoded {
            params,
            salt: s.to_vec(),
            hash,
        })
    }

    pub fn from_u8(encoded: &[u8]) -> Result<Encoded, Error> {
        let (variant, kib, passes, lanes, salt, hash) = parse(encoded)?;
        let params = Argon2::new(passes, lanes, kib, variant)?;
        Ok(Encoded {
            params,
            salt,
            hash,
        })
    }

    pub fn to_u8(&self) -> Vec<u8> {
        let b64 = |x: &[u8]| String::from_utf8(base64_no_pad(x)).unwrap();
        let (variant, m, t, p) = self.params.params();
        format!("${}$v={}$m={},t={},p={}${}${}",
                variant.name(), ARGON2_VERSION, m, t, p,
                b64(&self.salt), b64(&self.hash))
            .into_bytes()
    }

    /// Recomputes the tag for `p` under the stored parameters and salt,
    /// comparing in constant time. Mismatch is `Ok(false)`; only invalid
    /// inputs are errors.
    pub fn verify(&self, p: &[u8], k: &[u8], x: &[u8]) -> Result<bool, Error> {
        let mut out = vec![0u8; self.hash.len()];
        self.params.hash(&mut out, p, &self.salt, k, x)?;
        Ok(constant_eq(&out, &self.hash))
    }
}

/// Checks `p` (with optional secret `k` and associated data `x`) against
/// an encoded hash, reconstructing all parameters from the string.
pub fn verify_encoded(encoded: &str, p: &[u8], k: &[u8], x: &[u8])
                      -> Result<bool, Error> {
    Encoded::from_u8(encoded.as_bytes())?.verify(p, k, x)
}

pub(crate) fn constant_eq(xs: &[u8], ys: &[u8]) -> bool {
    if xs.len() != ys.len() {
        false
    } else {
        xs.iter().zip(ys.iter()).fold(0, |rv, (x, y)| rv | (x ^ y)) == 0
    }
}
