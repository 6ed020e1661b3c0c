//! Implementation of the [Turing] stream cipher.
//!
//! Turing clocks a 17-word linear feedback shift register through a
//! key-dependent nonlinear filter, producing 20 bytes of keystream per
//! round. Keys are 8–32 bytes and the optional IV 0–40 bytes, both whole
//! words, with at most 48 bytes combined. Because those sizes are validated
//! at runtime, ciphers are built with [`Turing::new`] rather than the
//! fixed-size constructors from the [`cipher`] traits; keystream application
//! uses the re-exported [`cipher::StreamCipher`] trait as usual.
//!
//! # ⚠️ Security Warning: Hazmat!
//!
//! This crate does not ensure ciphertexts are authentic! Thus ciphertext
//! integrity is not verified, which can lead to serious vulnerabilities!
//!
//! USE AT YOUR OWN RISK!
//!
//! # Example
//! ```
//! use turing::Turing;
//! use turing::cipher::StreamCipher;
//! use hex_literal::hex;
//!
//! let key = hex!("0102030405060708");
//! let iv = hex!("0102030405060708");
//! let plaintext = *b"Well done is better than well said.";
//! let ciphertext = hex!(
//!     "199dfe0643b2d4782067017adb4df70d"
//!     "4e0aecf9d730627debb2c0661989c834"
//!     "4a6d53"
//! );
//!
//! // apply keystream (encrypt)
//! let mut cipher = Turing::new(&key, &iv).unwrap();
//! let mut buffer = plaintext;
//! cipher.apply_keystream(&mut buffer);
//! assert_eq!(buffer, ciphertext);
//!
//! // decrypt ciphertext by applying keystream again
//! let mut cipher = Turing::new(&key, &iv).unwrap();
//! cipher.apply_keystream(&mut buffer);
//! assert_eq!(buffer, plaintext);
//! ```
//!
//! [Turing]: https://en.wikipedia.org/wiki/Turing_(cipher)

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_root_url = "https://docs.rs/turing/0.1.0"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub use cipher;

use cipher::{errors::LoopError, StreamCipher};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

mod errors;
mod tables;

pub use crate::errors::KeySizeError;

use crate::tables::{MTAB, QBOX, SBOX};

const REG_WORDS: usize = 17;
const ROUND_BYTES: usize = 20;
const MIN_KEY_BYTES: usize = 8;
const MAX_KEY_BYTES: usize = 32;
const MAX_COMBINED_BYTES: usize = 48;
const MAX_KEY_WORDS: usize = MAX_KEY_BYTES / 4;

/// Marker constant mixed into the register together with the key and IV
/// word counts.
const CONFOUNDER: u32 = 0x0102_0300;

/// The Turing key schedule: mixed key words plus the four keyed
/// substitution tables derived from them.
///
/// Deriving the tables walks every key word for each of the 1024 table
/// entries, so it dominates cipher setup. A `TuringKey` is immutable once
/// built and can seed any number of [`Turing`] instances with different IVs
/// via [`TuringKey::cipher`], paying the derivation cost once per key.
#[derive(Clone)]
pub struct TuringKey {
    words: [u32; MAX_KEY_WORDS],
    nwords: usize,
    keybox: [[u32; 256]; 4],
}

/// The Turing stream cipher keyed with a particular key/IV pair.
pub struct Turing {
    key: TuringKey,
    reg: [u32; REG_WORDS],
    buffer: [u8; ROUND_BYTES],
    bufpos: usize,
}

impl TuringKey {
    /// Runs the key schedule for a key of 8–32 bytes, length a multiple
    /// of 4.
    pub fn new(key: &[u8]) -> Result<Self, KeySizeError> {
        validate(key.len(), 0)?;

        let mut sched = TuringKey {
            words: [0; MAX_KEY_WORDS],
            nwords: key.len() / 4,
            keybox: [[0; 256]; 4],
        };
        sched.derive(key);
        Ok(sched)
    }

    /// Seeds a cipher instance from this key schedule and the given IV.
    ///
    /// The IV may be empty; otherwise its length must be a multiple of 4
    /// and the combined key and IV sizes must not exceed 48 bytes.
    pub fn cipher(&self, iv: &[u8]) -> Result<Turing, KeySizeError> {
        validate(self.nwords * 4, iv.len())?;

        let mut cipher = Turing {
            key: self.clone(),
            reg: [0; REG_WORDS],
            buffer: [0; ROUND_BYTES],
            bufpos: 0,
        };
        cipher.init_register(iv);
        cipher.next_round();
        Ok(cipher)
    }

    fn derive(&mut self, key: &[u8]) {
        for (i, quad) in key.chunks_exact(4).enumerate() {
            self.words[i] = fixed_s(u32::from_be_bytes([quad[0], quad[1], quad[2], quad[3]]));
        }
        hadamard(&mut self.words[..self.nwords]);

        // Pre-calculated keyed S-boxes, one per byte lane.
        for lane in 0..4 {
            let shift = 8 * lane as u32;
            for i in 0..256 {
                let mut octet = i as u8;
                let mut word = 0u32;
                for (pos, &k) in self.words[..self.nwords].iter().enumerate() {
                    octet = SBOX[usize::from(get_octet(k, lane) ^ octet)];
                    word ^= QBOX[usize::from(octet)].rotate_left(pos as u32 + shift);
                }
                self.keybox[lane][i] = (word & 0x00ff_ffff_u32.rotate_right(shift))
                    | (u32::from(octet) << (24 - shift));
            }
        }
    }

    fn keyed_s(&self, word: u32, rotate: u32) -> u32 {
        let octets = word.rotate_left(rotate).to_be_bytes();
        let mut s = 0;
        for (lane, &octet) in octets.iter().enumerate() {
            s ^= self.keybox[lane][usize::from(octet)];
        }
        s
    }
}

impl Turing {
    /// Creates a cipher instance from a key and an optional IV.
    ///
    /// The key size must be a multiple of 4 bytes and between 8 and 32
    /// bytes. The IV is optional and may be empty; if present its size must
    /// be a multiple of 4 bytes. The combined size of key and IV must not
    /// exceed 48 bytes. These restrictions are part of the algorithm.
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self, KeySizeError> {
        validate(key.len(), iv.len())?;
        TuringKey::new(key)?.cipher(iv)
    }

    /// Sets `dst` to the result of XORing `src` with the keystream.
    ///
    /// For in-place operation use [`StreamCipher::apply_keystream`] instead.
    ///
    /// # Panics
    ///
    /// Panics if `dst` and `src` have different lengths.
    pub fn xor_key_stream(&mut self, dst: &mut [u8], src: &[u8]) {
        dst.copy_from_slice(src);
        self.process(dst);
    }

    /// Makes a best effort attempt to scrub key material from memory by
    /// zeroing the key words, the keyed substitution tables, the register
    /// and the keystream buffer.
    ///
    /// The cipher produces no useful output after a reset. With the
    /// `zeroize` feature enabled the same scrubbing also runs on drop.
    pub fn reset(&mut self) {
        self.key.words = [0; MAX_KEY_WORDS];
        self.key.nwords = 0;
        self.key.keybox = [[0; 256]; 4];
        self.reg = [0; REG_WORDS];
        self.buffer = [0; ROUND_BYTES];
        self.bufpos = 0;
    }

    fn init_register(&mut self, iv: &[u8]) {
        let mut r = 0;
        for quad in iv.chunks_exact(4) {
            self.reg[r] = fixed_s(u32::from_be_bytes([quad[0], quad[1], quad[2], quad[3]]));
            r += 1;
        }

        for &word in self.key.words[..self.key.nwords].iter() {
            self.reg[r] = word;
            r += 1;
        }

        self.reg[r] = CONFOUNDER | ((self.key.nwords as u32) << 4) | (iv.len() / 4) as u32;
        r += 1;

        let mut i = 0;
        while r < REG_WORDS {
            self.reg[r] = self
                .key
                .keyed_s(self.reg[i].wrapping_add(self.reg[r - 1]), 0);
            i += 1;
            r += 1;
        }

        hadamard(&mut self.reg);
    }

    fn clock_register(&mut self) {
        let word = self.reg[15]
            ^ self.reg[4]
            ^ (self.reg[0] << 8)
            ^ MTAB[(self.reg[0] >> 24) as usize];
        for i in 0..REG_WORDS - 1 {
            self.reg[i] = self.reg[i + 1];
        }
        self.reg[REG_WORDS - 1] = word;
    }

    fn next_round(&mut self) {
        self.clock_register();
        let mut a = self.reg[16];
        let mut b = self.reg[13];
        let mut c = self.reg[6];
        let mut d = self.reg[1];
        let mut e = self.reg[0];

        // Non-linear filter
        e = e
            .wrapping_add(a)
            .wrapping_add(b)
            .wrapping_add(c)
            .wrapping_add(d);
        a = a.wrapping_add(e);
        b = b.wrapping_add(e);
        c = c.wrapping_add(e);
        d = d.wrapping_add(e);
        a = self.key.keyed_s(a, 0);
        b = self.key.keyed_s(b, 8);
        c = self.key.keyed_s(c, 16);
        d = self.key.keyed_s(d, 24);
        e = self.key.keyed_s(e, 0);
        e = e
            .wrapping_add(a)
            .wrapping_add(b)
            .wrapping_add(c)
            .wrapping_add(d);
        a = a.wrapping_add(e);
        b = b.wrapping_add(e);
        c = c.wrapping_add(e);
        d = d.wrapping_add(e);

        self.clock_register();
        self.clock_register();
        self.clock_register();

        a = a.wrapping_add(self.reg[14]);
        b = b.wrapping_add(self.reg[12]);
        c = c.wrapping_add(self.reg[8]);
        d = d.wrapping_add(self.reg[1]);
        e = e.wrapping_add(self.reg[0]);
        self.buffer[0..4].copy_from_slice(&a.to_be_bytes());
        self.buffer[4..8].copy_from_slice(&b.to_be_bytes());
        self.buffer[8..12].copy_from_slice(&c.to_be_bytes());
        self.buffer[12..16].copy_from_slice(&d.to_be_bytes());
        self.buffer[16..20].copy_from_slice(&e.to_be_bytes());
        self.bufpos = 0;

        self.clock_register();
    }

    fn process(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            if self.bufpos == ROUND_BYTES {
                self.next_round();
            }
            *byte ^= self.buffer[self.bufpos];
            self.bufpos += 1;
        }
    }
}

impl StreamCipher for Turing {
    fn try_apply_keystream(&mut self, data: &mut [u8]) -> Result<(), LoopError> {
        self.process(data);
        Ok(())
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for TuringKey {
    fn zeroize(&mut self) {
        self.words.zeroize();
        self.nwords.zeroize();
        self.keybox.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl Drop for TuringKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Turing {
    fn zeroize(&mut self) {
        self.key.zeroize();
        self.reg.zeroize();
        self.buffer.zeroize();
        self.bufpos.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl Drop for Turing {
    fn drop(&mut self) {
        self.zeroize();
    }
}

fn validate(keylen: usize, ivlen: usize) -> Result<(), KeySizeError> {
    if keylen % 4 != 0 {
        return Err(KeySizeError::KeyAlignment);
    }
    if ivlen % 4 != 0 {
        return Err(KeySizeError::IvAlignment);
    }
    if keylen < MIN_KEY_BYTES {
        return Err(KeySizeError::KeyTooShort);
    }
    if keylen > MAX_KEY_BYTES {
        return Err(KeySizeError::KeyTooLong);
    }
    if keylen + ivlen > MAX_COMBINED_BYTES {
        return Err(KeySizeError::CombinedTooLong);
    }
    Ok(())
}

#[inline]
fn get_octet(word: u32, lane: usize) -> u8 {
    (word >> (24 - 8 * lane as u32)) as u8
}

/// Word substitution built from the fixed tables; used while digesting the
/// key and IV, before the keyed tables exist.
fn fixed_s(mut word: u32) -> u32 {
    for lane in 0..4 {
        let shift = 8 * lane as u32;
        let octet = SBOX[usize::from(get_octet(word, lane))];
        word = ((word ^ QBOX[usize::from(octet)].rotate_left(shift))
            & 0x00ff_ffff_u32.rotate_right(shift))
            | (u32::from(octet) << (24 - shift));
    }
    word
}

/// Pseudo-Hadamard transform: redistributes the sum of all words into each
/// word, with the last word replaced by the sum alone.
fn hadamard(words: &mut [u32]) {
    let mut sum = 0u32;
    for &word in words.iter() {
        sum = sum.wrapping_add(word);
    }
    words[words.len() - 1] = 0;
    for word in words.iter_mut() {
        *word = word.wrapping_add(sum);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];
    const IV: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

    #[test]
    fn key_schedule_words() {
        let sched = TuringKey::new(&KEY).unwrap();
        assert_eq!(sched.words[..sched.nwords], [0xf930_de8f, 0xf88e_cbc6]);
    }

    #[test]
    fn register_seeding_with_iv() {
        let cipher = Turing::new(&KEY, &IV).unwrap();
        assert_eq!(
            cipher.reg,
            [
                0xd994_e2c1, 0x27ba_34fa, 0xbf78_6a7a, 0x80ea_cf9d, 0x459a_ad71,
                0xdb51_f8d6, 0xdc88_3e15, 0x07e5_ebb3, 0x3abb_60e8, 0x4ada_30eb,
                0x79a3_801a, 0x39e8_b89f, 0x40bf_8c02, 0xe258_5ec1, 0x4491_88a9,
                0xc08c_0c8d, 0xa7fd_59ed,
            ]
        );
    }

    #[test]
    fn register_seeding_without_iv() {
        let cipher = Turing::new(&KEY, &[]).unwrap();
        assert_eq!(
            cipher.reg,
            [
                0x2809_eecf, 0xbf9a_fd42, 0xdc0b_886c, 0xd49a_26e8, 0xb1a6_a85a,
                0xe0a2_aee1, 0x47f1_2b07, 0x9108_0bb0, 0x309f_bce5, 0x4e43_fe76,
                0xeaf8_c963, 0x99a2_4045, 0x337c_aa9b, 0x78c6_b836, 0xb3d1_ad8a,
                0xa801_8ffa, 0x6a7c_2963,
            ]
        );
    }

    #[test]
    fn fixed_substitution() {
        assert_eq!(fixed_s(0x0000_0000), 0x9325_4fe8);
        assert_eq!(fixed_s(0xffff_ffff), 0xf765_43c0);
        assert_eq!(fixed_s(0x0102_0304), 0x00a2_12c9);
    }

    #[test]
    fn validation_order() {
        // Alignment is checked before length bounds, key before IV.
        assert_eq!(Turing::new(&[0; 7], &[]).err(), Some(KeySizeError::KeyAlignment));
        assert_eq!(Turing::new(&[0; 33], &[]).err(), Some(KeySizeError::KeyAlignment));
        assert_eq!(
            Turing::new(&[0; 9], &[0; 9]).err(),
            Some(KeySizeError::KeyAlignment)
        );
        assert_eq!(
            Turing::new(&[0; 8], &[0; 9]).err(),
            Some(KeySizeError::IvAlignment)
        );
        assert_eq!(Turing::new(&[0; 4], &[]).err(), Some(KeySizeError::KeyTooShort));
        assert_eq!(Turing::new(&[0; 36], &[]).err(), Some(KeySizeError::KeyTooLong));
        assert_eq!(
            Turing::new(&[0; 8], &[0; 44]).err(),
            Some(KeySizeError::CombinedTooLong)
        );
    }

    #[test]
    fn reset_scrubs_state() {
        let mut cipher = Turing::new(&KEY, &IV).unwrap();
        cipher.reset();
        assert_eq!(cipher.key.words, [0; MAX_KEY_WORDS]);
        assert_eq!(cipher.key.nwords, 0);
        for table in cipher.key.keybox.iter() {
            assert!(table.iter().all(|&word| word == 0));
        }
        assert_eq!(cipher.reg, [0; REG_WORDS]);
        assert_eq!(cipher.buffer, [0; ROUND_BYTES]);
        assert_eq!(cipher.bufpos, 0);
    }
}
