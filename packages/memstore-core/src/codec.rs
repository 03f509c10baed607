//! Fixed-width integer field codec.
//!
//! Every field is a 32-bit signed integer stored little-endian in a flat byte
//! buffer. Layouts differ only in how they compute the slot index; reads and
//! writes of the bytes themselves always go through [`encode`] and [`decode`].

/// Width of a single field in bytes.
pub const FIELD_LEN: usize = std::mem::size_of::<i32>();

/// Writes `value` into slot `slot` of `buffer`.
///
/// # Panics
/// Panics if the slot lies outside the buffer.
#[inline]
pub fn encode(buffer: &mut [u8], slot: usize, value: i32) {
    let start = slot * FIELD_LEN;
    buffer[start..start + FIELD_LEN].copy_from_slice(&value.to_le_bytes());
}

/// Reads the value stored in slot `slot` of `buffer`.
///
/// # Panics
/// Panics if the slot lies outside the buffer.
#[inline]
pub fn decode(buffer: &[u8], slot: usize) -> i32 {
    let start = slot * FIELD_LEN;
    let mut bytes = [0u8; FIELD_LEN];
    bytes.copy_from_slice(&buffer[start..start + FIELD_LEN]);
    i32::from_le_bytes(bytes)
}

/// Zero-initialized field storage exclusively owned by one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBuffer {
    bytes: Vec<u8>,
}

impl FieldBuffer {
    /// Allocates a buffer of `slots` fields, all set to zero.
    ///
    /// # Panics
    /// Panics if `slots * FIELD_LEN` overflows `usize`.
    pub fn zeroed(slots: usize) -> Self {
        let len = slots
            .checked_mul(FIELD_LEN)
            .expect("field buffer size overflow");
        Self {
            bytes: vec![0u8; len],
        }
    }

    /// Returns the number of field slots.
    pub fn slots(&self) -> usize {
        self.bytes.len() / FIELD_LEN
    }

    /// Returns `true` if the buffer holds no slots.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn get(&self, slot: usize) -> i32 {
        decode(&self.bytes, slot)
    }

    #[inline]
    pub fn put(&mut self, slot: usize, value: i32) {
        encode(&mut self.bytes, slot, value)
    }

    /// Raw little-endian bytes of the buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
