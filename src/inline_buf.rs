use alloc::string::String;
use core::fmt;
use core::fmt::Display;
use core::fmt::Formatter;

/// Number of content bytes an [`InlineBuf`] can hold before a
/// [`NanoString`](crate::NanoString) has to move to the heap.
///
/// The buffer itself is one byte larger: the slot after the last content
/// byte is always zero, so the contents double as a null-terminated byte
/// view without a separate terminator write.
pub const INLINE_CAPACITY: usize = 15;

/// Error type returned when attempting to push into a full [`InlineBuf`],
/// or to create one from a slice longer than [`INLINE_CAPACITY`].
///
/// # Example
///
/// ```rust
/// # use nanostring::inline_buf::*;
/// # fn main() {
/// let long = [0u8; 40];
/// let result = InlineBuf::try_from(&long[..]);
///
/// assert!(result.is_err());
/// assert!(matches!(result, Err(BufferFullError)));
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BufferFullError;

#[derive(Debug, Clone, Copy)]
#[cfg_attr(
  feature = "index",
  derive(derive_more::Index, derive_more::IndexMut)
)]
/// A short byte string stored entirely inside its own fixed-size
/// footprint.
///
/// Holds up to [`INLINE_CAPACITY`] bytes with no heap allocation. Every
/// byte past the current length is zero; this invariant is what lets
/// [`as_bytes_with_nul`](InlineBuf::as_bytes_with_nul) hand out a
/// null-terminated view for free. With the `index` feature, indexing
/// reaches the raw fixed-size array, including the zero tail.
///
/// # Example
///
/// ```rust
/// # use nanostring::inline_buf::*;
/// # fn main() -> Result<(), BufferFullError> {
/// let mut buf = InlineBuf::new();
/// buf.push(b'h')?;
/// buf.push(b'i')?;
///
/// assert_eq!(buf.as_bytes(), b"hi");
/// assert_eq!(buf.as_bytes_with_nul(), b"hi\0");
/// assert_eq!(buf.len(), 2);
/// # Ok(())
/// # }
/// ```
pub struct InlineBuf {
  #[cfg_attr(feature = "index", index)]
  #[cfg_attr(feature = "index", index_mut)]
  pub(crate) buf: [u8; INLINE_CAPACITY + 1],
  pub(crate) len: u8,
}

impl InlineBuf {
  /// Creates a new empty `InlineBuf`.
  #[inline]
  pub const fn new() -> Self {
    Self {
      buf: [0u8; INLINE_CAPACITY + 1],
      len: 0,
    }
  }

  /// Creates an `InlineBuf` holding the first [`INLINE_CAPACITY`] bytes
  /// of `bytes`, truncating the rest.
  pub fn from_prefix(bytes: &[u8]) -> Self {
    let len = bytes.len().min(INLINE_CAPACITY);
    let mut buf = [0u8; INLINE_CAPACITY + 1];
    buf[..len].copy_from_slice(&bytes[..len]);
    Self {
      buf,
      len: len as u8,
    }
  }

  /// Returns the number of content bytes.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len as usize
  }

  /// Returns whether the buffer is empty.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns whether the buffer holds [`INLINE_CAPACITY`] bytes, i.e.
  /// whether the next [`push`](InlineBuf::push) would be refused.
  #[inline]
  pub const fn is_full(&self) -> bool {
    self.len as usize == INLINE_CAPACITY
  }

  /// Returns the content bytes.
  #[inline]
  pub fn as_bytes(&self) -> &[u8] {
    &self.buf[..self.len as usize]
  }

  /// Returns the content bytes plus the trailing `\0`.
  ///
  /// The terminator slot always exists; the buffer keeps one byte in
  /// reserve beyond [`INLINE_CAPACITY`].
  #[inline]
  pub fn as_bytes_with_nul(&self) -> &[u8] {
    &self.buf[..self.len as usize + 1]
  }

  /// Appends one byte, or refuses with [`BufferFullError`] when the
  /// buffer already holds [`INLINE_CAPACITY`] bytes. A refused push
  /// leaves the buffer untouched.
  #[inline]
  pub fn push(&mut self, byte: u8) -> Result<(), BufferFullError> {
    if self.is_full() {
      return Err(BufferFullError);
    }
    self.buf[self.len as usize] = byte;
    self.len += 1;
    Ok(())
  }

  /// Removes and returns the last byte, zeroing its slot so the tail
  /// invariant holds. Returns `None` when empty.
  #[inline]
  pub fn pop(&mut self) -> Option<u8> {
    if self.len == 0 {
      return None;
    }
    self.len -= 1;
    let byte = self.buf[self.len as usize];
    self.buf[self.len as usize] = 0;
    Some(byte)
  }
}

impl Default for InlineBuf {
  #[inline(always)]
  fn default() -> Self {
    Self::new()
  }
}

impl Display for InlineBuf {
  #[inline(always)]
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&String::from_utf8_lossy(self.as_bytes()))
  }
}

impl TryFrom<&[u8]> for InlineBuf {
  type Error = BufferFullError;

  #[inline(always)]
  fn try_from(bytes: &[u8]) -> Result<InlineBuf, BufferFullError> {
    let len = bytes.len();
    if len > INLINE_CAPACITY {
      return Err(BufferFullError);
    }
    let mut buf = [0u8; INLINE_CAPACITY + 1];
    buf[..len].copy_from_slice(bytes);
    Ok(Self {
      buf,
      len: len as u8,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn push_and_pop_within_capacity() {
    let mut buf = InlineBuf::new();
    assert!(buf.is_empty());
    for byte in *b"abc" {
      buf.push(byte).unwrap();
    }
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.as_bytes(), b"abc");
    assert_eq!(buf.pop(), Some(b'c'));
    assert_eq!(buf.as_bytes(), b"ab");
    assert_eq!(buf.pop(), Some(b'b'));
    assert_eq!(buf.pop(), Some(b'a'));
    assert_eq!(buf.pop(), None);
    assert!(buf.is_empty());
  }

  #[test]
  fn push_refused_when_full() {
    let mut buf = InlineBuf::new();
    for byte in 0..INLINE_CAPACITY as u8 {
      buf.push(byte).unwrap();
    }
    assert!(buf.is_full());
    assert!(matches!(buf.push(99), Err(BufferFullError)));
    // the refused byte left no trace
    assert_eq!(buf.len(), INLINE_CAPACITY);
    assert_eq!(buf.as_bytes().last(), Some(&14));
  }

  #[test]
  fn tail_stays_zeroed() {
    let mut buf = InlineBuf::new();
    for byte in *b"abc" {
      buf.push(byte).unwrap();
    }
    buf.pop();
    assert_eq!(buf.as_bytes_with_nul(), b"ab\0");
    // the popped slot went back to zero, not just out of view
    assert_eq!(buf.buf[2], 0);
  }

  #[test]
  fn terminated_even_when_full() {
    let buf = InlineBuf::from_prefix(b"0123456789abcde");
    assert!(buf.is_full());
    assert_eq!(buf.as_bytes_with_nul(), b"0123456789abcde\0");
  }

  #[test]
  fn from_prefix_truncates() {
    let buf = InlineBuf::from_prefix(b"0123456789abcdefghij");
    assert_eq!(buf.as_bytes(), b"0123456789abcde");
    assert_eq!(buf.len(), INLINE_CAPACITY);

    let short = InlineBuf::from_prefix(b"xy");
    assert_eq!(short.as_bytes(), b"xy");
  }

  #[test]
  fn try_from_checks_length() {
    let ok = InlineBuf::try_from(&b"short"[..]).unwrap();
    assert_eq!(ok.as_bytes(), b"short");

    let err = InlineBuf::try_from(&b"way past fifteen bytes"[..]);
    assert!(matches!(err, Err(BufferFullError)));
  }

  #[test]
  fn display_is_lossy() {
    let mut buf = InlineBuf::new();
    for byte in *b"hi" {
      buf.push(byte).unwrap();
    }
    assert_eq!(format!("{buf}"), "hi");
  }

  #[cfg(feature = "index")]
  #[test]
  fn index_reaches_raw_storage() {
    let buf = InlineBuf::from_prefix(b"abc");
    assert_eq!(buf[0usize], b'a');
    assert_eq!(buf[3usize], 0);
  }
}
