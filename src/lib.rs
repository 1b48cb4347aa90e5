//! # nanostring
//!
//! ### Inline-first byte strings that spill to the heap on demand
//!
//! This crate provides a compact owned byte string, [`NanoString`], that
//! keeps short contents entirely inside its own fixed-size footprint and
//! transparently promotes to a heap-allocated block once the inline
//! capacity is exceeded. The two halves of that design are available as
//! standalone building blocks: [`InlineBuf`] and [`HeapBuf`].
//!
//! ---
//!
//! ## [`NanoString`]
//!
//! An owned sequence of bytes in one of two mutually exclusive
//! representations: up to [`INLINE_CAPACITY`] bytes held inline with no
//! allocation, or an exclusively owned heap block for anything longer.
//! All mutation goes through two primitives, `push` and `pop`; promotion
//! and demotion between the representations happen automatically.
//!
//! ### Example
//!
//! ```rust
//! use nanostring::NanoString;
//!
//! let mut s = NanoString::from("tiny");
//! assert!(s.is_inline());
//!
//! for byte in *b" but it grows and grows" {
//!   s.push(byte);
//! }
//! assert!(s.is_heap());
//! assert_eq!(s.len(), 27);
//!
//! while s.len() > 4 {
//!   s.pop();
//! }
//! assert!(s.is_inline());
//! assert_eq!(s.as_bytes(), b"tiny");
//! ```
//!
//! ## [`InlineBuf`]
//!
//! The small half: a fixed-capacity byte buffer of [`INLINE_CAPACITY`]
//! (15) content bytes with one spare slot, so its contents always read
//! as a null-terminated byte view. It never allocates and is `Copy`.
//!
//! ## [`HeapBuf`]
//!
//! The large half: a growable null-terminated byte buffer backed by an
//! exact-size heap block. Its first block is a fixed
//! [`FIRST_ALLOC_SIZE`] (32) bytes; growth doubles a power-of-two
//! target, shrinking reallocates to a tight block.
//!
//! ---
//!
//! ## `no_std` Support
//!
//! The crate is `no_std` by default and only requires `alloc`, making it
//! suitable for embedded and other resource-constrained environments.
//!
//! ---
//!
//! ## Features
//!
//! - `std`: Enables integration with the Rust standard library. When
//!   disabled, which is the default, the crate operates in `no_std`
//!   mode.
//! - `serde`†: Enables serialization and deserialization support via
//!   Serde. Values serialize as plain byte sequences.
//! - `index`†: Derives `Index`/`IndexMut` on [`InlineBuf`].
//!
//! > † enabled by default

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;
extern crate core;

pub mod heap_buf;
pub mod inline_buf;
pub mod nano_string;

pub use heap_buf::*;
pub use inline_buf::*;
pub use nano_string::*;
