//! Contiguous-storage dynamic array: a growable sequence with an explicit
//! capacity policy, built over an exclusive-ownership storage block.
//!
//! The crate is the pair of cooperating types:
//!
//! - [`OwnedBuffer`]: owns zero or one contiguously allocated block of
//!   element slots; move-only, with explicit ownership transfer in and out.
//! - [`ContigVec`]: tracks logical length versus allocated capacity over one
//!   buffer and implements the growth policy, element relocation, and the
//!   two-tier (checked/unchecked) access contract.

pub mod buffer;
pub mod vector;

pub use buffer::OwnedBuffer;
pub use vector::ContigVec;
