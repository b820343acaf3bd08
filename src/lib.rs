//! # sortlines
//!
//! Line-oriented transformations for a block of lines selected in an editor:
//! sorting with several comparators, duplicate filtering, shuffling and an
//! indentation-aware structural sort that keeps nested blocks attached to
//! their parent line.
//!
//! The core lives in [`sortlines`]. Hosts hand it an ordered list of lines and
//! receive the transformed list back; the [`sortlines::processor`] module adds
//! the glue for applying an operation to a selection inside a text buffer.

pub mod sortlines;
