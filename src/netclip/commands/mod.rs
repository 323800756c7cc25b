//! Business logic of the clip operations.
//!
//! Commands take a store and a clipboard and do no terminal I/O of their own:
//! `clip` returns where the clip was saved, `copy` writes the clip text to the
//! writer it is given.

pub mod clip;
pub mod copy;
