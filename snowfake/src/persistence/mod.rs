//! The two externally-visible file contracts (§6): the text checkpoint
//! format and the rendered PPM image format, plus the line-oriented
//! parameter prompt grammar shared by the interactive host and file-based
//! configuration.

pub mod checkpoint;
pub mod palette;
pub mod ppm;
pub mod prompt;
