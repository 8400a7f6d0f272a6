// prelude.rs - Convenient re-exports for the public API.
//
//! # Prelude
//!
//! ```
//! use simpex::prelude::*;
//!
//! let pat = Pattern::new("{^} = {*}").unwrap();
//! let caps = pat.captures("answer = 42").unwrap();
//! assert_eq!(caps.get(1).unwrap().as_str(), "42");
//! ```

pub use crate::api::{Captures, CapturesIter, Match, Pattern, PatternBuilder};
pub use crate::error::CompileError;
pub use crate::options::Options;
