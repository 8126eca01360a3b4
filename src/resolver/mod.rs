//! Resolver half of the engine: raw spans -> [`normalize`] -> [`build`]
//!
//! Both steps are pure functions of their inputs and are shared by every span producer.
//!
//! ```
//! use spanfix::{resolver, Category, CorrectionSpan};
//!
//! let text = "0123456789";
//! let accepted = resolver::normalize(text, &[
//!     CorrectionSpan::new(0, 5, Category::Spelling, "first"),
//!     CorrectionSpan::new(3, 8, Category::Spacing, "overlaps"),
//! ]);
//! let segments = resolver::build(text, &accepted);
//! assert_eq!(segments.len(), 2);
//! assert_eq!(resolver::reconstruct(&segments), text);
//! ```

pub mod normalize;
pub mod segments;

pub use normalize::{normalize, normalize_owned};
pub use segments::{build, reconstruct};
