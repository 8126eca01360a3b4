pub mod config;
pub mod generator;
pub mod pipeline;
pub mod resolver;
pub mod source;
pub mod span;
pub mod text;

// Re-export main types for convenient access
pub use span::{Category, CorrectionSpan, Segment};

// Re-export the engine entry points
pub use generator::{generate, locate, Generated, RuleSet, RuleSpec, SubstringCorrection};
pub use resolver::{build, normalize};

// Re-export end-to-end flows used by the CLI and renderers
pub use pipeline::{check, render, CorrectionReport};
pub use source::CorrectionRecord;
