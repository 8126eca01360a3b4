// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use spanfix::{CorrectionSpan, Segment};

/// Test fixture helper for writing rule and response files into a temporary directory
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Write a file relative to the fixture root
    pub fn write_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }
}

/// Concatenate segment texts in order
pub fn joined(segments: &[Segment<'_>]) -> String {
    segments.iter().map(Segment::text).collect()
}

/// (start, end) pairs of spans, for compact assertions
pub fn ranges(spans: &[CorrectionSpan]) -> Vec<(usize, usize)> {
    spans.iter().map(|s| (s.start, s.end)).collect()
}

/// Assert that accepted spans are ascending, pairwise non-overlapping and non-void
pub fn assert_non_overlapping(spans: &[CorrectionSpan], context: &str) {
    for pair in spans.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "{}: spans overlap or are out of order: {:?} then {:?}",
            context,
            (pair[0].start, pair[0].end),
            (pair[1].start, pair[1].end)
        );
    }
    for span in spans {
        assert!(span.start < span.end, "{}: void span accepted: {:?}", context, span);
    }
}
