//! Configuration for the placer module.

use serde::{Deserialize, Serialize};

/// Configuration for the file system placer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacerConfig {
    /// Buffer size for file copies in bytes.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    /// Reject relative paths containing `..` or an absolute root.
    #[serde(default = "default_true")]
    pub reject_parent_segments: bool,
}

fn default_buffer_size() -> usize {
    64 * 1024 // 64 KB
}

fn default_true() -> bool {
    true
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
            reject_parent_segments: true,
        }
    }
}

impl PlacerConfig {
    /// Sets the buffer size for copies.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Enables or disables the parent segment guard.
    pub fn with_parent_segment_guard(mut self, enabled: bool) -> Self {
        self.reject_parent_segments = enabled;
        self
    }
}
