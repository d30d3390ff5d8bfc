//! Per-frame render statistics.

#![forbid(unsafe_code)]

use serde::Serialize;

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// Incremental FNV-1a 64-bit hasher for frame digests.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fnv1a64 {
    hash: u64,
}

impl Fnv1a64 {
    pub(crate) const fn new() -> Self {
        Self { hash: FNV_OFFSET }
    }

    pub(crate) fn update(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.hash ^= u64::from(b);
            self.hash = self.hash.wrapping_mul(FNV_PRIME);
        }
    }

    pub(crate) const fn finish(self) -> u64 {
        self.hash
    }
}

/// Summary of one completed render pass.
///
/// `frame_hash` digests the drawn content (glyphs and colors per row),
/// not the surface geometry: two renders of the same buffer produce
/// the same hash regardless of viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    /// Rows drawn.
    pub rows: u16,
    /// Total cells covered by the drawn rows.
    pub cells: u32,
    /// Text draw calls issued (one per row).
    pub draw_calls: u32,
    /// FNV-1a 64 digest of the frame content.
    pub frame_hash: u64,
}

impl RenderStats {
    /// JSON encoding for log sinks and host-side dashboards.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
