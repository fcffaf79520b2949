/// Default offscreen extent used when scanning a path for ink.
pub const DEFAULT_SCAN_EXTENT: u32 = 2048;

/// Hard upper bound on either scan dimension, to avoid pathological allocations.
pub const MAX_SCAN_EXTENT: u32 = 16_384;

/// Offscreen surface size used by the bounding-box scanner.
///
/// Paths are rendered in their own coordinate space, so anything outside
/// `[0, width) x [0, height)` is clipped away and does not contribute to the scanned extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScanSettings {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCAN_EXTENT,
            height: DEFAULT_SCAN_EXTENT,
        }
    }
}

impl ScanSettings {
    /// Defaults overridden by `PATH2D_SCAN_WIDTH` / `PATH2D_SCAN_HEIGHT` when they hold a
    /// positive integer. Values above [`MAX_SCAN_EXTENT`] are capped.
    pub fn from_env() -> Self {
        let read = |key: &str| {
            std::env::var(key)
                .ok()
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|&n| n > 0)
                .map(|n| n.min(MAX_SCAN_EXTENT))
        };
        let defaults = Self::default();
        Self {
            width: read("PATH2D_SCAN_WIDTH").unwrap_or(defaults.width),
            height: read("PATH2D_SCAN_HEIGHT").unwrap_or(defaults.height),
        }
    }

    /// Same settings with both dimensions clamped into `1..=MAX_SCAN_EXTENT`.
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.clamp(1, MAX_SCAN_EXTENT),
            height: self.height.clamp(1, MAX_SCAN_EXTENT),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/settings.rs"]
mod tests;
