use std::cell::Cell;

use super::*;
use crate::render::bitmap::Bitmap;

fn buffer(w: u32, h: u32, ink: &[(u32, u32)]) -> Vec<u8> {
    let mut data = vec![0u8; (w * h * 4) as usize];
    for &(x, y) in ink {
        let i = ((y * w + x) * 4) as usize;
        data[i + 3] = 255;
    }
    data
}

#[test]
fn scan_reports_inset_extent() {
    let data = buffer(10, 10, &[(2, 3), (5, 7)]);
    let b = scan_ink_extent(&data, 10, 10).unwrap();
    assert_eq!(b.as_tuple(), (3, 4, 2, 3));
}

#[test]
fn scan_without_ink_is_negative_and_empty() {
    let data = buffer(10, 10, &[]);
    let b = scan_ink_extent(&data, 10, 10).unwrap();
    assert_eq!(b.as_tuple(), (11, 11, -11, -11));
    assert!(b.is_empty());
    assert_eq!(b.to_rect(), None);
}

#[test]
fn any_non_zero_channel_counts_as_ink() {
    let mut data = vec![0u8; 4 * 4 * 4];
    data[(4 + 1) * 4] = 1;
    let b = scan_ink_extent(&data, 4, 4).unwrap();
    assert_eq!(b.as_tuple(), (2, 2, -1, -1));
}

#[test]
fn scan_rejects_mismatched_buffer() {
    assert!(matches!(
        scan_ink_extent(&[0; 7], 1, 2).unwrap_err(),
        Path2dError::Render(_)
    ));
}

#[test]
fn options_deserialize_with_defaults() {
    let opts: BoundingBoxOptions =
        serde_json::from_str(r#"{"d":"M0 0 L1 1","lineCap":"round","fillColor":"red"}"#).unwrap();
    assert_eq!(opts.d, "M0 0 L1 1");
    assert_eq!(opts.line_cap, LineCap::Round);
    assert_eq!(opts.line_join, LineJoin::Miter);
    assert_eq!(opts.stroke_color, Color::BLACK);
    assert_eq!(opts.fill_color, Color::rgba(255, 0, 0, 255));
}

struct CountingRasterizer {
    calls: Cell<usize>,
    ink: (u32, u32),
}

impl PathRasterizer for CountingRasterizer {
    fn rasterize(&self, doc: &PathDocument<'_>) -> Path2dResult<Bitmap> {
        self.calls.set(self.calls.get() + 1);
        assert_eq!(doc.line_width, 1.0);
        let mut data = vec![0u8; (doc.width * doc.height * 4) as usize];
        let i = ((self.ink.1 * doc.width + self.ink.0) * 4) as usize;
        data[i..i + 4].copy_from_slice(&[0, 0, 0, 255]);
        Bitmap::from_premul(doc.width, doc.height, data)
    }
}

#[test]
fn empty_data_short_circuits_before_rendering() {
    let raster = CountingRasterizer {
        calls: Cell::new(0),
        ink: (0, 0),
    };
    let scanner = BoundingBoxScanner::with_rasterizer(
        ScanSettings {
            width: 16,
            height: 16,
        },
        &raster,
    );
    assert_eq!(
        scanner.compute(&BoundingBoxOptions::new("")).unwrap(),
        BoundingBox::ZERO
    );
    assert_eq!(raster.calls.get(), 0);

    // Only the empty string is special; whitespace goes through the renderer.
    scanner.compute(&BoundingBoxOptions::new("   ")).unwrap();
    assert_eq!(raster.calls.get(), 1);
}

#[test]
fn malformed_data_fails_before_rendering() {
    let raster = CountingRasterizer {
        calls: Cell::new(0),
        ink: (0, 0),
    };
    let scanner = BoundingBoxScanner::with_rasterizer(
        ScanSettings {
            width: 16,
            height: 16,
        },
        &raster,
    );
    let err = scanner
        .compute(&BoundingBoxOptions::new("M 0 0 L nope"))
        .unwrap_err();
    assert!(matches!(err, Path2dError::Parse { .. }));
    assert_eq!(raster.calls.get(), 0);
}

#[test]
fn scanner_measures_rendered_pixels() {
    let raster = CountingRasterizer {
        calls: Cell::new(0),
        ink: (4, 6),
    };
    let scanner = BoundingBoxScanner::with_rasterizer(
        ScanSettings {
            width: 16,
            height: 8,
        },
        &raster,
    );
    let b = scanner
        .compute(&BoundingBoxOptions::new("M 4 6 L 4 6"))
        .unwrap();
    assert_eq!(b.as_tuple(), (5, 7, -1, -1));
    assert_eq!(raster.calls.get(), 1);
}

#[test]
fn settings_are_clamped() {
    let scanner = BoundingBoxScanner::with_settings(ScanSettings {
        width: 0,
        height: 1_000_000,
    });
    assert_eq!(scanner.settings().width, 1);
    assert_eq!(scanner.settings().height, crate::foundation::settings::MAX_SCAN_EXTENT);
}
