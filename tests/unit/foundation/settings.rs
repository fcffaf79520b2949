use super::*;

#[test]
fn default_extent_is_2048_square() {
    let s = ScanSettings::default();
    assert_eq!((s.width, s.height), (2048, 2048));
}

#[test]
fn clamped_keeps_dimensions_in_range() {
    let s = ScanSettings {
        width: 0,
        height: 100_000,
    }
    .clamped();
    assert_eq!(s.width, 1);
    assert_eq!(s.height, MAX_SCAN_EXTENT);
}

#[test]
fn from_env_without_overrides_is_default() {
    // Only meaningful when the variables are unset in the test environment.
    if std::env::var_os("PATH2D_SCAN_WIDTH").is_none()
        && std::env::var_os("PATH2D_SCAN_HEIGHT").is_none()
    {
        assert_eq!(ScanSettings::from_env(), ScanSettings::default());
    }
}
