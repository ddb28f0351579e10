//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate output dimensions for fitting an image under a maximum width.
///
/// Images at or below `max_width` keep their dimensions. Wider images are
/// scaled down proportionally: the width becomes `max_width` and the height
/// is rounded to the nearest pixel.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `max_width` - Upper bound for the output width in pixels
///
/// # Returns
/// * `(width, height)` - Output dimensions, width ≤ `max_width`
///
/// # Examples
/// ```
/// # use wandermark::imaging::fit_to_max_width;
/// // 1600x1200 capped at 800 → 800x600
/// assert_eq!(fit_to_max_width((1600, 1200), 800), (800, 600));
///
/// // 640x480 is already narrow enough → unchanged
/// assert_eq!(fit_to_max_width((640, 480), 800), (640, 480));
/// ```
pub fn fit_to_max_width(source: (u32, u32), max_width: u32) -> (u32, u32) {
    let (src_w, src_h) = source;

    if src_w <= max_width {
        return (src_w, src_h);
    }

    let scale = max_width as f64 / src_w as f64;
    let h = (src_h as f64 * scale).round() as u32;
    (max_width, h)
}
