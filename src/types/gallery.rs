/// Padding added around every thumbnail in the gallery grid.
pub const THUMBNAIL_MARGIN: u32 = 20;
/// Window height reserved for everything above the gallery.
pub const BASE_WINDOW_HEIGHT: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryLayout {
    pub thumbnails_per_row: u32,
    pub rows_needed: u32,
    pub required_height: u32,
}

impl GalleryLayout {
    /// Grid arrangement for `output_count` thumbnails of `thumb_size` pixels
    /// inside a viewport `viewport_width` pixels wide. Never fewer than one
    /// thumbnail per row.
    pub fn compute(output_count: usize, thumb_size: u32, viewport_width: u32) -> Self {
        let cell = thumb_size.saturating_add(THUMBNAIL_MARGIN);
        let thumbnails_per_row = (viewport_width / cell).max(1);
        let output_count = u32::try_from(output_count).unwrap_or(u32::MAX);
        let rows_needed = output_count.div_ceil(thumbnails_per_row);

        Self {
            thumbnails_per_row,
            rows_needed,
            required_height: BASE_WINDOW_HEIGHT.saturating_add(rows_needed.saturating_mul(cell)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewport_still_has_one_column() {
        for width in [0, 1, 50, 119] {
            let layout = GalleryLayout::compute(3, 100, width);
            assert_eq!(layout.thumbnails_per_row, 1);
            assert_eq!(layout.rows_needed, 3);
        }
    }

    #[test]
    fn rows_cover_every_output() {
        for count in 0..40usize {
            for thumb_size in [1, 100, 150, 200] {
                for width in [0, 300, 800, 1234] {
                    let layout = GalleryLayout::compute(count, thumb_size, width);
                    assert!(layout.thumbnails_per_row >= 1);
                    assert!((layout.rows_needed * layout.thumbnails_per_row) as usize >= count);
                }
            }
        }
    }

    #[test]
    fn matches_window_geometry() {
        let layout = GalleryLayout::compute(7, 100, 800);
        assert_eq!(layout.thumbnails_per_row, 6);
        assert_eq!(layout.rows_needed, 2);
        assert_eq!(layout.required_height, 500 + 2 * 120);
    }

    #[test]
    fn recomputes_for_new_thumb_size() {
        let small = GalleryLayout::compute(10, 100, 800);
        let large = GalleryLayout::compute(10, 200, 800);
        assert_eq!(small.thumbnails_per_row, 6);
        assert_eq!(large.thumbnails_per_row, 3);
        assert_eq!(large.rows_needed, 4);
    }

    #[test]
    fn huge_thumb_size_saturates_instead_of_overflowing() {
        let layout = GalleryLayout::compute(3, u32::MAX - 5, 800);
        assert_eq!(layout.thumbnails_per_row, 1);
        assert_eq!(layout.rows_needed, 3);
        assert_eq!(layout.required_height, u32::MAX);

        let layout = GalleryLayout::compute(100, 50_000_000, 800);
        assert_eq!(layout.thumbnails_per_row, 1);
        assert_eq!(layout.rows_needed, 100);
        assert_eq!(layout.required_height, u32::MAX);
    }

    #[test]
    fn empty_gallery_needs_no_rows() {
        let layout = GalleryLayout::compute(0, 100, 800);
        assert_eq!(layout.rows_needed, 0);
        assert_eq!(layout.required_height, BASE_WINDOW_HEIGHT);
    }
}
