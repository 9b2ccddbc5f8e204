//! Persistence of embedded images to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::raw::RawImageBlock;

/// Default minimum placed width, in points, for an image to be persisted.
pub const DEFAULT_MIN_IMAGE_WIDTH: f64 = 30.0;
/// Default minimum placed height, in points, for an image to be persisted.
pub const DEFAULT_MIN_IMAGE_HEIGHT: f64 = 30.0;

/// Write an image block's bytes to disk, unless the placed image is too
/// small to matter.
///
/// The size check uses the bounding box on the page, not the raster's
/// pixel dimensions, so decorative glyphs, icons, and rule lines are
/// declined (`Ok(None)`) rather than saved. Accepted images land at
/// `page_{page_number}_img_{block_number}.{ext}` under `output_dir`,
/// which is created recursively when missing; an existing file with the
/// same name is overwritten, so re-invocation is idempotent.
pub fn save_image_block(
    block: &RawImageBlock,
    output_dir: &Path,
    page_number: u32,
    min_width: f64,
    min_height: f64,
) -> Result<Option<PathBuf>> {
    let width = block.bbox.width();
    let height = block.bbox.height();
    if width < min_width || height < min_height {
        log::debug!(
            "declining image page {} block {}: {:.1}x{:.1} below {:.0}x{:.0}",
            page_number,
            block.block_number,
            width,
            height,
            min_width,
            min_height
        );
        return Ok(None);
    }

    fs::create_dir_all(output_dir)?;

    let file_name = format!(
        "page_{}_img_{}.{}",
        page_number, block.block_number, block.ext
    );
    let image_path = output_dir.join(file_name);
    fs::write(&image_path, &block.image)?;

    Ok(Some(image_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BBox;

    fn image_block(bbox: BBox, block_number: u32, ext: &str) -> RawImageBlock {
        RawImageBlock {
            block_number,
            bbox,
            width: 64,
            height: 64,
            ext: ext.to_string(),
            image: vec![0x89, 0x50, 0x4E, 0x47],
            mask: None,
        }
    }

    #[test]
    fn test_below_threshold_declines_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let block = image_block(BBox(0.0, 0.0, 20.0, 20.0), 0, "png");

        let saved = save_image_block(
            &block,
            dir.path(),
            1,
            DEFAULT_MIN_IMAGE_WIDTH,
            DEFAULT_MIN_IMAGE_HEIGHT,
        )
        .unwrap();
        assert!(saved.is_none());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_persists_with_deterministic_name() {
        let dir = tempfile::tempdir().unwrap();
        let block = image_block(BBox(0.0, 0.0, 50.0, 50.0), 7, "png");

        let saved = save_image_block(
            &block,
            dir.path(),
            3,
            DEFAULT_MIN_IMAGE_WIDTH,
            DEFAULT_MIN_IMAGE_HEIGHT,
        )
        .unwrap()
        .unwrap();
        assert_eq!(saved, dir.path().join("page_3_img_7.png"));
        assert_eq!(fs::read(&saved).unwrap(), vec![0x89, 0x50, 0x4E, 0x47]);
    }

    #[test]
    fn test_reinvocation_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut block = image_block(BBox(0.0, 0.0, 50.0, 50.0), 1, "jpeg");

        let first = save_image_block(&block, dir.path(), 1, 30.0, 30.0)
            .unwrap()
            .unwrap();
        block.image = vec![0xFF, 0xD8];
        let second = save_image_block(&block, dir.path(), 1, 30.0, 30.0)
            .unwrap()
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(fs::read(&second).unwrap(), vec![0xFF, 0xD8]);
    }

    #[test]
    fn test_creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("images/deep");
        let block = image_block(BBox(0.0, 0.0, 100.0, 40.0), 2, "png");

        let saved = save_image_block(&block, &nested, 5, 30.0, 30.0)
            .unwrap()
            .unwrap();
        assert!(saved.starts_with(&nested));
    }
}
