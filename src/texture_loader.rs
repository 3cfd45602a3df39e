use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> anyhow::Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read image {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF is only read reliably from JPEG containers
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(&file_bytes).unwrap_or_else(|e| {
            log::warn!("could not read EXIF data for {}: {}", image_path.display(), e);
            1
        })
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| anyhow!("failed to decode image {}: {}", image_path.display(), e))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Mirrored orientations are drawn as-is.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    log::debug!("loaded {} (orientation {})", image_path.display(), orientation);

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {}", image_path.display(), e))
}

fn read_orientation(file_bytes: &[u8]) -> Result<u16, exif::Error> {
    let exif = Reader::new().read_from_container(&mut Cursor::new(file_bytes))?;
    let orientation = exif
        .get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| match &field.value {
            Value::Short(values) => values.first().copied(),
            _ => None,
        })
        .unwrap_or(1);
    Ok(orientation)
}
