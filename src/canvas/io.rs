use std::path::Path;

use image::DynamicImage;
use image::ImageBuffer;
use image::Rgba;
use image::imageops::FilterType;

use crate::{Error, Result};

/// Open image file in any format the image crate can decode
pub(crate) fn open_image(file: &Path) -> Result<DynamicImage> {
    let image = image::ImageReader::open(file)?
        .with_guessed_format()?
        .decode()?;
    Ok(image)
}

/// Scale image to cover the canvas while keeping aspect ratio, then crop the overflow evenly on both sides
/// The result always has exactly the canvas dimensions
pub(crate) fn fit_to_canvas(
    image: &DynamicImage,
    canvas_width: u32,
    canvas_height: u32,
) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>> {
    if image.width() == canvas_width && image.height() == canvas_height {
        return Ok(image.to_rgba8());
    }
    let (width, height) = (image.width() as u64, image.height() as u64);
    let (cw, ch) = (canvas_width as u64, canvas_height as u64);
    // Compare width/cw against height/ch without going through floats
    let (scaled_width, scaled_height) = match (width * ch).cmp(&(height * cw)) {
        // Relatively taller than the canvas, match widths and crop top and bottom
        std::cmp::Ordering::Less => (cw, (height * cw).div_ceil(width.max(1)).max(ch)),
        // Relatively wider than the canvas, match heights and crop left and right
        std::cmp::Ordering::Greater => ((width * ch).div_ceil(height.max(1)).max(cw), ch),
        std::cmp::Ordering::Equal => (cw, ch),
    };
    let (Ok(scaled_width), Ok(scaled_height)) =
        (u32::try_from(scaled_width), u32::try_from(scaled_height))
    else {
        return Err(Error::ScaledImageTooLarge {
            width: scaled_width,
            height: scaled_height,
        });
    };
    let scaled = image
        .resize_exact(scaled_width, scaled_height, FilterType::Triangle)
        .to_rgba8();
    let x_offset = (scaled.width() - canvas_width) / 2;
    let y_offset = (scaled.height() - canvas_height) / 2;
    Ok(image::imageops::crop_imm(&scaled, x_offset, y_offset, canvas_width, canvas_height).to_image())
}

/// Save RGBA image to file, format is decided by the file extension
pub(crate) fn save_rgba_image(img: &ImageBuffer<Rgba<u8>, Vec<u8>>, file: &Path) -> Result<()> {
    let format = image::ImageFormat::from_path(file)?;
    match format {
        // JPEG has no alpha channel
        image::ImageFormat::Jpeg => DynamicImage::ImageRgba8(img.clone()).to_rgb8().save(file)?,
        _ => img.save_with_format(file, format)?,
    }
    println!("{}: saved", file.display());
    Ok(())
}
