use image::ImageBuffer;
use image::Rgba;
use imageproc::drawing::BresenhamLineIter;

/// Draws a line segment of the specified width with round caps
/// NB: Parts of the stroke outside the image are clipped
pub(crate) fn draw_stroke(
    image: &mut ImageBuffer<Rgba<u8>, Vec<u8>>,
    start: (f32, f32),
    end: (f32, f32),
    width: u32,
    color: Rgba<u8>,
) {
    if width <= 1 {
        imageproc::drawing::draw_line_segment_mut(image, start, end, color);
        return;
    }
    let stamp = round_stamp(width);
    let (image_width, image_height) = (image.width() as i32, image.height() as i32);
    for (cx, cy) in BresenhamLineIter::new(start, end) {
        for (dx, dy) in &stamp {
            let (x, y) = (cx + dx, cy + dy);
            if x < 0 || y < 0 || x >= image_width || y >= image_height {
                continue;
            }
            image.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Pixel offsets of a disc exactly `diameter` pixels across
/// Even diameters have no center pixel, their disc is centered half a pixel up and left of the origin
fn round_stamp(diameter: u32) -> Vec<(i32, i32)> {
    let low = -((diameter / 2) as i32);
    let center = low as f32 + (diameter as f32 - 1.0) / 2.0;
    let radius_squared = (diameter as f32 / 2.0).powi(2);
    let offsets = low..low + diameter as i32;
    let mut stamp = Vec::new();
    for dy in offsets.clone() {
        for dx in offsets.clone() {
            let distance = (dx as f32 - center).powi(2) + (dy as f32 - center).powi(2);
            if distance <= radius_squared {
                stamp.push((dx, dy));
            }
        }
    }
    stamp
}
