use std::collections::HashSet;

use image::ImageBuffer;
use image::Pixel;
use imageproc::point::Point;

/// Pixel grid the paint bucket can read and write in place
pub trait Surface {
    type Color: Copy + PartialEq;

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Must reflect every earlier `set_color_at` immediately
    fn color_at(&self, x: u32, y: u32) -> Self::Color;
    fn set_color_at(&mut self, x: u32, y: u32, color: Self::Color);
}

impl<P> Surface for ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel + PartialEq,
{
    type Color = P;

    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }
    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }
    fn color_at(&self, x: u32, y: u32) -> P {
        *self.get_pixel(x, y)
    }
    fn set_color_at(&mut self, x: u32, y: u32, color: P) {
        self.put_pixel(x, y, color);
    }
}

/// Outcome of a single bucket fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillResult {
    /// Number of pixels recolored
    Filled(usize),
    /// Seed was outside the surface, nothing touched
    OutOfBounds,
    /// Seed already had the fill color, nothing touched
    SameColor,
}

impl FillResult {
    pub fn pixels_changed(&self) -> usize {
        match self {
            FillResult::Filled(count) => *count,
            _ => 0,
        }
    }
}

/// Recolor the 4-connected region of pixels sharing the seed's color, starting at seed
///
/// Neighbours are pushed without checking whether they are already queued,
/// duplicates are thrown away when popped.
pub fn flood_fill<S: Surface>(surface: &mut S, seed: Point<i32>, fill_color: S::Color) -> FillResult {
    let (width, height) = (surface.width(), surface.height());
    if seed.x < 0 || seed.y < 0 || seed.x as u32 >= width || seed.y as u32 >= height {
        return FillResult::OutOfBounds;
    }
    let (sx, sy) = (seed.x as u32, seed.y as u32);

    let target_color = surface.color_at(sx, sy);
    if target_color == fill_color {
        return FillResult::SameColor;
    }

    let mut stack = vec![(sx, sy)];
    let mut visited = HashSet::new();
    let mut changed = 0;
    while let Some((cx, cy)) = stack.pop() {
        if !visited.insert((cx, cy)) {
            continue;
        }
        if surface.color_at(cx, cy) != target_color {
            continue;
        }

        surface.set_color_at(cx, cy, fill_color);
        changed += 1;

        if cx > 0 {
            stack.push((cx - 1, cy));
        }
        if cx + 1 < width {
            stack.push((cx + 1, cy));
        }
        if cy > 0 {
            stack.push((cx, cy - 1));
        }
        if cy + 1 < height {
            stack.push((cx, cy + 1));
        }
    }
    FillResult::Filled(changed)
}
