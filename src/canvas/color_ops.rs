use color::{AlphaColor, ParseError};
use image::Pixel; // for to_rgb() method
use image::Rgba;
use itertools::Itertools; // for join() iterator function

pub(crate) const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
#[cfg(test)]
pub(crate) const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Parse a CSS color string into a color, e.g. #RRGGBB, #RGB or a named color
pub(crate) fn parse_color(color: &str) -> Result<Rgba<u8>, ParseError> {
    let color = color::parse_color(color)?;
    let color: AlphaColor<color::Srgb> = color.to_alpha_color();
    let color = color.to_rgba8();
    let color = Rgba(color.to_u8_array());
    Ok(color)
}

/// Return the color as lowercase hex #rrggbb, alpha is dropped
pub(crate) fn to_hex(color: &Rgba<u8>) -> String {
    format!(
        "#{}",
        color
            .to_rgb()
            .channels()
            .iter()
            .map(|c| format!("{c:02x}"))
            .join("")
    )
}
