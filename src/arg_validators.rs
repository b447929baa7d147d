use image::Rgba;

use crate::action::Action;
use crate::canvas::color_ops;

pub(crate) fn validate_canvas_dimension(value: &str) -> Result<u32, String> {
    let num = value
        .parse::<u32>()
        .map_err(|_| "Not a valid positive integer".to_string())?;
    if num == 0 {
        return Err("Number must be greater than 0".to_string());
    }
    Ok(num)
}

pub(crate) fn validate_pen_size(value: &str) -> Result<u32, String> {
    let num = value
        .parse::<u32>()
        .map_err(|_| "Not a valid positive integer".to_string())?;
    if num == 0 {
        return Err("Pen size must be greater than 0".to_string());
    }
    Ok(num)
}

pub(crate) fn validate_color(value: &str) -> Result<Rgba<u8>, String> {
    match color_ops::parse_color(value) {
        Ok(color) => Ok(color),
        Err(e) => Err(e.to_string()),
    }
}

pub(crate) fn validate_action(value: &str) -> Result<Action, String> {
    Action::parse(value)
}
