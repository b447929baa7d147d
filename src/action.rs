use image::Rgba;

use crate::canvas::Tool;

/// One scripted pointer or tool event replayed against the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Select(Tool),
    Color(Rgba<u8>),
    Size(u32),
    /// Pointer moves through every point, then is released at the last one
    Drag(Vec<(f32, f32)>),
    /// Pointer released at a point without moving
    Click(f32, f32),
    Clear,
}

impl Action {
    /// Parse an action like `can`, `color=#ff0000`, `size=10`, `drag=1,1/20,20` or `click=5,5`
    pub fn parse(value: &str) -> Result<Action, String> {
        if let Some(tool) = Tool::from_name(value) {
            return Ok(Action::Select(tool));
        }
        if value == "clear" {
            return Ok(Action::Clear);
        }
        let Some((name, argument)) = value.split_once('=') else {
            return Err(format!("Unknown action '{value}'"));
        };
        match name {
            "color" => crate::arg_validators::validate_color(argument).map(Action::Color),
            "size" => crate::arg_validators::validate_pen_size(argument).map(Action::Size),
            "drag" => {
                let points = argument
                    .split('/')
                    .map(parse_point)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Action::Drag(points))
            }
            "click" => {
                let (x, y) = parse_point(argument)?;
                Ok(Action::Click(x, y))
            }
            _ => Err(format!("Unknown action '{name}'")),
        }
    }
}

/// Parse a point written as x,y
fn parse_point(value: &str) -> Result<(f32, f32), String> {
    let Some((x, y)) = value.split_once(',') else {
        return Err(format!("Point '{value}' is not written as x,y"));
    };
    let x = x
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("'{x}' is not a valid coordinate"))?;
    let y = y
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("'{y}' is not a valid coordinate"))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("Point '{value}' is not finite"));
    }
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tools_and_clear() {
        assert_eq!(Action::parse("pen"), Ok(Action::Select(Tool::Pen)));
        assert_eq!(Action::parse("can"), Ok(Action::Select(Tool::Can)));
        assert_eq!(Action::parse("eraser"), Ok(Action::Select(Tool::Eraser)));
        assert_eq!(Action::parse("picker"), Ok(Action::Select(Tool::Picker)));
        assert_eq!(Action::parse("clear"), Ok(Action::Clear));
    }

    #[test]
    fn parses_settings() {
        assert_eq!(
            Action::parse("color=#ff0000"),
            Ok(Action::Color(Rgba([255, 0, 0, 255])))
        );
        assert_eq!(Action::parse("size=25"), Ok(Action::Size(25)));
    }

    #[test]
    fn parses_pointer_events() {
        assert_eq!(
            Action::parse("drag=1,2/3.5,4/-1,0"),
            Ok(Action::Drag(vec![(1.0, 2.0), (3.5, 4.0), (-1.0, 0.0)]))
        );
        assert_eq!(Action::parse("click=10,20"), Ok(Action::Click(10.0, 20.0)));
    }

    #[test]
    fn rejects_bad_actions() {
        for value in [
            "brush",
            "size=0",
            "size=big",
            "color=nope",
            "click=10",
            "click=a,b",
            "click=inf,1",
            "drag=",
            "drag=1,1/",
            "wobble=1,1",
        ] {
            assert!(Action::parse(value).is_err(), "accepted '{value}'");
        }
    }
}
