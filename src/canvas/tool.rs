use std::fmt;

/// Paint tool the pointer is currently bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand strokes, also used by the eraser
    #[default]
    Pen,
    /// Paint bucket
    Can,
    /// Pen painting with the background color
    Eraser,
    /// Eyedropper, adopts the color under the pointer
    Picker,
}

impl Tool {
    pub fn from_name(name: &str) -> Option<Tool> {
        match name {
            "pen" => Some(Tool::Pen),
            "can" => Some(Tool::Can),
            "eraser" => Some(Tool::Eraser),
            "picker" => Some(Tool::Picker),
            _ => None,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tool::Pen => "pen",
            Tool::Can => "can",
            Tool::Eraser => "eraser",
            Tool::Picker => "picker",
        };
        f.write_str(name)
    }
}
