use std::path::Path;

use image::{ImageBuffer, Rgba};
use imageproc::point::Point;

use crate::{Args, Result, action::Action};

pub use self::fill::{FillResult, Surface, flood_fill};
pub use self::tool::Tool;

pub(crate) mod color_ops;
mod drawing;
pub mod fill;
mod io;
mod tool;

/// Fixed-size paint surface together with the state of the paint tools
pub struct Canvas {
    label: String,
    image: ImageBuffer<Rgba<u8>, Vec<u8>>,
    width: u32,
    height: u32,
    pen_color: Rgba<u8>,
    pen_size: u32,
    tool: Tool,
    eraser: bool,
    last_position: Option<(f32, f32)>,
    pub verbose: bool,
}

impl Canvas {
    /// Blank white canvas with the pen tool selected
    pub fn new(width: u32, height: u32, pen_color: Rgba<u8>, pen_size: u32) -> Self {
        Self {
            label: "canvas".to_string(),
            image: ImageBuffer::from_pixel(width, height, color_ops::WHITE),
            width,
            height,
            pen_color,
            pen_size,
            tool: Tool::default(),
            eraser: false,
            last_position: None,
            verbose: false,
        }
    }

    /// Name printed in front of status messages
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub(crate) fn from_args(args: &Args) -> Self {
        let mut canvas = Self::new(args.width, args.height, args.pen_color, args.pen_size);
        if let Some(file) = &args.input {
            canvas = canvas.with_label(file.display().to_string());
        }
        canvas.verbose = args.verbose;
        canvas
    }

    pub fn image(&self) -> &ImageBuffer<Rgba<u8>, Vec<u8>> {
        &self.image
    }
    pub fn tool(&self) -> Tool {
        self.tool
    }
    pub fn is_erasing(&self) -> bool {
        self.eraser
    }
    pub fn pen_color(&self) -> Rgba<u8> {
        self.pen_color
    }
    pub fn pen_size(&self) -> u32 {
        self.pen_size
    }

    /// Replace the picture with an image file, scaled and cropped to the canvas size
    pub fn open(&mut self, file: &Path) -> Result<()> {
        let image = io::open_image(file)?;
        if self.verbose {
            println!("{}: {}x{}", file.display(), image.width(), image.height());
        }
        self.image = io::fit_to_canvas(&image, self.width, self.height)?;
        Ok(())
    }

    pub fn save(&self, file: &Path) -> Result<()> {
        io::save_rgba_image(&self.image, file)
    }

    /// Start over with a blank white picture
    pub fn clear(&mut self) {
        self.image = ImageBuffer::from_pixel(self.width, self.height, color_ops::WHITE);
        if self.verbose {
            println!("{}: cleared", self.label);
        }
    }

    /// Paint bucket at position
    pub fn fill_color(&mut self, color: Rgba<u8>, position: Point<i32>) -> FillResult {
        let result = fill::flood_fill(&mut self.image, position, color);
        match result {
            FillResult::Filled(count) => println!(
                "{}: filled {count} pixels at {}x{} with {}",
                self.label,
                position.x,
                position.y,
                color_ops::to_hex(&color)
            ),
            FillResult::OutOfBounds if self.verbose => println!(
                "{}: fill at {}x{} is outside the canvas",
                self.label, position.x, position.y
            ),
            FillResult::SameColor if self.verbose => println!(
                "{}: fill at {}x{} already has color {}",
                self.label,
                position.x,
                position.y,
                color_ops::to_hex(&color)
            ),
            _ => {}
        }
        result
    }

    /// Choose the tool bound to the pointer, the eraser is a pen painting white
    pub fn select_tool(&mut self, tool: Tool) {
        self.eraser = false;
        self.tool = match tool {
            Tool::Eraser => {
                self.eraser = true;
                Tool::Pen
            }
            tool => tool,
        };
        if self.verbose {
            println!("{}: selected tool {tool}", self.label);
        }
    }

    pub fn set_pen_color(&mut self, color: Rgba<u8>) {
        self.pen_color = color;
        if self.verbose {
            println!("{}: pen color {}", self.label, color_ops::to_hex(&color));
        }
    }

    pub fn set_pen_size(&mut self, size: u32) {
        self.pen_size = size;
        if self.verbose {
            println!("{}: pen size {size}", self.label);
        }
    }

    /// Pointer moved with the button held down
    /// The first move after a release only records where the stroke starts
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let Some(last) = self.last_position.replace((x, y)) else {
            return;
        };
        if self.tool != Tool::Pen {
            return;
        }
        let color = if self.eraser {
            color_ops::WHITE
        } else {
            self.pen_color
        };
        drawing::draw_stroke(&mut self.image, last, (x, y), self.pen_size, color);
    }

    /// Pointer button released, this is where the bucket and the picker act
    pub fn pointer_release(&mut self, x: f32, y: f32) {
        let position = Point::new(x.round() as i32, y.round() as i32);
        match self.tool {
            Tool::Can => {
                self.fill_color(self.pen_color, position);
            }
            Tool::Picker => self.pick_color(position),
            Tool::Pen | Tool::Eraser => {}
        }
        self.last_position = None;
    }

    /// Adopt the color under position as pen color and go back to the pen
    fn pick_color(&mut self, position: Point<i32>) {
        if position.x < 0
            || position.y < 0
            || position.x as u32 >= self.width
            || position.y as u32 >= self.height
        {
            if self.verbose {
                println!(
                    "{}: pick at {}x{} is outside the canvas",
                    self.label, position.x, position.y
                );
            }
            return;
        }
        let picked = *self.image.get_pixel(position.x as u32, position.y as u32);
        println!(
            "{}: picked color {} at {}x{}",
            self.label,
            color_ops::to_hex(&picked),
            position.x,
            position.y
        );
        self.pen_color = picked;
        self.select_tool(Tool::Pen);
    }

    /// Replay a single scripted action
    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::Select(tool) => self.select_tool(*tool),
            Action::Color(color) => self.set_pen_color(*color),
            Action::Size(size) => self.set_pen_size(*size),
            Action::Drag(points) => {
                for &(x, y) in points {
                    self.pointer_move(x, y);
                }
                if let Some(&(x, y)) = points.last() {
                    self.pointer_release(x, y);
                }
            }
            Action::Click(x, y) => self.pointer_release(*x, *y),
            Action::Clear => self.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::color_ops::{BLACK, WHITE};
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn canvas(width: u32, height: u32) -> Canvas {
        Canvas::new(width, height, BLACK, 4)
    }

    fn count(canvas: &Canvas, color: Rgba<u8>) -> usize {
        canvas.image().pixels().filter(|p| **p == color).count()
    }

    #[test]
    fn starts_white_with_black_pen() {
        let args = Args::try_parse_from(["picasso", "-o", "out.png", "-W", "8", "-H", "6"]).unwrap();
        let canvas = Canvas::from_args(&args);

        assert_eq!(canvas.image().dimensions(), (8, 6));
        assert_eq!(count(&canvas, WHITE), 48);
        assert_eq!(canvas.pen_color(), BLACK);
        assert_eq!(canvas.pen_size(), 4);
        assert_eq!(canvas.tool(), Tool::Pen);
        assert!(!canvas.is_erasing());
        assert!(!canvas.verbose);
    }

    #[test]
    fn arguments_configure_the_canvas() {
        let args = Args::try_parse_from([
            "picasso", "-o", "out.png", "-W", "3", "-H", "2", "-c", "red", "-s", "9", "-v",
        ])
        .unwrap();
        let canvas = Canvas::from_args(&args);

        assert_eq!(canvas.image().dimensions(), (3, 2));
        assert_eq!(canvas.pen_color(), RED);
        assert_eq!(canvas.pen_size(), 9);
        assert!(canvas.verbose);
    }

    #[test]
    fn first_move_only_records_position() {
        let mut canvas = canvas(10, 10);

        canvas.pointer_move(5.0, 5.0);

        assert_eq!(count(&canvas, WHITE), 100);
    }

    #[test]
    fn pen_draws_between_moves() {
        let mut canvas = canvas(20, 20);

        canvas.pointer_move(2.0, 10.0);
        canvas.pointer_move(17.0, 10.0);

        assert_eq!(*canvas.image().get_pixel(10, 10), BLACK);
    }

    #[test]
    fn release_ends_the_stroke() {
        let mut canvas = canvas(20, 20);

        canvas.pointer_move(2.0, 2.0);
        canvas.pointer_release(2.0, 2.0);
        canvas.pointer_move(17.0, 17.0);

        assert_eq!(count(&canvas, WHITE), 400);
    }

    #[test]
    fn eraser_paints_white() {
        let mut canvas = canvas(20, 20);
        canvas.pointer_move(0.0, 10.0);
        canvas.pointer_move(19.0, 10.0);
        canvas.pointer_release(19.0, 10.0);

        canvas.select_tool(Tool::Eraser);
        assert_eq!(canvas.tool(), Tool::Pen);
        assert!(canvas.is_erasing());
        canvas.pointer_move(0.0, 10.0);
        canvas.pointer_move(19.0, 10.0);

        assert_eq!(count(&canvas, WHITE), 400);
    }

    #[test]
    fn can_moves_do_not_draw() {
        let mut canvas = canvas(10, 10);
        canvas.select_tool(Tool::Can);

        canvas.pointer_move(1.0, 1.0);
        canvas.pointer_move(8.0, 8.0);

        assert_eq!(count(&canvas, WHITE), 100);
    }

    #[test]
    fn can_release_fills_region() {
        let mut canvas = canvas(10, 10);
        // Vertical black wall splitting the canvas at x=5
        canvas.set_pen_size(1);
        canvas.pointer_move(5.0, 0.0);
        canvas.pointer_move(5.0, 9.0);
        canvas.pointer_release(5.0, 9.0);

        canvas.select_tool(Tool::Can);
        canvas.set_pen_color(RED);
        canvas.pointer_release(1.4, 3.6);

        assert_eq!(count(&canvas, RED), 50);
        assert_eq!(count(&canvas, BLACK), 10);
        assert_eq!(*canvas.image().get_pixel(9, 9), WHITE);
    }

    #[test]
    fn picker_adopts_color_and_returns_to_pen() {
        let mut canvas = canvas(10, 10);
        canvas.fill_color(RED, Point::new(0, 0));
        canvas.select_tool(Tool::Eraser);
        canvas.select_tool(Tool::Picker);
        assert!(!canvas.is_erasing());

        canvas.pointer_release(3.0, 3.0);

        assert_eq!(canvas.pen_color(), RED);
        assert_eq!(canvas.tool(), Tool::Pen);
    }

    #[test]
    fn picker_outside_canvas_is_ignored() {
        let mut canvas = canvas(10, 10);
        canvas.select_tool(Tool::Picker);

        canvas.pointer_release(-3.0, 30.0);

        assert_eq!(canvas.pen_color(), BLACK);
        assert_eq!(canvas.tool(), Tool::Picker);
    }

    #[test]
    fn clear_restores_white() {
        let mut canvas = canvas(10, 10);
        canvas.fill_color(RED, Point::new(0, 0));

        canvas.clear();

        assert_eq!(count(&canvas, WHITE), 100);
    }

    #[test]
    fn drag_action_draws_and_releases() {
        let mut canvas = canvas(20, 20);

        canvas.apply(&Action::Drag(vec![(2.0, 10.0), (10.0, 10.0), (18.0, 10.0)]));
        canvas.apply(&Action::Select(Tool::Can));
        canvas.apply(&Action::Color(RED));
        canvas.apply(&Action::Click(0.0, 0.0));

        assert_eq!(*canvas.image().get_pixel(10, 10), BLACK);
        assert_eq!(*canvas.image().get_pixel(19, 0), RED);
        // The stroke cuts the canvas in two
        assert_eq!(*canvas.image().get_pixel(0, 19), WHITE);
    }
}
