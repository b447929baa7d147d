pub use self::error::{Error, Result};

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use image::Rgba;

pub use action::Action;
pub use canvas::{Canvas, FillResult, Surface, Tool, flood_fill};

mod action;
mod arg_validators;
mod canvas;
mod error;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Actions replayed in order: pen, can, eraser, picker, clear,
    /// color=<css color>, size=<n>, drag=x,y/x,y/..., click=x,y
    #[arg(value_parser = arg_validators::validate_action)]
    actions: Vec<Action>,
    /// Image file to start from, scaled and cropped to the canvas size
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Output image file, format is taken from the extension
    #[arg(short, long, required(true))]
    output: PathBuf,
    /// Canvas width (pixels)
    #[arg(short('W'), long, default_value = "800", value_parser = arg_validators::validate_canvas_dimension)]
    width: u32,
    /// Canvas height (pixels)
    #[arg(short('H'), long, default_value = "600", value_parser = arg_validators::validate_canvas_dimension)]
    height: u32,
    /// Initial pen color
    #[arg(short('c'), long, default_value = "#000000", value_parser = arg_validators::validate_color)]
    pen_color: Rgba<u8>,
    /// Initial pen size (pixels)
    #[arg(short('s'), long, default_value = "4", value_parser = arg_validators::validate_pen_size)]
    pen_size: u32,
    /// Verbose messages
    #[arg(short('v'), long, default_value_t = false)]
    verbose: bool,
}

pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::parse_from(args);
    let mut canvas = Canvas::from_args(&args);
    if let Some(file) = &args.input {
        canvas.open(file)?;
    }
    for action in &args.actions {
        canvas.apply(action);
    }
    canvas.save(&args.output)?;
    Ok(())
}
