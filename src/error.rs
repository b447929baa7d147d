use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From)]
pub enum Error {
    /// Scaling an image to cover the canvas would exceed the largest supported image
    ScaledImageTooLarge { width: u64, height: u64 },

    // -- Externals
    #[from]
    Io(std::io::Error),
    #[from]
    Image(image::error::ImageError),
}
