/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error to open, read or write the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// The cube file has no `LUT_3D_SIZE` header.
    #[error("No size found in the file")]
    MissingSize,

    /// A header line of the cube file could not be parsed.
    #[error("Invalid header on line {0}")]
    InvalidHeader(usize),

    /// The cube file describes a 1D lookup table.
    #[error("1D LUT cube files aren't supported")]
    Unsupported1D,

    /// A data line of the cube file holds a value that is not a number.
    #[error("Not a number on line {0}")]
    NotANumber(usize),

    /// A data line of the cube file does not hold one value per channel.
    #[error("Wrong number of colors on line {0}")]
    WrongColorCount(usize),

    /// The table name cannot be written as a cube title.
    #[error("Title can't contain quotes or line breaks: {0:?}")]
    InvalidTitle(String),

    /// The Hald image is not square.
    #[error("Hald image should be a square")]
    HaldNotSquare,

    /// The side of the Hald image is not the cube of a supported level.
    #[error("Can't detect hald size")]
    HaldSize,

    /// Error to create the lookup table.
    #[error("Failed to create the lookup table. {0}")]
    LutCreationError(#[from] chromalut_grid::LutError),

    /// Error to decode the image.
    #[error("Failed to decode the image. {0}")]
    ImageDecodeError(#[from] image::ImageError),
}
