use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use chromalut_grid::{check_channels, Grid, GridSize};

use crate::error::IoError;

/// Settings read from the header of a cube file.
#[derive(Debug)]
struct CubeHeader {
    name: Option<String>,
    size: Option<GridSize>,
    channels: usize,
}

impl CubeHeader {
    /// Consume a header line. Returns `true` once the line starts the data.
    fn parse_line(&mut self, line: &str, line_no: usize) -> Result<bool, IoError> {
        if line.starts_with("TITLE \"") {
            self.name = line.split('"').nth(1).map(String::from);
            return Ok(false);
        }
        if let Some(rest) = line.strip_prefix("LUT_3D_SIZE ") {
            let dims = rest
                .split_whitespace()
                .map(str::parse::<usize>)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| IoError::InvalidHeader(line_no))?;
            self.size = match dims.as_slice() {
                [n] => Some(GridSize::cube(*n)),
                [x, y, z] => Some(GridSize::from([*x, *y, *z])),
                _ => return Err(IoError::InvalidHeader(line_no)),
            };
            return Ok(false);
        }
        if let Some(rest) = line.strip_prefix("CHANNELS ") {
            self.channels = rest
                .trim()
                .parse()
                .map_err(|_| IoError::InvalidHeader(line_no))?;
            return Ok(false);
        }
        if line.starts_with("LUT_1D_SIZE ") {
            return Err(IoError::Unsupported1D);
        }

        Ok(line
            .split_whitespace()
            .next()
            .is_some_and(|token| token.parse::<f32>().is_ok()))
    }
}

/// Parse one data line of a cube file into `table`.
fn parse_values(
    line: &str,
    line_no: usize,
    channels: usize,
    table: &mut Vec<f32>,
) -> Result<(), IoError> {
    let start = table.len();
    for token in line.split_whitespace() {
        let value = token
            .parse::<f32>()
            .map_err(|_| IoError::NotANumber(line_no))?;
        table.push(value);
    }
    if table.len() - start != channels {
        return Err(IoError::WrongColorCount(line_no));
    }
    Ok(())
}

/// Read a lookup table in the cube format.
///
/// The header may set a title with `TITLE "..."`, the size with `LUT_3D_SIZE n` or
/// `LUT_3D_SIZE x y z`, and the number of channels with `CHANNELS c` (3 by default).
/// Other header lines are ignored. The data starts at the first line beginning with
/// a number and holds one point per line, with the `x` axis varying fastest. Empty
/// lines and lines starting with `#` are skipped in the data.
///
/// # Arguments
///
/// * `reader` - The source of the cube text.
///
/// # Returns
///
/// The lookup table, named after the title when present.
///
/// # Example
///
/// ```
/// use chromalut_grid::GridSize;
/// use chromalut_io::cube::load_cube;
///
/// let text = "TITLE \"Demo\"\nLUT_3D_SIZE 2\n\n\
///             0 0 0\n1 0 0\n0 1 0\n1 1 0\n0 0 1\n1 0 1\n0 1 1\n1 1 1\n";
/// let lut = load_cube(text.as_bytes()).unwrap();
///
/// assert_eq!(lut.size(), GridSize::cube(2));
/// assert_eq!(lut.name(), Some("Demo"));
/// assert_eq!(lut.point(1, 0, 1), &[1.0, 0.0, 1.0]);
/// ```
///
/// # Errors
///
/// Line numbers in errors start at 1.
///
/// * [`IoError::MissingSize`] if the header has no size.
/// * [`IoError::Unsupported1D`] if the file describes a 1D table.
/// * [`IoError::NotANumber`] or [`IoError::WrongColorCount`] for a malformed data line.
/// * [`IoError::LutCreationError`] if the size, channels or number of points are invalid.
pub fn load_cube(reader: impl BufRead) -> Result<Grid, IoError> {
    let mut header = CubeHeader {
        name: None,
        size: None,
        channels: 3,
    };
    let mut lines = reader.lines().enumerate();

    let mut first_data = None;
    for (i, line) in lines.by_ref() {
        let line = line?;
        if header.parse_line(line.trim(), i + 1)? {
            first_data = Some((i, line));
            break;
        }
    }

    let size = header.size.ok_or(IoError::MissingSize)?;
    let channels = header.channels;
    size.check()?;
    check_channels(channels)?;

    let mut table = Vec::with_capacity(size.num_points() * channels);
    if let Some((i, line)) = first_data {
        parse_values(line.trim(), i + 1, channels, &mut table)?;
    }
    for (i, line) in lines {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        parse_values(line, i + 1, channels, &mut table)?;
    }

    log::debug!(
        "loaded {} cube with {} channels ({} values)",
        size,
        channels,
        table.len()
    );

    let grid = Grid::new(size, channels, table)?;
    Ok(match header.name {
        Some(name) => grid.with_name(name),
        None => grid,
    })
}

/// Read a lookup table from a cube file.
///
/// See [`load_cube`] for the format.
///
/// # Arguments
///
/// * `file_path` - The path to the cube file.
pub fn load_cube_file(file_path: impl AsRef<Path>) -> Result<Grid, IoError> {
    let file = File::open(file_path)?;
    load_cube(BufReader::new(file))
}

/// Write a lookup table in the cube format.
///
/// The output is read back by [`load_cube`] into the same table: the title is written
/// when the table has a name and the values use the shortest exact representation.
///
/// # Errors
///
/// * [`IoError::InvalidTitle`] if the name holds a quote or a line break, which the
///   `TITLE` line cannot represent. Nothing is written in that case.
/// * [`IoError::FileError`] if writing fails.
///
/// # Arguments
///
/// * `grid` - The lookup table to write.
/// * `writer` - The destination of the cube text.
pub fn write_cube(grid: &Grid, mut writer: impl Write) -> Result<(), IoError> {
    if let Some(name) = grid.name() {
        if name.contains(['"', '\n', '\r']) {
            return Err(IoError::InvalidTitle(name.to_string()));
        }
        writeln!(writer, "TITLE \"{name}\"")?;
    }

    let size = grid.size();
    if size.x == size.y && size.y == size.z {
        writeln!(writer, "LUT_3D_SIZE {}", size.x)?;
    } else {
        writeln!(writer, "LUT_3D_SIZE {} {} {}", size.x, size.y, size.z)?;
    }
    if grid.channels() != 3 {
        writeln!(writer, "CHANNELS {}", grid.channels())?;
    }
    writeln!(writer)?;

    for point in grid.points() {
        let mut values = point.iter();
        if let Some(first) = values.next() {
            write!(writer, "{first}")?;
        }
        for value in values {
            write!(writer, " {value}")?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a lookup table to a cube file.
///
/// See [`write_cube`] for the format.
///
/// # Arguments
///
/// * `grid` - The lookup table to write.
/// * `file_path` - The path to the cube file. Existing files are overwritten.
pub fn write_cube_file(grid: &Grid, file_path: impl AsRef<Path>) -> Result<(), IoError> {
    let file = File::create(file_path)?;
    write_cube(grid, BufWriter::new(file))
}
