use rayon::prelude::*;

use chromalut_grid::{GridSize, LutError};

/// Controls how the points of an output grid are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process every `z` slice in parallel.
    ///
    /// Each task fills a contiguous block of `x * y` points.
    #[default]
    ParallelSlices,

    /// Use the global Rayon thread pool to process every row of `x` points in parallel.
    ///
    /// Finer grained than [`ExecutionStrategy::ParallelSlices`], useful for grids
    /// with few slices.
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small tables, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

/// Compute every point of an output grid.
///
/// `f` receives the `[x, y, z]` index of a point and its output slot of
/// `channels` values. Slots never overlap, so points are computed independently
/// according to `strategy`.
///
/// # Errors
///
/// * [`LutError::ShapeMismatch`] if `dst` does not hold `size` points of `channels` values.
/// * [`LutError::Execution`] if a fixed thread pool cannot be built.
pub fn par_iter_points(
    dst: &mut [f32],
    size: GridSize,
    channels: usize,
    strategy: ExecutionStrategy,
    f: impl Fn([usize; 3], &mut [f32]) + Send + Sync,
) -> Result<(), LutError> {
    let expected = size.num_points() * channels;
    if dst.len() != expected {
        return Err(LutError::ShapeMismatch(dst.len(), expected));
    }
    if expected == 0 {
        return Ok(());
    }

    let row_len = size.x * channels;
    let fill_row = |row: usize, dst_row: &mut [f32]| {
        let (y, z) = (row % size.y, row / size.y);
        dst_row
            .chunks_exact_mut(channels)
            .enumerate()
            .for_each(|(x, point)| f([x, y, z], point));
    };
    let fill_slices = |dst: &mut [f32]| {
        dst.par_chunks_exact_mut(row_len * size.y)
            .enumerate()
            .for_each(|(z, slice)| {
                slice
                    .chunks_exact_mut(row_len)
                    .enumerate()
                    .for_each(|(y, dst_row)| fill_row(z * size.y + y, dst_row));
            });
    };

    match strategy {
        ExecutionStrategy::Serial => {
            dst.chunks_exact_mut(row_len)
                .enumerate()
                .for_each(|(row, dst_row)| fill_row(row, dst_row));
        }
        ExecutionStrategy::ParallelRows => {
            dst.par_chunks_exact_mut(row_len)
                .enumerate()
                .for_each(|(row, dst_row)| fill_row(row, dst_row));
        }
        ExecutionStrategy::ParallelSlices => fill_slices(dst),
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(LutError::Execution(format!(
                    "thread count must be > 0, got {n}"
                )));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| LutError::Execution(e.to_string()))?;

            pool.install(|| fill_slices(dst));
        }
    }
    Ok(())
}

/// Minimum number of output points for which computing them serially is worth a warning.
pub(crate) fn slow_path_threshold(cubic: bool) -> usize {
    if cubic {
        216
    } else {
        1000
    }
}

/// Warn when a large table is about to be resampled without the parallel batch path.
pub(crate) fn warn_if_serial(points: usize, cubic: bool, strategy: ExecutionStrategy) {
    if strategy == ExecutionStrategy::Serial && points >= slow_path_threshold(cubic) {
        log::warn!(
            "Resampling {} points serially, this may be slow; consider a parallel execution strategy",
            points
        );
    }
}
