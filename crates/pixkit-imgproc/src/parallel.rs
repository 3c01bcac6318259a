use rayon::prelude::*;

/// Controls how per-pixel operations are executed.
///
/// Every operation in this crate is independent per pixel, so all strategies
/// produce the same samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// Image operations take this as the reference path and visit every pixel
    /// with [`pixkit_image::Image::get`] and [`pixkit_image::Image::set`].
    #[default]
    Serial,

    /// Use the global Rayon thread pool to process every pixel in parallel.
    ///
    /// This maximizes parallelism but may have overhead for small images.
    ParallelElements,

    /// Use the global Rayon thread pool to process rows in parallel.
    ///
    /// This is often more cache-friendly than [`ExecutionStrategy::ParallelElements`].
    ParallelRows,
}

/// Apply a function to every sample of a plane.
///
/// `row_len` is the number of samples per row and is used by
/// [`ExecutionStrategy::ParallelRows`] to split the work.
pub fn par_iter_samples(
    data: &mut [f32],
    row_len: usize,
    strategy: ExecutionStrategy,
    f: impl Fn(&mut f32) + Send + Sync,
) {
    match strategy {
        ExecutionStrategy::Serial => data.iter_mut().for_each(f),
        ExecutionStrategy::ParallelElements => data.par_iter_mut().for_each(f),
        ExecutionStrategy::ParallelRows => {
            if row_len == 0 {
                return;
            }
            data.par_chunks_mut(row_len)
                .for_each(|row| row.iter_mut().for_each(&f));
        }
    }
}

/// Apply a function to every pixel of three planes in place.
///
/// The function receives the samples of the same pixel in each plane.
pub fn par_iter_pixels3(
    planes: [&mut [f32]; 3],
    row_len: usize,
    strategy: ExecutionStrategy,
    f: impl Fn(&mut f32, &mut f32, &mut f32) + Send + Sync,
) {
    let [p0, p1, p2] = planes;
    match strategy {
        ExecutionStrategy::Serial => p0
            .iter_mut()
            .zip(p1.iter_mut())
            .zip(p2.iter_mut())
            .for_each(|((a, b), c)| f(a, b, c)),
        ExecutionStrategy::ParallelElements => p0
            .par_iter_mut()
            .zip(p1.par_iter_mut())
            .zip(p2.par_iter_mut())
            .for_each(|((a, b), c)| f(a, b, c)),
        ExecutionStrategy::ParallelRows => {
            if row_len == 0 {
                return;
            }
            p0.par_chunks_mut(row_len)
                .zip(p1.par_chunks_mut(row_len))
                .zip(p2.par_chunks_mut(row_len))
                .for_each(|((r0, r1), r2)| {
                    r0.iter_mut()
                        .zip(r1.iter_mut())
                        .zip(r2.iter_mut())
                        .for_each(|((a, b), c)| f(a, b, c));
                });
        }
    }
}

/// Reduce the pixels of three source planes into one destination plane.
pub fn par_iter_pixels3_to1(
    src: [&[f32]; 3],
    dst: &mut [f32],
    row_len: usize,
    strategy: ExecutionStrategy,
    f: impl Fn(f32, f32, f32) -> f32 + Send + Sync,
) {
    let [s0, s1, s2] = src;
    match strategy {
        ExecutionStrategy::Serial => dst
            .iter_mut()
            .zip(s0.iter())
            .zip(s1.iter())
            .zip(s2.iter())
            .for_each(|(((d, &a), &b), &c)| *d = f(a, b, c)),
        ExecutionStrategy::ParallelElements => dst
            .par_iter_mut()
            .zip(s0.par_iter())
            .zip(s1.par_iter())
            .zip(s2.par_iter())
            .for_each(|(((d, &a), &b), &c)| *d = f(a, b, c)),
        ExecutionStrategy::ParallelRows => {
            if row_len == 0 {
                return;
            }
            dst.par_chunks_mut(row_len)
                .zip(s0.par_chunks(row_len))
                .zip(s1.par_chunks(row_len))
                .zip(s2.par_chunks(row_len))
                .for_each(|(((d_row, r0), r1), r2)| {
                    d_row
                        .iter_mut()
                        .zip(r0.iter())
                        .zip(r1.iter())
                        .zip(r2.iter())
                        .for_each(|(((d, &a), &b), &c)| *d = f(a, b, c));
                });
        }
    }
}
