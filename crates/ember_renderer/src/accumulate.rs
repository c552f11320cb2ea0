//! Temporal accumulation (frame denoising).
//!
//! Blends each new raw frame into a history buffer with a
//! frame-count-weighted running mean: after N frames the history holds the
//! exact cumulative average, so variance falls off as 1/N. No spatial
//! filtering and no outlier rejection; resetting the history on camera or
//! scene changes is the caller's responsibility.

use rayon::prelude::*;

use crate::film::Film;

/// Blend `raw` into `history` as frame number `frame_count` (0-based).
///
/// `weight = 1 / (frame_count + 1)`; for frame 0 the history becomes an
/// exact copy of the raw frame. Must only run after the render pass that
/// produced `raw` has completed — the two buffers are distinct, so within
/// this pass pixels update independently and in any order.
pub fn accumulate(history: &mut Film, raw: &Film, frame_count: u32) {
    assert_eq!(history.width, raw.width);
    assert_eq!(history.height, raw.height);

    let weight = 1.0 / (frame_count + 1) as f32;

    history
        .pixels
        .par_iter_mut()
        .zip(raw.pixels.par_iter())
        .for_each(|(history_pixel, raw_pixel)| {
            *history_pixel = *history_pixel * (1.0 - weight) + *raw_pixel * weight;
        });
}
