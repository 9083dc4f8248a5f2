//! Export: serializes a frame sequence to a PNG still and a looping GIF.
//!
//! Write failures are fatal and propagate to the caller with path context.
//! There are no retries and no partial-failure recovery.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use log::info;

use crate::anim::sequencer::{FrameSequence, RenderConfig};
use crate::raster::PixelBuffer;

/// Write both output artifacts: the final-state still and the animation.
pub fn write_outputs(seq: &FrameSequence, config: &RenderConfig) -> Result<()> {
    save_still(&seq.terminal, &config.still_path)?;
    save_animation(seq, &config.anim_path, config.frame_delay_ms)?;
    Ok(())
}

/// Write a single frame as a PNG still.
pub fn save_still(frame: &PixelBuffer, path: &Path) -> Result<()> {
    image::save_buffer(
        path,
        &frame.to_rgb_bytes(),
        frame.width(),
        frame.height(),
        image::ColorType::Rgb8,
    )
    .with_context(|| format!("failed to write still image {}", path.display()))?;

    info!("saved final state image to {}", path.display());
    Ok(())
}

/// Write the frame sequence as an infinitely looping GIF.
///
/// The terminal frame is encoded first as the anchor, followed by the
/// per-timestep frames. An empty path therefore still yields a one-frame
/// animation.
pub fn save_animation(seq: &FrameSequence, path: &Path, frame_delay_ms: u32) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create animation file {}", path.display()))?;

    let mut encoder = GifEncoder::new(file);
    encoder
        .set_repeat(Repeat::Infinite)
        .with_context(|| format!("failed to set loop mode on {}", path.display()))?;

    encode_frame(&mut encoder, &seq.terminal, frame_delay_ms, path)?;
    for step in &seq.steps {
        encode_frame(&mut encoder, step, frame_delay_ms, path)?;
    }

    info!(
        "saved path animation ({} frames) to {}",
        seq.len() + 1,
        path.display()
    );
    Ok(())
}

fn encode_frame(
    encoder: &mut GifEncoder<File>,
    frame: &PixelBuffer,
    frame_delay_ms: u32,
    path: &Path,
) -> Result<()> {
    let image = RgbaImage::from_raw(frame.width(), frame.height(), frame.to_rgba_bytes())
        .with_context(|| format!("frame buffer size mismatch for {}", path.display()))?;
    let delay = Delay::from_numer_denom_ms(frame_delay_ms, 1);
    encoder
        .encode_frame(Frame::from_parts(image, 0, 0, delay))
        .with_context(|| format!("failed to encode animation frame for {}", path.display()))?;
    Ok(())
}
