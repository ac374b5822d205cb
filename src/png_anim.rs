//! Animated PNG output.

use crate::{Animation, Result};
use png::{BitDepth, BlendOp, ColorType, DisposeOp, Encoder};
use std::io::Write;

/// Display time of one frame in seconds, as `(numerator, denominator)`.
///
/// This is one sixth of a second. APNG stores the delay as a fraction so the
/// value is exact.
pub const APNG_FRAME_DELAY: (u16, u16) = (1, 6);

/// Number of times the animation plays. `0` loops forever.
pub const APNG_NUM_PLAYS: u32 = 0;

pub(crate) fn encode<W: Write>(anim: &Animation, output: W) -> Result<()> {
    let (width, height) = anim.size();
    let mut encoder = Encoder::new(output, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_animated(anim.num_frames(), APNG_NUM_PLAYS)?;
    // Applies to every frame written afterwards.
    encoder.set_frame_delay(APNG_FRAME_DELAY.0, APNG_FRAME_DELAY.1)?;
    encoder.set_blend_op(BlendOp::Source)?;
    encoder.set_dispose_op(DisposeOp::None)?;

    let mut writer = encoder.write_header()?;
    for frame in anim.frames() {
        writer.write_image_data(frame.as_raw())?;
    }
    writer.finish()?;
    Ok(())
}
