//! GIF output.
//!
//! Every frame gets its own palette (a local color table). The frames are
//! quantized independently, so a pose with few colors is stored exactly.

use crate::{Animation, BoxDanceError, Result};
use gif::{DisposalMethod, Encoder, Frame, Repeat};
use std::io::Write;

/// Display time of one frame in centiseconds.
///
/// GIF cannot store the one-sixth second used for APNG, so the next larger
/// value is used. The GIF plays slightly slower.
pub const GIF_FRAME_DELAY: u16 = 17;

/// NeuQuant sampling speed used when a frame has more than 256 colors.
/// `1` is the best quality, `30` the fastest.
pub const GIF_QUANTIZE_SPEED: i32 = 10;

pub(crate) fn encode<W: Write>(anim: &Animation, output: W) -> Result<()> {
    let (width, height) = anim.size();
    let (w, h) = match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => return Err(BoxDanceError::TooLarge { width, height }),
    };

    // The encoder still writes a placeholder global table; frames only use
    // the local tables built by `Frame::from_rgba_speed`.
    let mut encoder = Encoder::new(output, w, h, &[])?;
    encoder.set_repeat(Repeat::Infinite)?;

    for image in anim.frames() {
        let mut pixels = image.as_raw().clone();
        let mut frame = Frame::from_rgba_speed(w, h, &mut pixels, GIF_QUANTIZE_SPEED);
        frame.delay = GIF_FRAME_DELAY;
        // Clear to transparent so a pose does not show through the next one.
        frame.dispose = DisposalMethod::Background;
        encoder.write_frame(&frame)?;
    }
    // Writes the trailer.
    encoder.into_inner()?;
    Ok(())
}
