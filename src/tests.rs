use crate::*;
use image::{Rgba, RgbaImage};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const POSES: [Rgba<u8>; 3] = [
    Rgba([255, 0, 0, 255]),
    Rgba([0, 160, 0, 255]),
    Rgba([0, 0, 255, 128]),
];

/// A sheet of `width` pixels wide poses, each filled with one of `POSES`.
fn sprite_sheet(width: u32) -> RgbaImage {
    RgbaImage::from_fn(width, width * 3, |_, y| POSES[(y / width) as usize])
}

fn write_image(dir: &Path, name: &str, image: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).unwrap();
    path
}

fn sprite_folder(valid: &[&str], invalid: &[&str]) -> TempDir {
    let dir = tempdir().unwrap();
    for name in valid {
        write_image(dir.path(), name, &sprite_sheet(8));
    }
    for name in invalid {
        write_image(dir.path(), name, &RgbaImage::new(8, 16));
    }
    dir
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn decode_apng(path: &Path) -> Vec<Vec<u8>> {
    let file = BufReader::new(File::open(path).unwrap());
    let mut reader = png::Decoder::new(file).read_info().unwrap();
    let num_frames = reader.info().animation_control.unwrap().num_frames;
    let mut frames = Vec::new();
    for _ in 0..num_frames {
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        frames.push(buf);
    }
    frames
}

fn decode_gif(path: &Path) -> Vec<Vec<u8>> {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::RGBA);
    let mut decoder = options
        .read_info(BufReader::new(File::open(path).unwrap()))
        .unwrap();
    let mut frames = Vec::new();
    while let Some(frame) = decoder.read_next_frame().unwrap() {
        frames.push(frame.buffer.to_vec());
    }
    frames
}

fn solid(color: Rgba<u8>, width: u32) -> Vec<u8> {
    RgbaImage::from_pixel(width, width, color).into_raw()
}

#[test]
fn convert_folder() {
    let dir = sprite_folder(&["a.png", "b.png", "c.png"], &["flat.png", "short.png"]);

    let summary = run(&Config::new(dir.path())).unwrap();
    assert_eq!(
        summary,
        Summary {
            converted: 3,
            skipped: 2
        }
    );

    assert_eq!(file_names(&dir.path().join("PNG")), vec!["a.png", "b.png", "c.png"]);
    assert_eq!(file_names(&dir.path().join("GIF")), vec!["a.gif", "b.gif", "c.gif"]);
}

#[test]
fn apng_round_trip() {
    let dir = sprite_folder(&["box.png"], &[]);
    run(&Config::new(dir.path()).with_formats(OutputFormats::PNG)).unwrap();

    let frames = decode_apng(&dir.path().join("PNG").join("box.png"));
    let expected: Vec<_> = BOUNCE_SEQUENCE.iter().map(|&i| solid(POSES[i], 8)).collect();
    assert_eq!(frames, expected);
}

#[test]
fn gif_round_trip() {
    let dir = sprite_folder(&["box.png"], &[]);
    run(&Config::new(dir.path()).with_formats(OutputFormats::GIF)).unwrap();

    let frames = decode_gif(&dir.path().join("GIF").join("box.gif"));
    assert_eq!(frames.len(), 4);
    for (frame, &band) in frames.iter().zip(BOUNCE_SEQUENCE.iter()) {
        // GIF alpha is all or nothing.
        let mut color = POSES[band];
        color[3] = 255;
        assert_eq!(frame, &solid(color, 8));
    }
}

#[test]
fn png_only() {
    let dir = sprite_folder(&["box.png"], &[]);
    run(&Config::new(dir.path()).with_formats(OutputFormats::PNG)).unwrap();
    assert!(dir.path().join("PNG").join("box.png").is_file());
    assert!(!dir.path().join("GIF").exists());
}

#[test]
fn gif_only() {
    let dir = sprite_folder(&["box.png"], &[]);
    run(&Config::new(dir.path()).with_formats(OutputFormats::GIF)).unwrap();
    assert!(dir.path().join("GIF").join("box.gif").is_file());
    assert!(!dir.path().join("PNG").exists());
}

#[test]
fn single_file_to_output_folder() {
    let dir = sprite_folder(&["one.png", "two.png"], &[]);
    let out = dir.path().join("nested").join("out");

    let config = Config::new(dir.path().join("two.png")).with_output(&out);
    let summary = run(&config).unwrap();
    assert_eq!(summary.converted, 1);

    assert_eq!(file_names(&out.join("PNG")), vec!["two.png"]);
    assert_eq!(file_names(&out.join("GIF")), vec!["two.gif"]);
    assert!(!dir.path().join("PNG").exists());
}

#[test]
fn renamed_sheet() {
    let dir = tempdir().unwrap();
    let png = write_image(dir.path(), "box.png", &sprite_sheet(8));
    let sheet = dir.path().join("box.sprite");
    fs::rename(&png, &sheet).unwrap();

    let summary = run(&Config::new(&sheet)).unwrap();
    assert_eq!(summary.converted, 1);

    assert_eq!(file_names(&dir.path().join("PNG")), vec!["box.png"]);
    assert_eq!(file_names(&dir.path().join("GIF")), vec!["box.gif"]);
}

#[test]
fn invalid_file_only() {
    let dir = sprite_folder(&[], &["bad.png"]);
    let summary = run(&Config::new(dir.path().join("bad.png"))).unwrap();
    assert_eq!(
        summary,
        Summary {
            converted: 0,
            skipped: 1
        }
    );
    assert!(file_names(&dir.path().join("PNG")).is_empty());
    assert!(file_names(&dir.path().join("GIF")).is_empty());
}

#[test]
fn overwrite_existing_output() {
    let dir = sprite_folder(&["box.png"], &[]);
    fs::create_dir(dir.path().join("PNG")).unwrap();
    let target = dir.path().join("PNG").join("box.png");
    fs::write(&target, b"stale").unwrap();

    run(&Config::new(dir.path()).with_formats(OutputFormats::PNG)).unwrap();
    assert_eq!(decode_apng(&target).len(), 4);
}

#[test]
fn corrupt_file_aborts_run() {
    let dir = sprite_folder(&["b.png"], &[]);
    fs::write(dir.path().join("a.png"), b"not a png").unwrap();

    let err = run(&Config::new(dir.path())).unwrap_err();
    assert!(matches!(err, BoxDanceError::Decode(_)));
    assert!(!err.is_skippable());
    // `a.png` sorts first, so nothing was converted.
    assert!(file_names(&dir.path().join("PNG")).is_empty());
}

#[test]
fn missing_input() {
    let dir = tempdir().unwrap();
    let err = run(&Config::new(dir.path().join("missing"))).unwrap_err();
    assert!(matches!(err, BoxDanceError::Usage(_)));
    assert!(file_names(dir.path()).is_empty());
}
