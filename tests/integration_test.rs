//! Integration tests for the conversion pipeline
//!
//! These tests run the selection resolver and output router against
//! synthetic decoded frames and real files on disk, covering the
//! end-to-end scenarios short of the HEIC decode itself.

extern crate std;

use std::fs;
use std::path::PathBuf;

use heickit::commands::info_command::render_report;
use heickit::convert::format::OutputFormat;
use heickit::convert::routing::{execute, route, Destination, OutputTarget};
use heickit::convert::selection::{resolve, SelectionSpec};
use heickit::heic::errors::HeicError;
use heickit::heic::frame::ImageFrame;

/// Build a small solid-color RGB frame for the given container index
fn test_frame(index: usize) -> ImageFrame {
    let width = 4u32;
    let height = 4u32;
    let shade = (index * 40) as u8;
    let pixels = vec![shade; width as usize * height as usize * 3];
    ImageFrame::new(index, width, height, pixels)
}

/// Fresh scratch directory for one test
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("heickit-it-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_template_selection_writes_expected_files() {
    let dir = scratch_dir("template");
    let frames: Vec<ImageFrame> = (0..3).map(test_frame).collect();

    let resolved = resolve(&SelectionSpec::Indices(vec![1, 2]), frames.len()).unwrap();
    let template = dir.join("out-%s.jpg").to_string_lossy().into_owned();
    let plan = route(&resolved, &Destination::Path(template)).unwrap();

    execute(&plan, &frames, OutputFormat::Jpg, 1.0).unwrap();

    let first = fs::read(dir.join("out-1.jpg")).unwrap();
    let second = fs::read(dir.join("out-2.jpg")).unwrap();

    // JPEG SOI marker
    std::assert_eq!(&first[..2], &[0xFF, 0xD8]);
    std::assert_eq!(&second[..2], &[0xFF, 0xD8]);
    std::assert!(!dir.join("out-0.jpg").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_all_images_to_stream_is_fatal() {
    let frames: Vec<ImageFrame> = (0..3).map(test_frame).collect();

    let resolved = resolve(&SelectionSpec::All, frames.len()).unwrap();
    let result = route(&resolved, &Destination::Stream);

    match result {
        Err(HeicError::MultiImageToStream { count }) => {
            std::assert_eq!(count, 3);
        }
        _ => std::panic!("expected MultiImageToStream"),
    }
}

#[test]
fn test_error_message_mentions_stream_limit() {
    let resolved = resolve(&SelectionSpec::All, 2).unwrap();
    let err = route(&resolved, &Destination::Stream).unwrap_err();

    let message = err.to_string();
    std::assert!(message.contains("standard output"));
}

#[test]
fn test_png_frame_output() {
    let dir = scratch_dir("png");
    let frames = vec![test_frame(0)];

    let resolved = resolve(&SelectionSpec::Indices(vec![0]), frames.len()).unwrap();
    let target = dir.join("image.png").to_string_lossy().into_owned();
    let plan = route(&resolved, &Destination::Path(target)).unwrap();

    execute(&plan, &frames, OutputFormat::Png, 1.0).unwrap();

    let bytes = fs::read(dir.join("image.png")).unwrap();
    // PNG signature
    std::assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_collision_safeguard_writes_distinct_files() {
    let dir = scratch_dir("collision");
    let frames: Vec<ImageFrame> = (0..2).map(test_frame).collect();

    let resolved = resolve(&SelectionSpec::All, frames.len()).unwrap();
    // Template without a placeholder: paths get index-prefixed
    let template = dir.join("photo.jpg").to_string_lossy().into_owned();
    let plan = route(&resolved, &Destination::Path(template)).unwrap();

    let paths: Vec<PathBuf> = plan
        .writes()
        .iter()
        .map(|w| match &w.target {
            OutputTarget::File(p) => p.clone(),
            OutputTarget::Stream => std::panic!("expected file target"),
        })
        .collect();
    std::assert_eq!(paths.len(), 2);
    std::assert_ne!(paths[0], paths[1]);

    execute(&plan, &frames, OutputFormat::Jpg, 0.9).unwrap();
    for path in &paths {
        std::assert!(path.exists(), "missing output {}", path.display());
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_failed_write_does_not_abort_the_batch() {
    let dir = scratch_dir("best-effort");
    let frames: Vec<ImageFrame> = (0..2).map(test_frame).collect();

    // Target inside a directory that does not exist fails to write
    let missing = dir.join("no-such-dir").join("out-%s.jpg");
    let template = missing.to_string_lossy().into_owned();
    let resolved = resolve(&SelectionSpec::Indices(vec![0]), frames.len()).unwrap();
    let bad_plan = route(&resolved, &Destination::Path(template)).unwrap();
    std::assert!(execute(&bad_plan, &frames, OutputFormat::Jpg, 1.0).is_err());

    // The failure above must not poison a later, valid batch
    let resolved = resolve(&SelectionSpec::All, frames.len()).unwrap();
    let good = dir.join("out-%s.jpg").to_string_lossy().into_owned();
    let plan = route(&resolved, &Destination::Path(good)).unwrap();
    execute(&plan, &frames, OutputFormat::Jpg, 1.0).unwrap();

    std::assert!(dir.join("out-0.jpg").exists());
    std::assert!(dir.join("out-1.jpg").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_count_report_is_the_bare_integer() {
    let frames: Vec<ImageFrame> = (0..3).map(test_frame).collect();

    // println! appends the trailing newline, so the rendered report
    // must be exactly the digits
    std::assert_eq!(render_report(&frames, true), "3");

    let empty: Vec<ImageFrame> = Vec::new();
    std::assert_eq!(render_report(&empty, true), "0");
}

#[test]
fn test_full_report_lists_count_and_dimensions() {
    let frames: Vec<ImageFrame> = (0..2).map(test_frame).collect();

    std::assert_eq!(render_report(&frames, false), "images: 2\n0: 4x4\n1: 4x4");
}

#[test]
fn test_duplicate_selection_writes_each_request() {
    let dir = scratch_dir("duplicates");
    let frames: Vec<ImageFrame> = (0..2).map(test_frame).collect();

    // The same index twice resolves to two planned writes
    let resolved = resolve(&SelectionSpec::Indices(vec![1, 1]), frames.len()).unwrap();
    std::assert_eq!(resolved.indices(), &[1, 1]);

    let template = dir.join("dup-%s.jpg").to_string_lossy().into_owned();
    let plan = route(&resolved, &Destination::Path(template)).unwrap();
    std::assert_eq!(plan.writes().len(), 2);

    execute(&plan, &frames, OutputFormat::Jpg, 1.0).unwrap();
    std::assert!(dir.join("dup-1.jpg").exists());

    let _ = fs::remove_dir_all(&dir);
}
