//! Output routing
//!
//! Maps a resolved selection onto concrete write destinations. Routing
//! decides up front whether the whole request is satisfiable (a stream
//! can hold at most one image payload) and produces a plan of literal
//! targets; execution then encodes and writes each planned item in
//! order.

use std::path::PathBuf;

use log::{error, info};

use crate::convert::format::OutputFormat;
use crate::convert::selection::ResolvedSelection;
use crate::heic::errors::{HeicError, HeicResult};
use crate::heic::frame::ImageFrame;
use crate::io::output;

/// Placeholder token substituted with an image index in path templates
pub const PLACEHOLDER: &str = "%s";

/// Where the user asked the output to go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The process's standard output stream
    Stream,
    /// A literal path or a template containing `%s`
    Path(String),
}

/// A concrete write target produced by routing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stream,
    File(PathBuf),
}

/// One planned write: which image goes to which target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedWrite {
    /// Container index of the source image
    pub image_index: usize,
    pub target: OutputTarget,
}

/// The full mapping from selected images to destinations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    writes: Vec<PlannedWrite>,
}

impl OutputPlan {
    /// Planned writes in execution order
    pub fn writes(&self) -> &[PlannedWrite] {
        &self.writes
    }
}

/// Substitute every placeholder occurrence with the image index
fn substitute(template: &str, index: usize) -> String {
    template.replace(PLACEHOLDER, &index.to_string())
}

/// Build the output plan for a resolved selection
///
/// # Arguments
/// * `resolved` - The selection, already validated against the count
/// * `destination` - Stream or path template from the CLI surface
///
/// # Returns
/// A plan with one entry per selected image, or `MultiImageToStream`
/// when more than one image was routed at the stream
pub fn route(resolved: &ResolvedSelection, destination: &Destination) -> HeicResult<OutputPlan> {
    let writes = match destination {
        Destination::Stream => {
            if !resolved.is_single() {
                return Err(HeicError::MultiImageToStream {
                    count: resolved.len(),
                });
            }
            vec![PlannedWrite {
                image_index: resolved.indices()[0],
                target: OutputTarget::Stream,
            }]
        }
        Destination::Path(template) => resolved
            .indices()
            .iter()
            .map(|&index| {
                let mut candidate = substitute(template, index);
                // Without a placeholder every image would land on the
                // same file, so disambiguate with an index prefix.
                if !resolved.is_single() && candidate == *template {
                    candidate = format!("{}-{}", index, candidate);
                }
                PlannedWrite {
                    image_index: index,
                    target: OutputTarget::File(PathBuf::from(candidate)),
                }
            })
            .collect(),
    };

    Ok(OutputPlan { writes })
}

/// Execute a plan by encoding and writing each item in order
///
/// Writes are best-effort per item: a failure is reported with its
/// target path and source index but does not abort or roll back the
/// other writes. The first failure is still returned so the process
/// can exit non-zero.
pub fn execute(
    plan: &OutputPlan,
    frames: &[ImageFrame],
    format: OutputFormat,
    quality: f32,
) -> HeicResult<()> {
    let mut first_failure: Option<HeicError> = None;

    for write in plan.writes() {
        let frame = &frames[write.image_index];

        let result = frame.encode(format, quality).and_then(|encoded| {
            match &write.target {
                OutputTarget::Stream => output::write_stream(&encoded).map_err(|e| {
                    HeicError::WriteFailed {
                        path: "-".to_string(),
                        image_index: write.image_index,
                        source: e,
                    }
                }),
                OutputTarget::File(path) => {
                    info!("Writing image {} to {}", write.image_index, path.display());
                    output::write_file(path, &encoded).map_err(|e| HeicError::WriteFailed {
                        path: path.display().to_string(),
                        image_index: write.image_index,
                        source: e,
                    })
                }
            }
        });

        if let Err(e) = result {
            error!("{}", e);
            if first_failure.is_none() {
                first_failure = Some(e);
            }
        }
    }

    match first_failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
