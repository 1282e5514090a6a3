//! Image selection resolution
//!
//! Interprets the user's requested image indices against the decoded
//! sequence length. Resolution is fail-closed: one out-of-range index
//! rejects the whole request before anything is written.

use crate::heic::errors::{HeicError, HeicResult};

/// The user's requested image indices, before resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionSpec {
    /// Every image in the container
    All,
    /// An explicit ordered list, duplicates permitted
    Indices(Vec<i64>),
}

impl SelectionSpec {
    /// Build a spec from the raw index list given on the CLI surface
    ///
    /// `[-1]` is the "all" sentinel. An absent or empty list falls
    /// back to the first image, keeping the spec's index list
    /// non-empty.
    pub fn from_requested(values: Option<&[i64]>) -> Self {
        match values {
            Some([-1]) => SelectionSpec::All,
            Some([]) | None => SelectionSpec::Indices(vec![0]),
            Some(indices) => SelectionSpec::Indices(indices.to_vec()),
        }
    }
}

/// A selection resolved against the actual image count
///
/// Every index is known to be in range. Order and duplicates are
/// preserved exactly as requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSelection {
    indices: Vec<usize>,
}

impl ResolvedSelection {
    /// The resolved indices in request order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of output images this selection produces
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Whether this selection targets exactly one output
    ///
    /// Intent is derived from the entry count, not from how the
    /// selection was written: "all" over a one-image container is
    /// still single.
    pub fn is_single(&self) -> bool {
        self.indices.len() == 1
    }
}

/// Resolve a selection spec against the decoded image count
///
/// # Arguments
/// * `spec` - The requested selection
/// * `total` - Number of images decoded from the container
///
/// # Returns
/// The resolved selection, or a `SelectionOutOfRange` error carrying
/// the first offending index
pub fn resolve(spec: &SelectionSpec, total: usize) -> HeicResult<ResolvedSelection> {
    match spec {
        SelectionSpec::All => Ok(ResolvedSelection {
            indices: (0..total).collect(),
        }),
        SelectionSpec::Indices(requested) => {
            let mut indices = Vec::with_capacity(requested.len());
            for &index in requested {
                if index < 0 || index as usize >= total {
                    return Err(HeicError::SelectionOutOfRange {
                        requested: index,
                        total,
                    });
                }
                indices.push(index as usize);
            }
            Ok(ResolvedSelection { indices })
        }
    }
}
