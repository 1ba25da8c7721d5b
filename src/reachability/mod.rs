//! Reachability engine: mark-and-sweep over asset files.
//!
//! 1. [`ReferenceIndex::build`] registers every file under the asset roots as
//!    deletable.
//! 2. [`ReferenceIndex::scan`] reads every document under the guide root once,
//!    clearing the mark of each file whose key occurs literally in some
//!    document and collecting assessment task ids along the way. It consumes
//!    the index and returns a [`MarkedIndex`].
//! 3. [`MarkedIndex::sweep`] deletes what is still deletable.
//!
//! Only a `MarkedIndex` can be swept, so no deletion can happen before the
//! whole guide tree has been read. All state is owned by the values of one
//! run; nothing is shared between runs.

mod assessment;
mod index;
mod scan;
mod sweep;

pub use assessment::{AssessmentIds, AssessmentTagMatcher};
pub use index::{FileRecord, Mark, ReferenceIndex};
pub use scan::{MarkedIndex, ScanOverlay, ScanResult};
