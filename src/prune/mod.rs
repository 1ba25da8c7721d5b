//! Manifest-driven pruning of content pages and assessment definitions.
//!
//! Unlike the reachability engine these decide survival from manifests
//! alone: a content page survives when a manifest lists it, an assessment
//! survives when some document tags its task id.

mod assessments;
mod content;

pub use assessments::{
    plan_assessments, plan_assessments_v2, plan_assessments_v3, prune_assessments, AssessmentPlan,
};
pub use content::{prune_content, prune_content_v2, prune_content_v3};
