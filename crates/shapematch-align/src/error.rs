use shapematch_seq::ViewError;

/// Error types for similarity estimation and correspondence matching.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MatchError {
    /// Template and target must contain the same number of points.
    #[error("Mismatched point counts: template ({template_len}) != target ({target_len})")]
    MismatchedLengths {
        /// Number of template points
        template_len: usize,
        /// Number of target points
        target_len: usize,
    },

    /// Too few points to infer a rotation and scale.
    #[error("Matching requires at least {required} points, got {actual}")]
    InsufficientPoints {
        /// Minimum number of points
        required: usize,
        /// Number of points provided
        actual: usize,
    },

    /// The two anchor points of a sequence coincide, so no transform is defined.
    #[error("Anchor points coincide (edge length {edge_length})")]
    DegenerateAnchors {
        /// Distance between the two anchors
        edge_length: f64,
    },

    /// The first two template points coincide.
    #[error("The first two template points coincide")]
    DegenerateTemplate,

    /// Every candidate ordering of the target had coincident anchors or a NaN error.
    #[error("No ordering of the target has two distinct anchor points and a finite error")]
    DegenerateTarget,

    /// The search was cancelled before it completed.
    #[error("Matching cancelled after {evaluated} orderings")]
    Cancelled {
        /// Number of orderings scored before cancellation
        evaluated: usize,
    },

    /// Failed to build a view over the target.
    #[error(transparent)]
    View(#[from] ViewError),
}
