use serde::{Deserialize, Serialize};
use shapematch_algebra::Vec2;
use shapematch_seq::SeqView;

use crate::error::MatchError;
use crate::similarity::{anchors, Similarity, DEFAULT_DEGENERATE_EPS};

/// Score of one target ordering against the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareResult {
    /// Sum of distances between each target point and its expectation. Zero is an exact fit.
    pub error: f64,
    /// Where each template point lands under the transform anchored at the target's first two
    /// points.
    pub expectations: Vec<Vec2>,
}

/// Score how well `target`, taken in the given order, fits `template` under the similarity
/// transform anchored at `target[0]` and `target[1]`.
///
/// Sequences shorter than two points carry no shape, so they score zero and the template is
/// returned as its own expectation.
///
/// # Arguments
///
/// * `template` - Reference points.
/// * `target` - Candidate ordering of the observed points.
///
/// # Errors
///
/// * [`MatchError::MismatchedLengths`] if the sequences differ in length.
/// * [`MatchError::DegenerateAnchors`] if either sequence has coincident first two points.
pub fn compare_chains<T, U>(template: &T, target: &U) -> Result<CompareResult, MatchError>
where
    T: SeqView<Item = Vec2> + ?Sized,
    U: SeqView<Item = Vec2> + ?Sized,
{
    if template.len() != target.len() {
        return Err(MatchError::MismatchedLengths {
            template_len: template.len(),
            target_len: target.len(),
        });
    }

    if template.len() < 2 {
        return Ok(CompareResult {
            error: 0.0,
            expectations: template.collect_vec(),
        });
    }

    let (error, similarity) = chain_error(template, target, DEFAULT_DEGENERATE_EPS)?;
    Ok(CompareResult {
        error,
        expectations: template.view_iter().map(|p| similarity.apply(p)).collect(),
    })
}

/// Error of `target` against `template` and the transform that produced it, without keeping
/// the expectations around. Both sequences must hold at least two points and have equal length.
pub(crate) fn chain_error<T, U>(
    template: &T,
    target: &U,
    degenerate_eps: f64,
) -> Result<(f64, Similarity), MatchError>
where
    T: SeqView<Item = Vec2> + ?Sized,
    U: SeqView<Item = Vec2> + ?Sized,
{
    let (first, second) = anchors(target)?;
    let similarity = Similarity::from_anchors(template, first, second, degenerate_eps)?;

    let error = template
        .view_iter()
        .zip(target.view_iter())
        .map(|(p, q)| q.distance(similarity.apply(p)))
        .sum();

    Ok((error, similarity))
}
