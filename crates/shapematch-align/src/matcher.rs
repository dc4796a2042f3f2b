use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shapematch_algebra::Vec2;
use shapematch_seq::{factorial, index_permutations, SeqView};

use crate::compare::chain_error;
use crate::error::MatchError;
use crate::similarity::{coincident, Similarity, DEFAULT_DEGENERATE_EPS};

/// Fewest points from which a rotation and scale can be inferred.
pub const MIN_POINTS: usize = 2;

/// Tunables for [`match_points_with`].
#[derive(Debug, Clone)]
pub struct MatchParams {
    /// Anchor pairs closer than this fraction of their magnitude are treated as coincident.
    pub degenerate_eps: f64,
    /// Cooperative cancellation flag, checked before each ordering is scored.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            degenerate_eps: DEFAULT_DEGENERATE_EPS,
            cancel: None,
        }
    }
}

impl MatchParams {
    /// Abort the search with [`MatchError::Cancelled`] once `flag` is set.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Override the coincident-anchor threshold.
    pub fn with_degenerate_eps(mut self, eps: f64) -> Self {
        self.degenerate_eps = eps;
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Best correspondence between a template and a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Sum of distances between matched target points and their expectations.
    pub error: f64,
    /// `expectations[i]` is where template point `i` lands under the winning transform.
    pub expectations: Vec<Vec2>,
    /// `correspondence[i]` is the index in the original target of the point matched to template
    /// point `i`. Draw `expectations[i]` next to `target[correspondence[i]]`.
    pub correspondence: Vec<usize>,
    /// The winning transform, from template space into target space.
    pub similarity: Similarity,
}

/// Find the ordering of `target` that best fits `template` under a similarity transform.
///
/// Equivalent to [`match_points_with`] with [`MatchParams::default`].
///
/// ```
/// use shapematch_algebra::Vec2;
/// use shapematch_align::match_points;
///
/// let template = [Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(0.0, 2.0)];
/// // same triangle shifted by (1, 1) and listed in a different order
/// let target = [Vec2::new(1.0, 3.0), Vec2::new(1.0, 1.0), Vec2::new(5.0, 1.0)];
///
/// let result = match_points(&template, &target)?;
/// assert_eq!(result.correspondence, vec![1, 2, 0]);
/// assert!(result.error < 1e-9);
/// # Ok::<(), shapematch_align::MatchError>(())
/// ```
pub fn match_points<T, U>(template: &T, target: &U) -> Result<MatchResult, MatchError>
where
    T: SeqView<Item = Vec2> + ?Sized,
    U: SeqView<Item = Vec2> + ?Sized,
{
    match_points_with(template, target, &MatchParams::default())
}

/// Exhaustive correspondence search.
///
/// Every permutation `perm` of `0..n` is tried, in Heap's order starting with the identity, by
/// viewing the target as `target[perm[0]], target[perm[1]], ...` and scoring that ordering with
/// the transform anchored at its first two points. The permutation with the strictly smallest
/// error wins, so among equal errors the first one encountered is kept. Orderings whose anchors
/// coincide, or whose error is NaN, are skipped. Cost is `O(n · n!)`; intended for a handful of points.
///
/// # Arguments
///
/// * `template` - Reference points, at least [`MIN_POINTS`].
/// * `target` - Observed points in arbitrary order, same length as `template`.
/// * `params` - Degeneracy threshold and optional cancellation flag.
///
/// # Errors
///
/// * [`MatchError::MismatchedLengths`] if the sequences differ in length.
/// * [`MatchError::InsufficientPoints`] if fewer than [`MIN_POINTS`] points are given.
/// * [`MatchError::DegenerateTemplate`] if the first two template points coincide.
/// * [`MatchError::DegenerateTarget`] if no ordering has two distinct anchors and a finite error.
/// * [`MatchError::Cancelled`] if the cancellation flag was raised.
pub fn match_points_with<T, U>(
    template: &T,
    target: &U,
    params: &MatchParams,
) -> Result<MatchResult, MatchError>
where
    T: SeqView<Item = Vec2> + ?Sized,
    U: SeqView<Item = Vec2> + ?Sized,
{
    let len = template.len();
    if len != target.len() {
        return Err(MatchError::MismatchedLengths {
            template_len: len,
            target_len: target.len(),
        });
    }
    if len < MIN_POINTS {
        return Err(MatchError::InsufficientPoints {
            required: MIN_POINTS,
            actual: len,
        });
    }

    // the template anchors are the same for every ordering, so check them once
    let template_degenerate = match (template.at(0), template.at(1)) {
        (Some(a), Some(b)) => coincident(a, b, params.degenerate_eps),
        _ => true,
    };
    if template_degenerate {
        return Err(MatchError::DegenerateTemplate);
    }

    log::debug!(
        "Matching {} points over {:?} orderings",
        len,
        factorial(len)
    );
    let now = std::time::Instant::now();

    let mut best: Option<(f64, Similarity, Vec<usize>)> = None;
    let mut evaluated = 0;
    let mut skipped = 0;

    let mut perms = index_permutations(len);
    while let Some(perm) = perms.advance() {
        if params.is_cancelled() {
            log::debug!("Matching cancelled after {} orderings", evaluated);
            return Err(MatchError::Cancelled { evaluated });
        }

        let candidate = target.remapped(perm)?;
        evaluated += 1;

        let (error, similarity) = match chain_error(template, &candidate, params.degenerate_eps) {
            Ok(scored) => scored,
            Err(MatchError::DegenerateAnchors { .. }) => {
                log::trace!("Skipping ordering {:?}: coincident anchors", perm);
                skipped += 1;
                continue;
            }
            Err(err) => return Err(err),
        };

        if error.is_nan() {
            skipped += 1;
            continue;
        }

        let improved = best
            .as_ref()
            .map_or(true, |(best_error, _, _)| error < *best_error);
        if improved {
            log::trace!("New best ordering {:?} with error {}", perm, error);
            best = Some((error, similarity, perm.to_vec()));
        }
    }

    let Some((error, similarity, correspondence)) = best else {
        return Err(MatchError::DegenerateTarget);
    };

    log::debug!(
        "Best correspondence {:?} with error {} ({} orderings, {} skipped) in {:?}",
        correspondence,
        error,
        evaluated,
        skipped,
        now.elapsed()
    );

    Ok(MatchResult {
        error,
        expectations: template.view_iter().map(|p| similarity.apply(p)).collect(),
        correspondence,
        similarity,
    })
}
