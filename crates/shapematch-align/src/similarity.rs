use serde::{Deserialize, Serialize};
use shapematch_algebra::Vec2;
use shapematch_seq::{Mapped, SeqView};

use crate::error::MatchError;

/// Anchors closer than this fraction of their magnitude are treated as coincident.
pub const DEFAULT_DEGENERATE_EPS: f64 = 1e-12;

/// Whether `a` and `b` are too close to anchor a transform.
///
/// The threshold is `eps` times the larger of the two anchor magnitudes, so the test does not
/// depend on the scale of the coordinates. Identical points and NaN coordinates always count as
/// coincident.
pub(crate) fn coincident(a: Vec2, b: Vec2, eps: f64) -> bool {
    let magnitude = a.length().max(b.length());
    // written so that NaN distances are rejected as well
    !(a.distance(b) > eps * magnitude)
}

/// Orientation-preserving similarity transform: rotation, uniform scale and translation.
///
/// A point `p` maps to `(p - origin) · transform + offset`, where `·` is complex multiplication
/// ([`Vec2::cross`]). `transform` therefore carries both the rotation angle and the scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Similarity {
    /// Rotate-and-scale operator, `(s·cos θ, s·sin θ)`.
    pub transform: Vec2,
    /// Point of the source frame that maps onto `offset`.
    pub origin: Vec2,
    /// Image of `origin`.
    pub offset: Vec2,
}

impl Similarity {
    /// The transform that leaves every point in place.
    pub const IDENTITY: Self = Self {
        transform: Vec2::X,
        origin: Vec2::ZERO,
        offset: Vec2::ZERO,
    };

    /// Estimate the unique similarity mapping `source_first → first` and `source_second → second`.
    ///
    /// # Arguments
    ///
    /// * `source_first` - First anchor in the source frame.
    /// * `source_second` - Second anchor in the source frame.
    /// * `first` - Where `source_first` must land.
    /// * `second` - Where `source_second` must land.
    /// * `degenerate_eps` - Minimum distance between the anchors of either pair, relative to the
    ///   larger anchor magnitude.
    ///
    /// # Errors
    ///
    /// [`MatchError::DegenerateAnchors`] if either anchor pair coincides.
    pub fn estimate(
        source_first: Vec2,
        source_second: Vec2,
        first: Vec2,
        second: Vec2,
        degenerate_eps: f64,
    ) -> Result<Self, MatchError> {
        for (a, b) in [(source_first, source_second), (first, second)] {
            if coincident(a, b, degenerate_eps) {
                return Err(MatchError::DegenerateAnchors {
                    edge_length: a.distance(b),
                });
            }
        }

        let b_source = source_second - source_first;
        let b_target = second - first;

        // undo the source edge angle, then turn onto the target edge angle
        let rot = b_target.cross(b_source.neg_argument()).normalized();
        let transform = rot.scale(b_target.length() / b_source.length());

        Ok(Self {
            transform,
            origin: source_first,
            offset: first,
        })
    }

    /// Estimate the similarity taking `template[0]` to `first` and `template[1]` to `second`.
    pub fn from_anchors<V>(
        template: &V,
        first: Vec2,
        second: Vec2,
        degenerate_eps: f64,
    ) -> Result<Self, MatchError>
    where
        V: SeqView<Item = Vec2> + ?Sized,
    {
        let (source_first, source_second) = anchors(template)?;
        Self::estimate(source_first, source_second, first, second, degenerate_eps)
    }

    /// Map a point through the transform.
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        (p - self.origin).cross(self.transform) + self.offset
    }

    /// Rotation angle in radians, in `[0, τ)`.
    pub fn rotation(&self) -> f64 {
        self.transform.angle()
    }

    /// Uniform scale factor.
    pub fn scale(&self) -> f64 {
        self.transform.length()
    }

    /// Translation `t` of the equivalent form `p ↦ p · transform + t`.
    pub fn translation(&self) -> Vec2 {
        self.offset - self.origin.cross(self.transform)
    }
}

/// The first two points of a sequence.
pub(crate) fn anchors<V>(points: &V) -> Result<(Vec2, Vec2), MatchError>
where
    V: SeqView<Item = Vec2> + ?Sized,
{
    match (points.at(0), points.at(1)) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(MatchError::InsufficientPoints {
            required: 2,
            actual: points.len(),
        }),
    }
}

/// Where every template point lands once `template[0]` is moved onto `first` and `template[1]`
/// onto `second`.
///
/// The returned view computes each expectation on access; nothing is copied. By construction
/// element 0 equals `first` and element 1 equals `second` up to rounding.
///
/// ```
/// use shapematch_algebra::Vec2;
/// use shapematch_align::expectations;
/// use shapematch_seq::SeqView;
///
/// let template = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)];
/// let expected = expectations(&template, Vec2::new(2.0, 2.0), Vec2::new(2.0, 4.0))?;
/// let third = expected.at(2).unwrap();
/// assert!((third - Vec2::new(0.0, 4.0)).length() < 1e-12);
/// # Ok::<(), shapematch_align::MatchError>(())
/// ```
pub fn expectations<V>(
    template: &V,
    first: Vec2,
    second: Vec2,
) -> Result<Mapped<'_, V, impl Fn(Vec2) -> Vec2>, MatchError>
where
    V: SeqView<Item = Vec2> + ?Sized,
{
    let similarity = Similarity::from_anchors(template, first, second, DEFAULT_DEGENERATE_EPS)?;
    Ok(template.mapped(move |p| similarity.apply(p)))
}
