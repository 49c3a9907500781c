use crate::geo_query::{GeoQueryError, ToCoordinate, distance};
use ordered_float::OrderedFloat;

/// A candidate paired with its distance in kilometers to the reference point.
#[derive(PartialEq, Debug)]
pub struct Ranked<'a, T> {
    pub candidate: &'a T,
    pub distance: f64,
}

/// Orders all candidates by ascending distance to `reference`.
///
/// The sort is stable: candidates at equal distance keep their input order. The input slice is never reordered.
pub fn rank<'a, R, T>(reference: &R, candidates: &'a [T]) -> Result<Vec<Ranked<'a, T>>, GeoQueryError>
where
    R: ToCoordinate + ?Sized,
    T: ToCoordinate,
{
    let reference = reference.to_coordinate().map_err(GeoQueryError::InvalidCoordinate)?;

    let mut ranked = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            let coordinate = candidate
                .to_coordinate()
                .map_err(|source| GeoQueryError::InvalidCandidateList { index, source })?;
            Ok(Ranked {
                candidate,
                distance: distance(&reference, &coordinate),
            })
        })
        .collect::<Result<Vec<_>, GeoQueryError>>()?;

    ranked.sort_by_key(|r| OrderedFloat(r.distance));
    Ok(ranked)
}

/// Returns the `k` candidates closest to `reference`, nearest first.
///
/// Returns fewer than `k` entries when there are fewer candidates, and nothing for `k == 0`.
pub fn nearest_k<'a, R, T>(reference: &R, candidates: &'a [T], k: usize) -> Result<Vec<&'a T>, GeoQueryError>
where
    R: ToCoordinate + ?Sized,
    T: ToCoordinate,
{
    Ok(rank(reference, candidates)?.into_iter().take(k).map(|r| r.candidate).collect())
}

/// The number of results requested from a nearest-K query, guaranteed non-negative.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ResultCount(usize);

impl ResultCount {
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for ResultCount {
    type Error = GeoQueryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value).map(ResultCount).map_err(|_| GeoQueryError::InvalidCount(value))
    }
}
