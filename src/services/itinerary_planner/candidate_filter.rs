use crate::models::{PlanningParameters, PointOfInterest};

/// Candidate pool left after filtering, in catalog order.
#[derive(Debug, Default)]
pub struct CandidatePool<'a> {
    pub candidates: Vec<&'a PointOfInterest>,
    /// Ids of POIs that matched the filters but had no usable coordinates
    pub missing_coordinates: Vec<String>,
}

impl<'a> CandidatePool<'a> {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }
}

/// Narrow the catalog to POIs matching interests, categories and audio requirements.
/// Relative order is preserved so tie-breaks downstream stay deterministic.
pub fn filter_candidates<'a>(
    pois: &'a [PointOfInterest],
    parameters: &PlanningParameters,
) -> CandidatePool<'a> {
    let mut pool = CandidatePool::default();

    for poi in pois {
        if !matches_parameters(poi, parameters) {
            continue;
        }
        if poi.usable_coordinates().is_none() {
            tracing::debug!(poi_id = %poi.id, "Skipping POI without usable coordinates");
            pool.missing_coordinates.push(poi.id.clone());
            continue;
        }
        pool.candidates.push(poi);
    }

    pool
}

/// Whether a POI passes every preference constraint. Empty lists match everything.
pub fn matches_parameters(poi: &PointOfInterest, parameters: &PlanningParameters) -> bool {
    let matches_interests =
        parameters.interests.is_empty() || poi.matches_any_interest(&parameters.interests);

    let matches_preferred = parameters.preferred_categories.is_empty()
        || poi.in_any_category(&parameters.preferred_categories);

    let not_avoided = !poi.in_any_category(&parameters.avoid_categories);

    let has_audio = !parameters.include_audio_guides || poi.has_audio_guide();

    matches_interests && matches_preferred && not_avoided && has_audio
}
