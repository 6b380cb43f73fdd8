pub mod candidate_filter;
pub mod dwell_time;
pub mod itinerary_builder;
pub mod presets;
pub mod progress;
pub mod route_metrics;
pub mod route_optimizer;
pub mod travel_time;

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::models::{Itinerary, PlanningNotice, PlanningParameters, PointOfInterest};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use candidate_filter::filter_candidates;
use itinerary_builder::ItineraryBuilder;
use presets::PresetBundle;
use progress::{PlanningProgress, PlanningStage, ProgressObserver};
use route_metrics::RouteTimeInfo;
use route_optimizer::RouteOptimizer;

/// Everything a planning call produces. Always carries an itinerary, possibly with zero stops.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanOutcome {
    pub itinerary: Itinerary,
    pub summary: RouteTimeInfo,
    pub notices: Vec<PlanningNotice>,
}

/// Stateless itinerary planner. Holds only configuration, so one instance can
/// serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct ItineraryPlanner {
    config: PlannerConfig,
}

impl ItineraryPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        tracing::info!(
            travel_model = %config.travel_time_model,
            selection_policy = %config.selection_policy,
            walking_speed_mps = config.walking_speed_mps,
            "Itinerary planner configured"
        );
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan an itinerary synchronously. Never fails: degenerate inputs yield an
    /// empty itinerary with notices explaining why.
    pub fn plan(
        &self,
        pois: &[PointOfInterest],
        parameters: &PlanningParameters,
        progress: &dyn ProgressObserver,
    ) -> PlanOutcome {
        tracing::info!(
            catalog_size = pois.len(),
            max_duration_minutes = parameters.max_duration_minutes,
            interests = ?parameters.interests,
            has_start = parameters.start_location.is_some(),
            "Planning itinerary from {} POIs within {} min",
            pois.len(),
            parameters.max_duration_minutes
        );

        let mut notices = Vec::new();

        // Step 1: Narrow the catalog
        let pool = filter_candidates(pois, parameters);
        notices.extend(
            pool.missing_coordinates
                .iter()
                .map(|poi_id| PlanningNotice::MissingCoordinate {
                    poi_id: poi_id.clone(),
                }),
        );
        if pool.is_empty() {
            tracing::warn!(
                catalog_size = pois.len(),
                skipped_without_coordinates = pool.missing_coordinates.len(),
                "No POI matched the planning filters"
            );
            notices.push(PlanningNotice::EmptyCandidatePool);
        } else {
            tracing::debug!(
                candidates = pool.len(),
                filtered_out = pois.len() - pool.len(),
                "Candidate pool: {} of {} POIs",
                pool.len(),
                pois.len()
            );
        }
        progress.report(PlanningProgress::at(PlanningStage::Filtered));

        // Step 2: Greedy selection within the time budget
        let route = RouteOptimizer::new(&self.config).optimize(&pool.candidates, parameters);
        if let Some(required_minutes) = route.budget_shortfall {
            tracing::warn!(
                required_minutes,
                budget_minutes = parameters.max_duration_minutes,
                "Time budget too small for the first stop"
            );
            notices.push(PlanningNotice::BudgetTooSmall {
                required_minutes,
                budget_minutes: parameters.max_duration_minutes,
            });
        }
        progress.report(PlanningProgress::at(PlanningStage::Selected));

        // Step 3: Path through the selected stops
        let polyline =
            ItineraryBuilder::build_polyline(parameters.start_location.as_ref(), &route);
        progress.report(PlanningProgress::at(PlanningStage::PathBuilt));

        // Step 4: Summary metrics and final assembly
        let summary = RouteTimeInfo::compute(&route.stop_coordinates(), &self.config);
        let itinerary = ItineraryBuilder::new(&self.config).build(&route, polyline, parameters);

        if parameters.max_distance_km > 0.0
            && itinerary.total_distance_km > parameters.max_distance_km
        {
            tracing::info!(
                distance_km = %format!("{:.2}", itinerary.total_distance_km),
                limit_km = parameters.max_distance_km,
                "Itinerary is longer than the requested distance limit"
            );
            notices.push(PlanningNotice::DistanceLimitExceeded {
                distance_km: itinerary.total_distance_km,
                limit_km: parameters.max_distance_km,
            });
        }

        tracing::info!(
            itinerary_id = %itinerary.id,
            stops = itinerary.stops.len(),
            duration_minutes = itinerary.total_duration_minutes,
            distance_km = %format!("{:.2}", itinerary.total_distance_km),
            difficulty = %itinerary.difficulty,
            notices = notices.len(),
            "Planned itinerary with {} stops",
            itinerary.stops.len()
        );

        let outcome = PlanOutcome {
            itinerary,
            summary,
            notices,
        };
        progress.report(PlanningProgress::at(PlanningStage::Assembled));
        outcome
    }

    /// Plan on the blocking pool so the caller's task is never held up.
    /// Each call works on its own snapshot of the catalog.
    pub async fn plan_async(
        &self,
        pois: Arc<[PointOfInterest]>,
        parameters: PlanningParameters,
        progress: Arc<dyn ProgressObserver>,
    ) -> Result<PlanOutcome> {
        let planner = self.clone();
        let outcome = tokio::task::spawn_blocking(move || {
            planner.plan(&pois, &parameters, progress.as_ref())
        })
        .await?;
        Ok(outcome)
    }

    /// Plan with one of the named parameter bundles
    pub async fn plan_preset(
        &self,
        preset: PresetBundle,
        pois: Arc<[PointOfInterest]>,
        progress: Arc<dyn ProgressObserver>,
    ) -> Result<PlanOutcome> {
        tracing::debug!(preset = %preset, "Planning with preset parameters");
        self.plan_async(pois, preset.parameters(), progress).await
    }
}

impl Default for ItineraryPlanner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
