use crate::config::{PlannerConfig, SelectionPolicy};
use crate::constants::*;
use crate::models::{Coordinates, PlanningParameters, PointOfInterest, Stop};

use super::dwell_time::estimate_dwell_minutes;
use super::travel_time::TravelTimeEstimator;

/// A committed stop together with the POI data later stages need.
#[derive(Debug, Clone)]
pub struct SelectedStop<'a> {
    pub poi: &'a PointOfInterest,
    pub coordinates: Coordinates,
    pub stop: Stop,
    /// Travel minutes charged to reach this stop
    pub travel_minutes: u32,
}

#[derive(Debug, Default)]
pub struct OptimizedRoute<'a> {
    pub stops: Vec<SelectedStop<'a>>,
    /// Dwell plus travel minutes of every committed stop
    pub total_minutes: u32,
    /// Minutes the first stop would have needed, set only when nothing fit
    pub budget_shortfall: Option<u32>,
}

impl OptimizedRoute<'_> {
    pub fn stop_coordinates(&self) -> Vec<Coordinates> {
        self.stops.iter().map(|s| s.coordinates).collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    poi: &'a PointOfInterest,
    coordinates: Coordinates,
}

/// Greedy, budget-constrained selection and ordering of candidate POIs.
pub struct RouteOptimizer {
    travel: TravelTimeEstimator,
    start_dwell_minutes: u32,
    policy: SelectionPolicy,
}

impl RouteOptimizer {
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            travel: TravelTimeEstimator::new(config),
            start_dwell_minutes: config.start_dwell_minutes,
            policy: config.selection_policy,
        }
    }

    /// Pick stops from `candidates` until the time budget runs out.
    /// Candidates without usable coordinates are ignored.
    pub fn optimize<'a>(
        &self,
        candidates: &[&'a PointOfInterest],
        parameters: &PlanningParameters,
    ) -> OptimizedRoute<'a> {
        let budget = parameters.max_duration_minutes;
        let mut pool: Vec<Candidate<'a>> = candidates
            .iter()
            .filter_map(|&poi| {
                poi.usable_coordinates()
                    .map(|coordinates| Candidate { poi, coordinates })
            })
            .collect();
        let mut route = OptimizedRoute::default();

        if let Some(start) = parameters.start_location.as_ref() {
            if !self.seed(&mut pool, start, budget, &mut route) {
                return route;
            }
        }

        let mut first_rejection: Option<u32> = None;

        // An empty route always gets one attempt so a too-small budget is reported
        while !pool.is_empty() && (route.stops.is_empty() || route.total_minutes < budget) {
            let Some(index) = best_candidate_index(&pool, parameters) else {
                break;
            };
            let candidate = pool[index];

            let dwell = estimate_dwell_minutes(candidate.poi, parameters);
            let previous = route.stops.last().map(|s| &s.coordinates);
            let travel = self.travel.leg_minutes(
                previous,
                parameters.start_location.as_ref(),
                &candidate.coordinates,
            );
            // Overflowing sums can never fit the budget
            let required = dwell.checked_add(travel);
            let total = required.and_then(|r| route.total_minutes.checked_add(r));

            if let (Some(required), Some(total)) = (required, total) {
                if total <= budget {
                    drop_poi(&mut pool, &candidate.poi.id);
                    route.total_minutes = total;
                    tracing::debug!(
                        poi_id = %candidate.poi.id,
                        dwell_minutes = dwell,
                        travel_minutes = travel,
                        total_minutes = route.total_minutes,
                        "Committed stop {}",
                        route.stops.len() + 1
                    );
                    route.stops.push(SelectedStop {
                        poi: candidate.poi,
                        coordinates: candidate.coordinates,
                        stop: Stop::new(candidate.poi.id.clone(), dwell),
                        travel_minutes: travel,
                    });
                    continue;
                }
            }

            let required = required.unwrap_or(u32::MAX);
            first_rejection.get_or_insert(required);
            tracing::debug!(
                poi_id = %candidate.poi.id,
                required_minutes = required,
                remaining_minutes = budget.saturating_sub(route.total_minutes),
                policy = %self.policy,
                "Best candidate does not fit remaining budget"
            );

            match self.policy {
                SelectionPolicy::StopOnMiss => break,
                SelectionPolicy::SkipUnfit => {
                    pool.remove(index);
                }
            }
        }

        if route.stops.is_empty() {
            route.budget_shortfall = first_rejection;
        }

        route
    }

    /// Commit the candidate nearest to `start` as the opening stop.
    /// Returns false when even the opening stop exceeds the budget.
    fn seed<'a>(
        &self,
        pool: &mut Vec<Candidate<'a>>,
        start: &Coordinates,
        budget: u32,
        route: &mut OptimizedRoute<'a>,
    ) -> bool {
        let Some(index) = nearest_candidate_index(pool, start) else {
            return true;
        };

        if self.start_dwell_minutes > budget {
            route.budget_shortfall = Some(self.start_dwell_minutes);
            return false;
        }

        let nearest = pool[index];
        drop_poi(pool, &nearest.poi.id);
        route.total_minutes += self.start_dwell_minutes;
        tracing::debug!(
            poi_id = %nearest.poi.id,
            distance_m = %format!("{:.0}", start.distance_meters_to(&nearest.coordinates)),
            "Seeded route with POI nearest to start"
        );
        route.stops.push(SelectedStop {
            poi: nearest.poi,
            coordinates: nearest.coordinates,
            stop: Stop::new(nearest.poi.id.clone(), self.start_dwell_minutes)
                .with_note(START_STOP_NOTE),
            travel_minutes: 0,
        });

        true
    }
}

/// Selection score: rating plus bonuses for a preferred category and an audio guide.
/// The audio bonus applies whether or not guides were requested.
pub fn score_candidate(poi: &PointOfInterest, parameters: &PlanningParameters) -> f64 {
    let mut score = poi.rating;

    if poi.in_any_category(&parameters.preferred_categories) {
        score += PREFERRED_CATEGORY_BONUS;
    }
    if poi.has_audio_guide() {
        score += AUDIO_GUIDE_BONUS;
    }

    score
}

/// Remove every candidate sharing `poi_id`, so a repeated catalog id is visited once.
fn drop_poi(pool: &mut Vec<Candidate>, poi_id: &str) {
    pool.retain(|c| c.poi.id != poi_id);
}

/// Highest score wins; ties go to the earliest candidate.
fn best_candidate_index(pool: &[Candidate], parameters: &PlanningParameters) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, candidate) in pool.iter().enumerate() {
        let score = score_candidate(candidate.poi, parameters);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    best.map(|(index, _)| index)
}

/// Closest candidate to `point`; ties go to the earliest candidate.
fn nearest_candidate_index(pool: &[Candidate], point: &Coordinates) -> Option<usize> {
    let mut nearest: Option<(usize, f64)> = None;

    for (index, candidate) in pool.iter().enumerate() {
        let distance = point.distance_to(&candidate.coordinates);
        match nearest {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => nearest = Some((index, distance)),
        }
    }

    nearest.map(|(index, _)| index)
}
