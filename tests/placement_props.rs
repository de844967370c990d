use proptest::prelude::*;
use visit_planner::catalog::Catalog;
use visit_planner::generator::{available_only, consume, find_instance, generate};
use visit_planner::models::{PlacedVisit, RosterEntity, VisitPosition, VisitSchedule};
use visit_planner::placement::{can_place, find_at, place, remove, GridBounds};
use visit_planner::state::SchedulingState;
use visit_planner::validation::validate_schedule;

/// Durations used by the reference catalog.
const DURATIONS: [f64; 4] = [1.0, 1.5, 2.0, 5.0];

fn roster() -> Vec<RosterEntity> {
    RosterEntity::roster_from_names(["Site A", "Site B"])
}

fn assert_no_overlaps(schedule: &VisitSchedule) {
    let visits = schedule.as_slice();
    for (i, a) in visits.iter().enumerate() {
        for b in &visits[i + 1..] {
            if a.week == b.week && a.day == b.day {
                assert!(
                    !a.window().overlaps(&b.window()),
                    "{} and {} overlap",
                    a.id,
                    b.id
                );
            }
        }
    }
}

#[test]
fn test_site_scenario() {
    let catalog = Catalog::reference();
    let roster = RosterEntity::roster_from_names(["Site A"]);
    let mut pool = generate(&catalog, 1, &roster);
    let mut schedule = VisitSchedule::new();

    let qra = find_instance(&pool, "qra-rest-0").unwrap().clone();
    assert!(can_place(&schedule, 0, 1, 9, qra.hours));
    place(
        &mut schedule,
        PlacedVisit::from_instance(&qra, VisitPosition::new(0, 1, 9)),
    );
    consume(&mut pool, &qra.id);

    assert!(!can_place(&schedule, 0, 1, 13, 1.0));
    assert!(can_place(&schedule, 0, 1, 14, 1.0));
    assert!(available_only(&pool).all(|v| v.id != qra.id));
}

#[test]
fn test_generate_twice_is_identical() {
    let catalog = Catalog::reference();
    let a = generate(&catalog, 1, &roster());
    let b = generate(&catalog, 1, &roster());
    let ids_a: Vec<&str> = a.iter().map(|v| v.id.as_str()).collect();
    let ids_b: Vec<&str> = b.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids_a, ids_b);
    assert!(a.iter().zip(&b).all(|(x, y)| x.remaining == y.remaining));
}

#[test]
fn test_removal_round_trip() {
    let mut schedule = VisitSchedule::new();
    let pool = generate(&Catalog::reference(), 2, &roster());
    let coaching = find_instance(&pool, "coaching-rest-1").unwrap();
    let visit = PlacedVisit::from_instance(coaching, VisitPosition::new(2, 4, 15));
    let id = visit.id.clone();

    place(&mut schedule, visit);
    assert_eq!(find_at(&schedule, 2, 4, 16).map(|v| v.id.as_str()), Some(id.as_str()));

    assert!(remove(&mut schedule, &id));
    assert!(find_at(&schedule, 2, 4, 15).is_none());
    assert!(!remove(&mut schedule, &id));
    assert!(schedule.is_empty());
}

proptest! {
    #[test]
    fn prop_gated_placement_never_overlaps(
        attempts in proptest::collection::vec(
            (0..4usize, 1..=7u8, 8..=22u32, 0..DURATIONS.len()),
            0..80,
        )
    ) {
        let catalog = Catalog::reference();
        let pool = generate(&catalog, 1, &roster());
        let template = find_instance(&pool, "cash-audit-rest-0").unwrap().clone();
        let mut schedule = VisitSchedule::new();

        for (week, day, hour, d) in attempts {
            let hours = DURATIONS[d];
            if can_place(&schedule, week, day, hour, hours) {
                let mut instance = template.clone();
                instance.hours = hours;
                place(&mut schedule, PlacedVisit::from_instance(&instance, VisitPosition::new(week, day, hour)));
            }
        }

        assert_no_overlaps(&schedule);
    }

    #[test]
    fn prop_session_drops_keep_schedule_valid(
        drops in proptest::collection::vec(
            (0..10usize, 0..4usize, 1..=7u8, 8..=22u32),
            0..40,
        )
    ) {
        let mut state = SchedulingState::new(roster());
        let grid = GridBounds::new(4);
        let ids: Vec<String> = state.pool(1).iter().map(|v| v.id.clone()).collect();

        for (i, week, day, hour) in drops {
            let _ = state.drop_visit(1, &ids[i % ids.len()], VisitPosition::new(week, day, hour), &grid);
        }

        if let Some(schedule) = state.schedule(1) {
            prop_assert!(validate_schedule(schedule, &grid).is_ok());
            prop_assert!(schedule.len() <= ids.len());
        }
        let placed = state.schedule(1).map_or(0, VisitSchedule::len);
        let available = state.available(1).count();
        prop_assert_eq!(placed + available, ids.len());
    }
}
