//! Integration test: roster and schedule generation
//!
//! Verifies the generator contracts: roster size and attribute ranges,
//! the fixed distance ladder, the 10-horse draw, and the no-horses failure.

use derby::core::horse::generate_horses;
use derby::core::race::{generate_schedule, RaceStatus};
use derby::core::tournament::CommandError;
use derby::{HORSE_COUNT, HORSES_PER_RACE, RACE_DISTANCES, TOTAL_ROUNDS};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[test]
fn roster_has_twenty_horses_with_valid_attributes() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let horses = generate_horses(&mut rng);

    assert_eq!(horses.len(), HORSE_COUNT);
    for (i, horse) in horses.iter().enumerate() {
        assert_eq!(horse.id, i as u32 + 1);
        assert!((1..=100).contains(&horse.condition));
        assert!(horse.speed > 0.0, "speed must be strictly positive");
        assert_eq!(horse.position, 0.0);
        assert!(!horse.name.is_empty());
        assert!(horse.color.starts_with('#'));
    }
}

#[test]
fn roster_names_are_unique() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let horses = generate_horses(&mut rng);
    let names: HashSet<&str> = horses.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names.len(), horses.len());
}

#[test]
fn condition_does_not_fully_determine_baseline_speed() {
    // Across many rosters there must exist a pair where the lower-condition
    // horse got the higher baseline speed, otherwise the random band is dead.
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut found_upset = false;
    for _ in 0..20 {
        let horses = generate_horses(&mut rng);
        for a in &horses {
            for b in &horses {
                if a.condition < b.condition && a.speed > b.speed {
                    found_upset = true;
                }
            }
        }
    }
    assert!(found_upset, "speed is condition-sorted, random band missing");
}

#[test]
fn schedule_follows_the_fixed_distance_ladder() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let horses = generate_horses(&mut rng);
    let races = generate_schedule(&horses, &mut rng).unwrap();

    assert_eq!(races.len(), TOTAL_ROUNDS);
    for (i, race) in races.iter().enumerate() {
        assert_eq!(race.round, i as u32 + 1);
        assert_eq!(race.distance, RACE_DISTANCES[i]);
        assert_eq!(race.status, RaceStatus::Pending);
        assert!(race.results.is_empty());
        assert!(race.winner.is_none());
        assert!(!race.showing_results);
    }
}

#[test]
fn each_race_draws_ten_distinct_horses_from_the_pool() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let horses = generate_horses(&mut rng);
    let races = generate_schedule(&horses, &mut rng).unwrap();

    let pool: HashSet<u32> = horses.iter().map(|h| h.id).collect();
    for race in &races {
        assert_eq!(race.horses.len(), HORSES_PER_RACE);
        let drawn: HashSet<u32> = race.horses.iter().copied().collect();
        assert_eq!(drawn.len(), HORSES_PER_RACE, "duplicate horse in draw");
        assert!(drawn.is_subset(&pool));
    }
}

#[test]
fn small_pool_races_hold_every_available_horse() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let mut horses = generate_horses(&mut rng);
    horses.truncate(4);

    let races = generate_schedule(&horses, &mut rng).unwrap();
    for race in &races {
        assert_eq!(race.horses.len(), 4);
    }
}

#[test]
fn empty_pool_fails_with_no_horses() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let err = generate_schedule(&[], &mut rng).unwrap_err();
    assert_eq!(err, CommandError::NoHorses);
}
