use std::thread;

use chrono::{NaiveDate, NaiveTime};

use court_reservation::{ReservationRegistry, SharedReservationRegistry};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_concurrent_bookings_of_one_slot() {
    let registry = SharedReservationRegistry::with_max_courts(10);

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let registry = registry.clone();
            thread::spawn(move || registry.book(3, date(2024, 8, 1), 60))
        })
        .collect();

    let successes = handles.into_iter().map(|h| h.join().unwrap()).filter(|booked| *booked).count();

    assert_eq!(successes, 1, "Exactly one caller may win the slot");
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_concurrent_bookings_of_distinct_slots() {
    let registry = SharedReservationRegistry::with_max_courts(10);

    let handles: Vec<_> = (0..10)
        .map(|court| {
            let registry = registry.clone();
            thread::spawn(move || {
                (1..=5).filter(|day| registry.book(court, date(2024, 8, *day), 60)).count()
            })
        })
        .collect();

    let booked: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    assert_eq!(booked, 50);
    assert_eq!(registry.snapshot().len(), 50);
}

#[test]
fn test_shared_handle_forwards_operations() {
    let mut seed = ReservationRegistry::new(4);
    seed.book(0, date(2024, 1, 1), 60);
    let registry = SharedReservationRegistry::from(seed);
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

    assert!(!registry.check_availability(0, date(2024, 1, 1), noon));
    assert!(registry.turn_lights_on(2));
    assert_eq!(registry.is_lit(2), Some(true));
    assert!(registry.turn_lights_off(2));

    let id = registry.try_book(1, date(2024, 1, 1), 30).unwrap();
    assert!(registry.cancel_reservation(id).is_ok());
    assert!(registry.cancel(0));
    assert!(registry.is_empty());
}

#[test]
fn test_with_registry_runs_atomically() {
    let registry = SharedReservationRegistry::with_max_courts(2);
    registry.book(1, date(2024, 2, 2), 60);

    let moved = registry.with_registry(|r| r.cancel(1) && r.book(1, date(2024, 2, 3), 60));

    assert!(moved);
    assert_eq!(registry.snapshot()[0].get_date(), date(2024, 2, 3));
}

#[test]
fn test_registry_survives_panicking_closure() {
    let registry = SharedReservationRegistry::with_max_courts(4);

    let handle = registry.clone();
    let result = thread::spawn(move || {
        handle.with_registry(|r| {
            let booked = r.book(1, date(2024, 3, 3), 60);
            if booked {
                panic!("caller failed mid-sequence");
            }
            booked
        })
    })
    .join();
    assert!(result.is_err());

    assert_eq!(registry.len(), 1);
    assert!(!registry.book(1, date(2024, 3, 3), 60), "The slot booked before the panic stays taken");
    assert!(registry.book(1, date(2024, 3, 4), 60));
}
