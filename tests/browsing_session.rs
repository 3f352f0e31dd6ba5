use rental_scout::catalog::source::sample_listings;
use rental_scout::{Catalog, CriteriaPatch, Listing, RoomType, Session, COMPARISON_CAPACITY};
use std::sync::Arc;

fn session() -> Session {
    Session::new(Arc::new(Catalog::new(sample_listings()).unwrap()))
}

fn ids(listings: &[&Listing]) -> Vec<String> {
    listings.iter().map(|l| l.id.clone()).collect()
}

fn snapshot(session: &Session, id: &str) -> Listing {
    session.catalog().get(id).cloned().unwrap()
}

#[test]
fn test_price_window_example() {
    let mut session = session();
    session.set_criteria(CriteriaPatch::new().price_min(150).price_max(300));

    let prices: Vec<u32> = session
        .filtered_listings()
        .iter()
        .map(|l| l.monthly_price)
        .collect();
    assert_eq!(prices, vec![250, 180, 300, 200]);
}

#[test]
fn test_free_text_city_search() {
    let mut session = session();

    session.set_free_text_query("Harare");
    assert_eq!(session.filtered_listings().len(), 6);

    session.set_free_text_query("Bulawayo");
    assert!(session.filtered_listings().is_empty());

    session.set_free_text_query("");
    assert_eq!(ids(&session.filtered_listings()), vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn test_amenities_require_every_tag() {
    let mut session = session();
    session.set_criteria(CriteriaPatch::new().amenities(["WiFi", "Kitchen"]));

    for listing in session.catalog().iter() {
        let expected = listing.has_amenity("WiFi") && listing.has_amenity("Kitchen");
        let visible = session.filtered_listings().contains(&listing);
        assert_eq!(visible, expected, "listing {}", listing.id);
    }
}

#[test]
fn test_inverted_price_bounds_give_empty_result() {
    let mut session = session();
    session.set_criteria(CriteriaPatch::new().price_min(300).price_max(150));
    assert!(session.filtered_listings().is_empty());
}

#[test]
fn test_move_in_date_does_not_narrow_results() {
    let mut session = session();
    let date = chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    session.set_criteria(CriteriaPatch::new().move_in_date(date));
    assert_eq!(session.filtered_listings().len(), 6);
    assert_eq!(session.criteria().active_filters(), vec!["Move in 2025-01-15"]);
}

#[test]
fn test_shared_rooms_near_campus() {
    let mut session = session();
    session.set_criteria(
        CriteriaPatch::new()
            .room_type(RoomType::SharedRoom)
            .institution("University of Zimbabwe")
            .location("marlborough"),
    );
    assert_eq!(ids(&session.filtered_listings()), vec!["4"]);
}

#[test]
fn test_favorite_toggle_round_trip() {
    let mut session = session();
    for id in ["1", "4", "missing"] {
        let before = session.is_favorited(id);
        session.toggle_favorite(id);
        session.toggle_favorite(id);
        assert_eq!(session.is_favorited(id), before);
    }
}

#[test]
fn test_comparison_walkthrough() {
    let mut session = session();
    let a = snapshot(&session, "1");
    let b = snapshot(&session, "2");
    let c = snapshot(&session, "3");
    let d = snapshot(&session, "4");

    for listing in [a.clone(), b.clone(), c.clone(), d.clone()] {
        session.add_to_comparison(listing);
        assert!(session.comparison_count() <= COMPARISON_CAPACITY);
    }
    assert_eq!(session.comparison().ids(), vec!["2", "3", "4"]);
    assert!(!session.is_in_comparison(&a.id));

    session.add_to_comparison(d.clone());
    assert_eq!(session.comparison().ids(), vec!["2", "3", "4"]);

    session.remove_from_comparison(&c.id);
    assert_eq!(session.comparison().ids(), vec!["2", "4"]);

    session.clear_comparison();
    assert_eq!(session.comparison_count(), 0);
}

#[test]
fn test_comparison_keeps_snapshots_after_filtering() {
    let mut session = session();
    session.add_to_comparison_by_id("5");
    session.set_criteria(CriteriaPatch::new().price_max(200));

    assert!(!session.filtered_listings().iter().any(|l| l.id == "5"));
    let held: Vec<u32> = session.comparison().iter().map(|l| l.monthly_price).collect();
    assert_eq!(held, vec![450]);
}
