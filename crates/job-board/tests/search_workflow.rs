use std::sync::Arc;

use chrono::NaiveDate;
use job_board::listings::{
    Facet, ListingImporter, ListingPage, ListingStore, SortOrder,
};
use job_board::navigation::Route;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 6).expect("valid date")
}

fn ids(page: &mut ListingPage) -> Vec<String> {
    page.results().iter().map(|job| job.id.0.clone()).collect()
}

#[test]
fn home_search_deep_link_flows_into_listing_page() {
    let route = Route::parse("/jobs?keyword=developer&location=");
    let Route::Jobs { keyword, location } = route else {
        panic!("expected the jobs route");
    };
    assert_eq!(keyword.as_deref(), Some("developer"));
    assert_eq!(location, None);

    let store = Arc::new(ListingStore::standard());
    let mut page = ListingPage::from_deep_link(store, keyword.as_deref(), location.as_deref());
    assert_eq!(ids(&mut page), ["1", "5"]);

    page.toggle(Facet::Category, "Design");
    assert!(ids(&mut page).is_empty());
    let view = page.view(today());
    assert_eq!(view.count_label, "0 jobs found");
    assert!(view.empty_state.is_some());

    page.clear_all();
    assert_eq!(ids(&mut page).len(), 6);
}

#[test]
fn refining_a_search_step_by_step() {
    let store = Arc::new(ListingStore::standard());
    let mut page = ListingPage::new(store);

    page.search_mut().set_location("remote");
    page.submit_search();
    assert_eq!(ids(&mut page), ["2", "6"]);

    page.toggle(Facet::Category, "Product");
    assert_eq!(ids(&mut page), ["6"]);

    page.set_sort(SortOrder::Relevant);
    assert_eq!(ids(&mut page), ["6"]);
    assert_eq!(page.evaluations(), 2);
}

#[test]
fn csv_store_feeds_the_same_pipeline() {
    let store = ListingImporter::from_path(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/sample_listings.csv"
    ))
    .expect("sample csv imports");
    assert_eq!(store.len(), 8);

    let store = Arc::new(store);
    let mut page = ListingPage::new(store.clone());
    page.toggle(Facet::JobType, "Part-time");
    page.toggle(Facet::JobType, "Contract");
    assert_eq!(ids(&mut page), ["7", "8"]);

    let junior = store
        .find(&"7".into())
        .expect("junior listing present");
    assert_eq!(junior.requirements.len(), 3);
    assert_eq!(junior.logo.as_deref(), Some("tech-innovations.png"));

    let featured: Vec<&str> = store
        .featured(3)
        .iter()
        .map(|job| job.id.0.as_str())
        .collect();
    assert_eq!(featured, ["8", "4", "7"]);
}
