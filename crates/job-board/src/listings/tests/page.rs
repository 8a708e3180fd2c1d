use super::common::*;
use crate::listings::{Facet, ListingPage, SortOrder};

#[test]
fn deep_link_seeds_and_applies_the_search() {
    let mut page = ListingPage::from_deep_link(store(), Some("developer"), None);

    assert_eq!(page.search_mut().keyword(), "developer");
    assert_eq!(ids(&page.results()), ["1", "5"]);
}

#[test]
fn draft_edits_apply_only_on_submit() {
    let mut page = ListingPage::new(store());
    page.search_mut().set_location("remote");
    assert_eq!(page.results().len(), 6);

    page.submit_search();
    assert_eq!(ids(&page.results()), ["2", "6"]);
}

#[test]
fn facet_toggles_narrow_results() {
    let mut page = ListingPage::new(store());
    page.toggle(Facet::JobType, "Full-time");
    assert_eq!(page.results().len(), 6);

    page.toggle(Facet::Category, "Design");
    assert_eq!(ids(&page.results()), ["2"]);

    page.reset_filters();
    assert_eq!(page.results().len(), 6);
}

#[test]
fn clear_all_drops_search_and_facets() {
    let mut page = ListingPage::from_deep_link(store(), Some("nothing-matches-this"), None);
    page.toggle(Facet::Category, "Design");
    let view = page.view(today());
    assert_eq!(view.total, 0);
    let empty = view.empty_state.expect("empty state shown");
    assert_eq!(empty.title, "No Jobs Found");
    assert_eq!(empty.action_label, "Clear All Filters");

    page.clear_all();
    assert_eq!(page.search_mut().keyword(), "");
    let view = page.view(today());
    assert_eq!(view.total, 6);
    assert!(view.empty_state.is_none());
}

#[test]
fn separate_pages_do_not_share_state() {
    let shared = store();
    let mut first = ListingPage::new(shared.clone());
    let mut second = ListingPage::new(shared);

    first.toggle(Facet::Category, "Marketing");
    assert_eq!(ids(&first.results()), ["4"]);
    assert_eq!(second.results().len(), 6);
}

#[test]
fn view_reuses_cached_results_and_echoes_sort() {
    let mut page = ListingPage::new(store());
    page.set_sort(SortOrder::SalaryLow);

    let view = page.view(today());
    let _ = page.view(today());
    assert_eq!(page.evaluations(), 1);

    assert_eq!(view.count_label, "6 jobs found");
    assert_eq!(view.sort, SortOrder::SalaryLow);
    let first: Vec<&str> = view.jobs.iter().map(|job| job.id.as_str()).collect();
    assert_eq!(first, ["1", "2", "3", "4", "5", "6"]);
    assert!(view
        .sort_options
        .iter()
        .any(|option| option.selected && option.value == SortOrder::SalaryLow));
    assert_eq!(view.filters.len(), 2);
}

#[test]
fn cards_carry_relative_posted_labels() {
    let mut page = ListingPage::from_deep_link(store(), Some("marketing manager"), None);
    let view = page.view(today());

    assert_eq!(view.jobs.len(), 1);
    assert_eq!(view.jobs[0].posted_label, "Yesterday");
    assert_eq!(view.jobs[0].company_initial, Some('G'));
    assert_eq!(view.jobs[0].href.path(), "/jobs/4");
}
