mod common;

use std::sync::Arc;

use common::{
    InMemoryShortUrls, InMemoryVisits, ScriptedConfirmer, no_color, short_urls, text,
};
use link_reports::application::services::LAST_PAGE_MESSAGE;
use link_reports::cli::args::{DateRangeArgs, ListShortUrlsArgs};
use link_reports::prelude::*;

fn reports(
    store: Arc<InMemoryShortUrls>,
    page_size: u32,
) -> Reports<InMemoryShortUrls, InMemoryVisits> {
    no_color();
    Reports::new(store, Arc::new(InMemoryVisits::new(vec![])), page_size)
}

fn args(page: i64, show_tags: bool) -> ListShortUrlsArgs {
    ListShortUrlsArgs {
        page,
        show_tags,
        dates: DateRangeArgs::default(),
    }
}

#[tokio::test]
async fn test_accepting_once_renders_two_pages() {
    let store = Arc::new(InMemoryShortUrls::new(short_urls(3)));
    let confirmer = ScriptedConfirmer::new(&[true]);

    let mut out = Vec::new();
    let summary = reports(store.clone(), 2)
        .list_short_urls(&args(1, false), &mut out, &confirmer)
        .await
        .unwrap();

    let output = text(&out);
    assert_eq!(summary.pages_rendered, 2);
    assert_eq!(summary.last_page, 2);
    assert_eq!(summary.termination, Termination::LastPage);
    assert_eq!(confirmer.prompts(), vec!["Continue with page 2?".to_string()]);

    assert_eq!(output.matches("| Short code").count(), 2);
    let first = output.find("code03").unwrap();
    let second = output.find("code02").unwrap();
    let third = output.find("code01").unwrap();
    assert!(first < second && second < third);
    assert!(output.trim_end().ends_with(LAST_PAGE_MESSAGE));

    let offsets: Vec<i64> = store.calls().iter().map(|f| f.offset).collect();
    assert_eq!(offsets, vec![0, 2]);
}

#[tokio::test]
async fn test_declining_stops_without_message() {
    let store = Arc::new(InMemoryShortUrls::new(short_urls(5)));
    let confirmer = ScriptedConfirmer::new(&[false]);

    let mut out = Vec::new();
    let summary = reports(store.clone(), 2)
        .list_short_urls(&args(1, false), &mut out, &confirmer)
        .await
        .unwrap();

    let output = text(&out);
    assert_eq!(summary.pages_rendered, 1);
    assert_eq!(summary.termination, Termination::Declined);
    assert_eq!(confirmer.prompts().len(), 1);
    assert!(!output.contains(LAST_PAGE_MESSAGE));
    assert_eq!(store.calls().len(), 1);
}

#[tokio::test]
async fn test_single_page_never_prompts() {
    let store = Arc::new(InMemoryShortUrls::new(short_urls(2)));
    let confirmer = ScriptedConfirmer::new(&[]);

    let mut out = Vec::new();
    let summary = reports(store, 10)
        .list_short_urls(&args(1, false), &mut out, &confirmer)
        .await
        .unwrap();

    assert_eq!(summary.pages_rendered, 1);
    assert!(confirmer.prompts().is_empty());
    assert!(text(&out).contains(LAST_PAGE_MESSAGE));
}

#[tokio::test]
async fn test_start_page_skips_earlier_records() {
    let store = Arc::new(InMemoryShortUrls::new(short_urls(5)));
    let confirmer = ScriptedConfirmer::new(&[]);

    let mut out = Vec::new();
    let summary = reports(store.clone(), 2)
        .list_short_urls(&args(3, false), &mut out, &confirmer)
        .await
        .unwrap();

    let output = text(&out);
    assert_eq!(summary.last_page, 3);
    assert!(output.contains("code01"));
    assert!(!output.contains("code05"));
    assert_eq!(store.calls()[0].offset, 4);
}

#[tokio::test]
async fn test_tags_column_is_optional() {
    let records = vec![
        short_urls(1)
            .remove(0)
            .with_tags(["campaign", "spring"]),
    ];

    let mut out = Vec::new();
    reports(Arc::new(InMemoryShortUrls::new(records.clone())), 10)
        .list_short_urls(&args(1, true), &mut out, &ScriptedConfirmer::new(&[]))
        .await
        .unwrap();
    let with_tags = text(&out);
    assert!(with_tags.contains("| Tags"));
    assert!(with_tags.contains("campaign, spring"));

    let mut out = Vec::new();
    reports(Arc::new(InMemoryShortUrls::new(records)), 10)
        .list_short_urls(&args(1, false), &mut out, &ScriptedConfirmer::new(&[]))
        .await
        .unwrap();
    assert!(!text(&out).contains("Tags"));
}

#[tokio::test]
async fn test_bad_date_fails_before_fetching() {
    let store = Arc::new(InMemoryShortUrls::new(short_urls(3)));
    let args = ListShortUrlsArgs {
        page: 1,
        show_tags: false,
        dates: DateRangeArgs {
            start_date: Some("yesterday".into()),
            end_date: None,
        },
    };

    let mut out = Vec::new();
    let err = reports(store.clone(), 2)
        .list_short_urls(&args, &mut out, &ScriptedConfirmer::new(&[]))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(err.to_string().contains("yesterday"));
    assert!(out.is_empty());
    assert!(store.calls().is_empty());
}
