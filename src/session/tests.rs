//! Tests for the browse session

use super::*;
use crate::api::{CharacterQuery, CharacterSource};
use crate::error::{Error, Result};
use crate::model::{Character, CharacterPage, CharacterStatus, PageInfo, ResourceRef};
use crate::scroll::Viewport;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use std::collections::VecDeque;
use std::sync::Mutex;

fn character(id: u64, name: &str) -> Character {
    Character {
        id,
        name: name.to_string(),
        status: CharacterStatus::Alive,
        species: "Human".to_string(),
        kind: String::new(),
        gender: "Female".to_string(),
        origin: ResourceRef {
            name: "Earth".to_string(),
            url: String::new(),
        },
        location: ResourceRef {
            name: "Earth".to_string(),
            url: String::new(),
        },
        image: format!("https://example.com/avatar/{id}.jpeg"),
        episode: Vec::new(),
        url: format!("https://example.com/character/{id}"),
        created: DateTime::<Utc>::UNIX_EPOCH,
    }
}

fn page(ids: &[u64], pages: u32) -> CharacterPage {
    CharacterPage {
        info: PageInfo {
            count: ids.len() as u64,
            pages,
            next: None,
            prev: None,
        },
        results: ids
            .iter()
            .map(|id| character(*id, &format!("Character {id}")))
            .collect(),
    }
}

/// Source that replays a scripted sequence of responses and records the
/// queries it was asked for
struct ScriptedSource {
    responses: Mutex<VecDeque<Result<CharacterPage>>>,
    calls: Mutex<Vec<CharacterQuery>>,
}

impl ScriptedSource {
    fn new(responses: Vec<Result<CharacterPage>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<CharacterQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CharacterSource for ScriptedSource {
    async fn fetch(&self, query: &CharacterQuery) -> Result<CharacterPage> {
        self.calls.lock().unwrap().push(query.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted source ran out of responses")
    }
}

fn failure() -> Result<CharacterPage> {
    Err(Error::http_status(404, "There is nothing here"))
}

fn roster_ids<S: CharacterSource>(session: &BrowseSession<S>) -> Vec<u64> {
    session.store().records().iter().map(|c| c.id).collect()
}

// ============================================================================
// Search and Filter Tests
// ============================================================================

#[tokio::test]
async fn test_search_populates_roster() {
    let source = ScriptedSource::new(vec![Ok(page(&[1, 2], 3))]);
    let mut session = BrowseSession::new(source);

    session.search("rick").await;

    let snapshot = session.snapshot();
    assert_eq!(snapshot.records.len(), 2);
    assert!(snapshot.lifecycle.is_idle());
    assert_eq!(snapshot.info.unwrap().pages, 3);

    let calls = session.source.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].name, "rick");
    assert_eq!(calls[0].page, 1);
}

#[tokio::test]
async fn test_search_failure_is_empty_failure() {
    let source = ScriptedSource::new(vec![failure()]);
    let mut session = BrowseSession::new(source);

    session.search("nobody").await;

    let snapshot = session.snapshot();
    assert!(snapshot.is_empty_failure());
}

#[tokio::test]
async fn test_new_search_replaces_previous_results() {
    let source = ScriptedSource::new(vec![Ok(page(&[1, 2, 3], 1)), Ok(page(&[10], 1))]);
    let mut session = BrowseSession::new(source);

    session.search("smith").await;
    assert_eq!(roster_ids(&session), vec![1, 2, 3]);

    session.search("rick").await;
    assert_eq!(roster_ids(&session), vec![10]);
}

#[tokio::test]
async fn test_filter_resets_page_and_replaces() {
    let source = ScriptedSource::new(vec![
        Ok(page(&[1, 2], 3)),
        Ok(page(&[3, 4], 3)),
        Ok(page(&[7], 1)),
    ]);
    let mut session = BrowseSession::new(source);

    session.search("rick").await;
    session.scrolled(Viewport::at_bottom(2000.0, 800.0)).await;
    assert_eq!(session.query_state().page, 2);

    session.filter(StatusFilter::Dead).await;

    assert_eq!(roster_ids(&session), vec![7]);
    assert_eq!(session.query_state().page, 1);

    let calls = session.source.calls();
    assert_eq!(calls[2].status, StatusFilter::Dead);
    assert_eq!(calls[2].page, 1);
    // The search text is kept when only the filter changes
    assert_eq!(calls[2].name, "rick");
}

#[tokio::test]
async fn test_refresh_dispatches_current_query() {
    let source = ScriptedSource::new(vec![Ok(page(&[5], 1))]);
    let query = QueryState {
        name: "morty".to_string(),
        status: StatusFilter::Alive,
        page: 4,
    };
    let mut session = BrowseSession::with_query(source, query);

    session.refresh().await;

    let calls = session.source.calls();
    assert_eq!(calls[0].name, "morty");
    assert_eq!(calls[0].status, StatusFilter::Alive);
    // Restored state always starts from the first page
    assert_eq!(calls[0].page, 1);
    assert_eq!(roster_ids(&session), vec![5]);
}

// ============================================================================
// Scroll Tests
// ============================================================================

#[tokio::test]
async fn test_scroll_at_bottom_fetches_next_page() {
    let source = ScriptedSource::new(vec![Ok(page(&[1, 2], 3)), Ok(page(&[3, 4], 3))]);
    let mut session = BrowseSession::new(source);
    session.refresh().await;

    let fetched = session.scrolled(Viewport::at_bottom(2000.0, 800.0)).await;

    assert!(fetched);
    assert_eq!(session.query_state().page, 2);
    assert_eq!(roster_ids(&session), vec![1, 2, 3, 4]);
    assert_eq!(session.source.calls()[1].page, 2);
}

#[tokio::test]
async fn test_scroll_above_bottom_does_nothing() {
    let source = ScriptedSource::new(vec![Ok(page(&[1, 2], 3))]);
    let mut session = BrowseSession::new(source);
    session.refresh().await;

    let fetched = session.scrolled(Viewport::new(2000.0, 800.0, 300.0)).await;

    assert!(!fetched);
    assert_eq!(session.query_state().page, 1);
    assert_eq!(session.source.calls().len(), 1);
}

#[tokio::test]
async fn test_scroll_on_last_page_does_nothing() {
    let source = ScriptedSource::new(vec![Ok(page(&[1, 2], 1))]);
    let mut session = BrowseSession::new(source);
    session.refresh().await;

    let fetched = session.scrolled(Viewport::at_bottom(2000.0, 800.0)).await;

    assert!(!fetched);
    assert_eq!(session.source.calls().len(), 1);
}

#[tokio::test]
async fn test_scroll_before_first_fetch_does_nothing() {
    let source = ScriptedSource::new(vec![]);
    let mut session = BrowseSession::new(source);

    // No metadata yet, so there is no next page to ask for
    let fetched = session.scrolled(Viewport::at_bottom(2000.0, 800.0)).await;

    assert!(!fetched);
    assert!(session.source.calls().is_empty());
}

#[tokio::test]
async fn test_scroll_deduplicates_overlapping_page() {
    let source = ScriptedSource::new(vec![Ok(page(&[1, 2], 2)), Ok(page(&[2, 3], 2))]);
    let mut session = BrowseSession::new(source);
    session.refresh().await;

    session.scrolled(Viewport::at_bottom(2000.0, 800.0)).await;

    assert_eq!(roster_ids(&session), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_failed_pagination_keeps_roster_and_rearms() {
    let source = ScriptedSource::new(vec![
        Ok(page(&[1, 2], 3)),
        failure(),
        Ok(page(&[3], 3)),
    ]);
    let mut session = BrowseSession::new(source);
    session.refresh().await;

    session.scrolled(Viewport::at_bottom(2000.0, 800.0)).await;

    // Roster survives the failed page; no error propagates, only the
    // lifecycle records it
    assert_eq!(roster_ids(&session), vec![1, 2]);
    assert!(session.snapshot().lifecycle.is_failed());
    assert!(!session.snapshot().is_empty_failure());

    // The settlement left records on screen, so the guard re-armed and the
    // user can retry by scrolling again
    assert!(session.guard().is_ready());
    let fetched = session.scrolled(Viewport::at_bottom(2000.0, 800.0)).await;
    assert!(fetched);
    assert_eq!(roster_ids(&session), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_guard_rearms_after_successful_page() {
    let source = ScriptedSource::new(vec![Ok(page(&[1], 3)), Ok(page(&[2], 3))]);
    let mut session = BrowseSession::new(source);
    session.refresh().await;
    assert!(session.guard().is_ready());

    session.scrolled(Viewport::at_bottom(2000.0, 800.0)).await;
    assert!(session.guard().is_ready());
}

#[tokio::test]
async fn test_failed_fresh_leaves_guard_untouched() {
    let source = ScriptedSource::new(vec![failure(), Ok(page(&[1], 2))]);
    let mut session = BrowseSession::new(source);

    session.search("nobody").await;
    // Empty roster: the coarse re-enable signal has nothing to arm on,
    // the guard just keeps its previous state
    assert!(session.guard().is_ready());

    session.search("rick").await;
    assert_eq!(roster_ids(&session), vec![1]);
    assert!(session.guard().is_ready());
}
