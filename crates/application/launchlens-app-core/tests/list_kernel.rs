mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{launch, page, FakeSource, Reply};
use launchlens_app_core::{FetchTarget, LaunchListKernel, ListCommand, ListConfig};

fn kernel(source: &Arc<FakeSource>) -> LaunchListKernel<FakeSource> {
    LaunchListKernel::new(source.clone(), ListConfig::default())
}

#[tokio::test(start_paused = true)]
async fn rapid_typing_issues_one_search() {
    let source = Arc::new(FakeSource::new());
    source.reply(
        "search:apo",
        Duration::ZERO,
        Reply::Page(page(vec![launch("1", "Apollo")])),
    );
    let mut kernel = kernel(&source);

    kernel.dispatch(ListCommand::QueryChanged("a".into()));
    tokio::time::sleep(Duration::from_millis(100)).await;
    kernel.dispatch(ListCommand::QueryChanged("ap".into()));
    tokio::time::sleep(Duration::from_millis(100)).await;
    kernel.dispatch(ListCommand::QueryChanged("apo".into()));
    assert_eq!(kernel.state().search_query, "apo");

    tokio::time::sleep(Duration::from_millis(499)).await;
    kernel.tick();
    assert!(source.calls().is_empty());

    kernel.settle().await;
    assert_eq!(source.calls(), vec!["search:apo".to_string()]);
    let state = kernel.state();
    assert_eq!(state.launches.len(), 1);
    assert_eq!(state.last_target, Some(FetchTarget::Search("apo".into())));
    assert!(!state.loading);
}

#[tokio::test(start_paused = true)]
async fn blank_query_loads_upcoming() {
    let source = Arc::new(FakeSource::new());
    let mut kernel = kernel(&source);

    kernel.dispatch(ListCommand::QueryChanged("   ".into()));
    kernel.settle().await;

    assert_eq!(source.calls(), vec!["upcoming".to_string()]);
    assert_eq!(kernel.state().last_target, Some(FetchTarget::Upcoming));
}

#[tokio::test(start_paused = true)]
async fn empty_page_is_not_an_error() {
    let source = Arc::new(FakeSource::new());
    let mut kernel = kernel(&source);

    kernel.dispatch(ListCommand::Activate);
    assert!(kernel.state().shows_spinner());
    kernel.settle().await;

    let state = kernel.state();
    assert!(state.launches.is_empty());
    assert_eq!(state.error, None);
    assert!(!state.loading);
    assert!(!state.shows_spinner());
}

#[tokio::test(start_paused = true)]
async fn failed_search_keeps_previous_results() {
    let source = Arc::new(FakeSource::new());
    source.reply(
        "upcoming",
        Duration::ZERO,
        Reply::Page(page(vec![launch("a", "A"), launch("b", "B")])),
    );
    source.reply("search:x", Duration::ZERO, Reply::Status(500));
    let mut kernel = kernel(&source);

    kernel.dispatch(ListCommand::Activate);
    kernel.settle().await;
    kernel.dispatch(ListCommand::QueryChanged("x".into()));
    kernel.settle().await;

    let state = kernel.state();
    assert_eq!(state.launches.len(), 2);
    assert_eq!(state.error.as_deref(), Some(launchlens_config::LIST_LOAD_FAILED));
    assert!(!state.loading);
    assert!(!state.shows_blocking_error());
}

#[tokio::test(start_paused = true)]
async fn slow_stale_response_is_discarded() {
    let source = Arc::new(FakeSource::new());
    source.reply(
        "upcoming",
        Duration::from_secs(2),
        Reply::Page(page(vec![launch("old", "Old")])),
    );
    source.reply(
        "search:falcon",
        Duration::from_millis(10),
        Reply::Page(page(vec![launch("new", "New")])),
    );
    let mut kernel = kernel(&source);

    kernel.dispatch(ListCommand::Activate);
    kernel.dispatch(ListCommand::QueryChanged("falcon".into()));
    kernel.settle().await;

    let state = kernel.state();
    let ids: Vec<_> = state.launches.iter().map(|l| l.id.to_string()).collect();
    assert_eq!(ids, vec!["new".to_string()]);
    assert_eq!(state.search_query, "falcon");
    assert_eq!(
        source.calls(),
        vec!["upcoming".to_string(), "search:falcon".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn stale_completion_does_not_end_loading() {
    let source = Arc::new(FakeSource::new());
    source.reply(
        "search:x",
        Duration::from_secs(1),
        Reply::Page(page(vec![launch("found", "Found")])),
    );
    source.reply(
        "upcoming",
        Duration::from_secs(3),
        Reply::Page(page(vec![launch("fresh", "Fresh")])),
    );
    let mut kernel = kernel(&source);

    kernel.dispatch(ListCommand::QueryChanged("x".into()));
    tokio::time::sleep(Duration::from_millis(600)).await;
    kernel.tick();

    kernel.dispatch(ListCommand::Refresh);
    tokio::time::sleep(Duration::from_millis(1500)).await;
    kernel.tick();
    let state = kernel.state();
    assert!(state.loading);
    assert!(state.refreshing);
    assert!(state.launches.is_empty());

    kernel.settle().await;
    let state = kernel.state();
    assert!(!state.loading && !state.refreshing);
    assert_eq!(state.launches[0].id, "fresh");
}

#[tokio::test(start_paused = true)]
async fn refresh_clears_query_and_pending_search() {
    let source = Arc::new(FakeSource::new());
    let mut kernel = kernel(&source);

    kernel.dispatch(ListCommand::QueryChanged("star".into()));
    tokio::time::sleep(Duration::from_millis(100)).await;
    kernel.dispatch(ListCommand::Refresh);
    assert!(kernel.state().refreshing);
    kernel.settle().await;

    tokio::time::sleep(Duration::from_secs(1)).await;
    kernel.tick();

    assert_eq!(source.calls(), vec!["upcoming".to_string()]);
    let state = kernel.state();
    assert_eq!(state.search_query, "");
    assert!(!state.refreshing);
    assert!(!kernel.is_busy());
}

#[tokio::test(start_paused = true)]
async fn retry_without_error_does_nothing() {
    let source = Arc::new(FakeSource::new());
    let mut kernel = kernel(&source);

    kernel.dispatch(ListCommand::Activate);
    kernel.settle().await;
    kernel.dispatch(ListCommand::Retry);
    kernel.settle().await;

    assert_eq!(source.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn retry_repeats_the_failed_search() {
    let source = Arc::new(FakeSource::new());
    source.reply("search:x", Duration::ZERO, Reply::Status(503));
    source.reply(
        "search:x",
        Duration::ZERO,
        Reply::Page(page(vec![launch("x1", "X")])),
    );
    let mut kernel = kernel(&source);

    kernel.dispatch(ListCommand::QueryChanged("x".into()));
    kernel.settle().await;
    assert!(kernel.state().shows_blocking_error());

    kernel.dispatch(ListCommand::Retry);
    kernel.settle().await;

    assert_eq!(
        source.calls(),
        vec!["search:x".to_string(), "search:x".to_string()]
    );
    let state = kernel.state();
    assert_eq!(state.error, None);
    assert_eq!(state.launches.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn unchanged_query_does_not_search_again() {
    let source = Arc::new(FakeSource::new());
    let mut kernel = kernel(&source);

    kernel.dispatch(ListCommand::QueryChanged("apollo".into()));
    kernel.settle().await;
    kernel.dispatch(ListCommand::QueryChanged("apollo".into()));
    assert!(!kernel.is_busy());
    kernel.settle().await;

    tokio::time::sleep(Duration::from_secs(1)).await;
    kernel.tick();
    assert_eq!(source.calls(), vec!["search:apollo".to_string()]);

    kernel.dispatch(ListCommand::QueryChanged("apollo 11".into()));
    kernel.settle().await;
    assert_eq!(source.calls().len(), 2);
}
