//! Tests for the search controller

use super::*;
use crate::detail::DetailContent;
use crate::wiki::WikiError;
use proptest::prelude::*;

const DEBOUNCE: Duration = Duration::from_millis(250);

fn detail_controller() -> SearchController {
    SearchController::new(SelectionAction::Detail, 250, 2, false)
}

fn browser_controller() -> SearchController {
    SearchController::new(SelectionAction::Browser, 250, 2, false)
}

fn item(title: &str) -> SuggestionItem {
    SuggestionItem::new(
        title,
        format!("{} description", title),
        format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_")),
    )
}

fn search_seq(command: Option<Command>) -> u64 {
    match command {
        Some(Command::Fetch(FetchRequest::Search { seq, .. })) => seq,
        other => panic!("expected search request, got {:?}", other),
    }
}

/// Type `query`, let the debounce elapse and return the dispatched seq
fn type_and_fire(ctl: &mut SearchController, query: &str, now: Instant) -> u64 {
    ctl.handle_at(InputEvent::Input(query.to_string()), now);
    search_seq(ctl.tick(now + DEBOUNCE))
}

fn answer(ctl: &mut SearchController, seq: u64, titles: &[&str]) {
    ctl.apply(FetchResponse::Search {
        seq,
        items: titles.iter().map(|t| item(t)).collect(),
    });
}

fn titles(ctl: &SearchController) -> Vec<&str> {
    ctl.list()
        .items()
        .iter()
        .map(|i| i.title.as_str())
        .collect()
}

#[test]
fn test_burst_of_input_dispatches_only_final_query() {
    let mut ctl = detail_controller();
    let t0 = Instant::now();

    ctl.handle_at(InputEvent::Input("Pa".into()), t0);
    ctl.handle_at(InputEvent::Input("Par".into()), t0 + Duration::from_millis(100));
    ctl.handle_at(InputEvent::Input("Pari".into()), t0 + Duration::from_millis(200));
    ctl.handle_at(InputEvent::Input("Paris".into()), t0 + Duration::from_millis(300));

    assert_eq!(ctl.tick(t0 + Duration::from_millis(500)), None);
    assert_eq!(
        ctl.tick(t0 + Duration::from_millis(550)),
        Some(Command::Fetch(FetchRequest::Search {
            query: "Paris".into(),
            seq: 1
        }))
    );
    assert_eq!(ctl.tick(t0 + Duration::from_secs(5)), None);
}

#[test]
fn test_query_is_trimmed_before_dispatch() {
    let mut ctl = detail_controller();
    let t0 = Instant::now();

    ctl.handle_at(InputEvent::Input("  Rust  ".into()), t0);
    assert_eq!(
        ctl.tick(t0 + DEBOUNCE),
        Some(Command::Fetch(FetchRequest::Search {
            query: "Rust".into(),
            seq: 1
        }))
    );
    assert_eq!(ctl.query(), "Rust");
}

#[test]
fn test_short_query_clears_list_without_searching() {
    let mut ctl = detail_controller();
    let t0 = Instant::now();
    let seq = type_and_fire(&mut ctl, "Paris", t0);
    answer(&mut ctl, seq, &["Paris", "Paris, Texas"]);
    assert!(ctl.list().is_visible());

    ctl.handle_at(InputEvent::Input("P".into()), t0 + Duration::from_secs(1));

    assert!(ctl.list().is_empty());
    assert!(!ctl.is_searching());
    assert_eq!(ctl.tick(t0 + Duration::from_secs(10)), None);
}

#[test]
fn test_whitespace_only_query_counts_as_empty() {
    let mut ctl = detail_controller();
    let t0 = Instant::now();

    ctl.handle_at(InputEvent::Input("     ".into()), t0);

    assert_eq!(ctl.tick(t0 + DEBOUNCE), None);
    assert!(ctl.list().is_empty());
}

#[test]
fn test_short_query_discards_in_flight_response() {
    let mut ctl = detail_controller();
    let t0 = Instant::now();
    let seq = type_and_fire(&mut ctl, "Paris", t0);

    ctl.handle_at(InputEvent::Input("".into()), t0 + Duration::from_secs(1));
    answer(&mut ctl, seq, &["Paris"]);

    assert!(ctl.list().is_empty());
}

#[test]
fn test_stale_response_is_discarded() {
    let mut ctl = detail_controller();
    let t0 = Instant::now();
    let first = type_and_fire(&mut ctl, "Par", t0);
    let second = type_and_fire(&mut ctl, "Paris", t0 + Duration::from_secs(1));
    assert!(second > first);

    answer(&mut ctl, second, &["Paris"]);
    answer(&mut ctl, first, &["Parrot", "Parachute"]);

    assert_eq!(titles(&ctl), vec!["Paris"]);
}

#[test]
fn test_older_response_ignored_while_newer_pending() {
    let mut ctl = detail_controller();
    let t0 = Instant::now();
    let first = type_and_fire(&mut ctl, "Par", t0);
    let _second = type_and_fire(&mut ctl, "Paris", t0 + Duration::from_secs(1));

    answer(&mut ctl, first, &["Parrot"]);

    assert!(ctl.list().is_empty());
    assert!(ctl.is_searching());
}

#[test]
fn test_escape_clears_list_and_drops_late_response() {
    let mut ctl = detail_controller();
    let t0 = Instant::now();
    let seq = type_and_fire(&mut ctl, "Paris", t0);

    ctl.handle_at(InputEvent::Escape, t0 + Duration::from_secs(1));
    answer(&mut ctl, seq, &["Paris"]);

    assert!(ctl.list().is_empty());
    assert!(!ctl.is_searching());
}

#[test]
fn test_escape_cancels_pending_debounce() {
    let mut ctl = detail_controller();
    let t0 = Instant::now();

    ctl.handle_at(InputEvent::Input("Paris".into()), t0);
    ctl.handle_at(InputEvent::Escape, t0 + Duration::from_millis(100));

    assert_eq!(ctl.tick(t0 + Duration::from_secs(1)), None);
}

#[test]
fn test_outside_click_clears_list() {
    let mut ctl = detail_controller();
    let t0 = Instant::now();
    let seq = type_and_fire(&mut ctl, "Paris", t0);
    answer(&mut ctl, seq, &["Paris", "Paris Hilton"]);

    ctl.handle_at(InputEvent::OutsideClick, t0 + Duration::from_secs(1));

    assert!(ctl.list().is_empty());
}

#[test]
fn test_failed_search_clears_list() {
    let mut ctl = detail_controller();
    let t0 = Instant::now();
    let first = type_and_fire(&mut ctl, "Paris", t0);
    answer(&mut ctl, first, &["Paris"]);

    let second = type_and_fire(&mut ctl, "Parisian", t0 + Duration::from_secs(1));
    ctl.apply(FetchResponse::SearchFailed {
        seq: second,
        error: WikiError::Network("connection reset".into()),
    });

    assert!(ctl.list().is_empty());
    assert!(!ctl.is_searching());
}

#[test]
fn test_empty_result_clears_list() {
    let mut ctl = detail_controller();
    let t0 = Instant::now();
    let seq = type_and_fire(&mut ctl, "xqzzyv", t0);

    answer(&mut ctl, seq, &[]);

    assert!(ctl.list().is_empty());
    assert!(!ctl.list().is_visible());
}

#[test]
fn test_arrows_move_highlight_and_enter_picks_it() {
    let mut ctl = detail_controller();
    let t0 = Instant::now();
    let seq = type_and_fire(&mut ctl, "Paris", t0);
    answer(&mut ctl, seq, &["Paris", "Paris, Texas", "Paris Hilton"]);

    ctl.handle(InputEvent::ArrowDown);
    ctl.handle(InputEvent::ArrowDown);
    ctl.handle(InputEvent::ArrowDown);
    ctl.handle(InputEvent::ArrowUp);
    assert_eq!(ctl.list().active(), Some(1));

    let command = ctl.handle(InputEvent::Enter);
    assert!(matches!(
        command,
        Some(Command::Fetch(FetchRequest::Article { ref title, .. })) if title == "Paris, Texas"
    ));
    assert!(ctl.list().is_empty());
}

#[test]
fn test_enter_without_highlight_picks_first() {
    let mut ctl = browser_controller();
    let t0 = Instant::now();
    let seq = type_and_fire(&mut ctl, "Paris", t0);
    answer(&mut ctl, seq, &["Paris", "Paris, Texas"]);

    assert_eq!(
        ctl.handle(InputEvent::Enter),
        Some(Command::OpenUrl("https://en.wikipedia.org/wiki/Paris".into()))
    );
}

#[test]
fn test_enter_on_empty_list_does_nothing() {
    let mut ctl = detail_controller();
    assert_eq!(ctl.handle(InputEvent::Enter), None);
    assert_eq!(ctl.view(), View::List);
}

#[test]
fn test_click_selects_row() {
    let mut ctl = browser_controller();
    let t0 = Instant::now();
    let seq = type_and_fire(&mut ctl, "Paris", t0);
    answer(&mut ctl, seq, &["Paris", "Paris, Texas"]);

    assert_eq!(
        ctl.handle(InputEvent::Click(1)),
        Some(Command::OpenUrl(
            "https://en.wikipedia.org/wiki/Paris,_Texas".into()
        ))
    );
    assert!(ctl.list().is_empty());
}

#[test]
fn test_click_out_of_range_is_ignored() {
    let mut ctl = browser_controller();
    let t0 = Instant::now();
    let seq = type_and_fire(&mut ctl, "Paris", t0);
    answer(&mut ctl, seq, &["Paris"]);

    assert_eq!(ctl.handle(InputEvent::Click(5)), None);
    assert_eq!(ctl.list().len(), 1);
}

#[test]
fn test_selection_drops_pending_search() {
    let mut ctl = browser_controller();
    let t0 = Instant::now();
    let seq = type_and_fire(&mut ctl, "Paris", t0);
    answer(&mut ctl, seq, &["Paris"]);

    ctl.handle_at(InputEvent::Input("Paris ".into()), t0 + Duration::from_secs(1));
    ctl.handle_at(InputEvent::Enter, t0 + Duration::from_secs(1));

    assert!(!ctl.is_searching());
    assert_eq!(ctl.tick(t0 + Duration::from_secs(5)), None);
}

#[test]
fn test_browser_focus_reshows_recent_results() {
    let mut ctl = browser_controller();
    let t0 = Instant::now();
    let seq = type_and_fire(&mut ctl, "Paris", t0);
    answer(&mut ctl, seq, &["Paris", "Paris, Texas"]);

    ctl.handle_at(InputEvent::OutsideClick, t0 + Duration::from_secs(1));
    assert!(ctl.list().is_empty());

    ctl.handle_at(InputEvent::Focus, t0 + Duration::from_secs(2));

    assert_eq!(titles(&ctl), vec!["Paris", "Paris, Texas"]);
    assert_eq!(ctl.list().active(), None);
    assert_eq!(ctl.tick(t0 + Duration::from_secs(5)), None);
}

#[test]
fn test_browser_focus_refetches_when_configured() {
    let mut ctl = SearchController::new(SelectionAction::Browser, 250, 2, true);
    let t0 = Instant::now();
    let seq = type_and_fire(&mut ctl, "Paris", t0);
    answer(&mut ctl, seq, &["Paris"]);
    ctl.handle_at(InputEvent::Escape, t0 + Duration::from_secs(1));

    ctl.handle_at(InputEvent::Focus, t0 + Duration::from_secs(2));

    assert_eq!(titles(&ctl), vec!["Paris"]);
    let next = search_seq(ctl.tick(t0 + Duration::from_secs(2) + DEBOUNCE));
    assert!(next > seq);
}

#[test]
fn test_browser_focus_searches_when_nothing_recent() {
    let mut ctl = browser_controller();
    let t0 = Instant::now();
    let seq = type_and_fire(&mut ctl, "Paris", t0);
    ctl.apply(FetchResponse::SearchFailed {
        seq,
        error: WikiError::Status { code: 503 },
    });

    ctl.handle_at(InputEvent::Focus, t0 + Duration::from_secs(1));

    assert!(ctl.is_searching());
    assert!(ctl.tick(t0 + Duration::from_secs(1) + DEBOUNCE).is_some());
}

#[test]
fn test_browser_focus_with_short_query_does_nothing() {
    let mut ctl = browser_controller();
    let t0 = Instant::now();
    ctl.handle_at(InputEvent::Input("P".into()), t0);

    ctl.handle_at(InputEvent::Focus, t0);

    assert!(!ctl.is_searching());
    assert!(ctl.list().is_empty());
}

#[test]
fn test_detail_focus_does_not_reshow() {
    let mut ctl = detail_controller();
    let t0 = Instant::now();
    let seq = type_and_fire(&mut ctl, "Paris", t0);
    answer(&mut ctl, seq, &["Paris"]);
    ctl.handle_at(InputEvent::Escape, t0 + Duration::from_secs(1));

    ctl.handle_at(InputEvent::Focus, t0 + Duration::from_secs(2));

    assert!(ctl.list().is_empty());
    assert!(!ctl.is_searching());
}

#[test]
fn test_detail_selection_opens_loading_article() {
    let mut ctl = detail_controller();
    let t0 = Instant::now();
    let seq = type_and_fire(&mut ctl, "Paris", t0);
    answer(&mut ctl, seq, &["Paris"]);

    let command = ctl.handle(InputEvent::Enter);

    assert_eq!(
        command,
        Some(Command::Fetch(FetchRequest::Article {
            title: "Paris".into(),
            seq: 1
        }))
    );
    assert_eq!(ctl.view(), View::Detail);
    assert!(ctl.detail().is_loading());
    assert_eq!(
        ctl.current_url(),
        Some("https://en.wikipedia.org/wiki/Paris")
    );
}

#[test]
fn test_article_response_fills_detail() {
    let mut ctl = detail_controller();
    let Command::Fetch(FetchRequest::Article { seq, .. }) =
        ctl.show_detail("Paris".into(), "https://en.wikipedia.org/wiki/Paris".into())
    else {
        panic!("expected article request");
    };

    ctl.apply(FetchResponse::Article {
        seq,
        extract: Some("Paris is the capital of France.".into()),
    });

    let article = ctl.detail().article().expect("article open");
    assert_eq!(
        article.content,
        DetailContent::Loaded("Paris is the capital of France.".into())
    );
}

#[test]
fn test_missing_extract_shows_unavailable() {
    let mut ctl = detail_controller();
    let Command::Fetch(FetchRequest::Article { seq, .. }) =
        ctl.show_detail("Stub".into(), "https://en.wikipedia.org/wiki/Stub".into())
    else {
        panic!("expected article request");
    };

    ctl.apply(FetchResponse::Article { seq, extract: None });

    assert_eq!(
        ctl.detail().article().map(|a| &a.content),
        Some(&DetailContent::Unavailable)
    );
}

#[test]
fn test_article_failure_shows_failed() {
    let mut ctl = detail_controller();
    let Command::Fetch(FetchRequest::Article { seq, .. }) =
        ctl.show_detail("Paris".into(), "https://en.wikipedia.org/wiki/Paris".into())
    else {
        panic!("expected article request");
    };

    ctl.apply(FetchResponse::ArticleFailed {
        seq,
        error: WikiError::Parse("missing query".into()),
    });

    assert_eq!(
        ctl.detail().article().map(|a| &a.content),
        Some(&DetailContent::Failed)
    );
}

#[test]
fn test_stale_article_is_discarded_after_back() {
    let mut ctl = detail_controller();
    let Command::Fetch(FetchRequest::Article { seq, .. }) =
        ctl.show_detail("Paris".into(), "https://en.wikipedia.org/wiki/Paris".into())
    else {
        panic!("expected article request");
    };

    ctl.handle(InputEvent::Back);
    ctl.apply(FetchResponse::Article {
        seq,
        extract: Some("late".into()),
    });

    assert_eq!(ctl.view(), View::List);
    assert!(!ctl.detail().is_open());
}

#[test]
fn test_stale_article_is_discarded_after_reselect() {
    let mut ctl = detail_controller();
    let first = ctl.show_detail("Paris".into(), "u1".into());
    let second = ctl.show_detail("Lyon".into(), "u2".into());
    let (
        Command::Fetch(FetchRequest::Article { seq: s1, .. }),
        Command::Fetch(FetchRequest::Article { seq: s2, .. }),
    ) = (first, second)
    else {
        panic!("expected article requests");
    };

    ctl.apply(FetchResponse::Article {
        seq: s1,
        extract: Some("Paris text".into()),
    });
    assert!(ctl.detail().is_loading());

    ctl.apply(FetchResponse::Article {
        seq: s2,
        extract: Some("Lyon text".into()),
    });
    let article = ctl.detail().article().expect("article open");
    assert_eq!(article.title, "Lyon");
    assert_eq!(article.content, DetailContent::Loaded("Lyon text".into()));
}

#[test]
fn test_escape_in_detail_goes_back() {
    let mut ctl = detail_controller();
    ctl.show_detail("Paris".into(), "u".into());

    ctl.handle(InputEvent::Escape);

    assert_eq!(ctl.view(), View::List);
    assert!(!ctl.detail().is_open());
}

#[test]
fn test_typing_in_detail_returns_to_list() {
    let mut ctl = detail_controller();
    let t0 = Instant::now();
    ctl.show_detail("Paris".into(), "u".into());

    ctl.handle_at(InputEvent::Input("Lyon".into()), t0);

    assert_eq!(ctl.view(), View::List);
    assert!(ctl.tick(t0 + DEBOUNCE).is_some());
}

#[test]
fn test_arrows_scroll_detail() {
    let mut ctl = detail_controller();
    ctl.show_detail("Paris".into(), "u".into());
    ctl.detail_mut().scroll.update_bounds(100, 10);

    ctl.handle(InputEvent::ArrowDown);
    ctl.handle(InputEvent::ArrowDown);
    ctl.handle(InputEvent::ArrowUp);

    assert_eq!(ctl.detail().scroll.offset, 1);
}

#[test]
fn test_flush_fires_pending_search_now() {
    let mut ctl = detail_controller();
    ctl.handle(InputEvent::Input("Paris".into()));

    assert_eq!(
        ctl.flush(),
        Some(Command::Fetch(FetchRequest::Search {
            query: "Paris".into(),
            seq: 1
        }))
    );
    assert_eq!(ctl.flush(), None);
}

#[test]
fn test_from_config_uses_selection_action() {
    let mut config = Config::default();
    config.selection.action = SelectionAction::Browser;

    let ctl = SearchController::from_config(&config);

    assert_eq!(ctl.action(), SelectionAction::Browser);
}

#[derive(Debug, Clone)]
enum Step {
    Type(String),
    Wait(u64),
    Escape,
    Respond(u64),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        "[a-z]{0,5}".prop_map(Step::Type),
        (0u64..600).prop_map(Step::Wait),
        Just(Step::Escape),
        (1u64..10).prop_map(Step::Respond),
    ]
}

proptest! {
    /// Only the most recently dispatched search can populate the list,
    /// and never after Escape or a short query
    #[test]
    fn prop_list_only_shows_latest_dispatched(steps in prop::collection::vec(step(), 1..40)) {
        let mut ctl = detail_controller();
        let mut now = Instant::now();
        let mut latest: Option<u64> = None;

        for step in steps {
            match step {
                Step::Type(text) => {
                    ctl.handle_at(InputEvent::Input(text.clone()), now);
                    if text.len() < 2 {
                        latest = None;
                    }
                }
                Step::Wait(ms) => {
                    now += Duration::from_millis(ms);
                    if let Some(Command::Fetch(FetchRequest::Search { seq, .. })) = ctl.tick(now) {
                        latest = Some(seq);
                    }
                }
                Step::Escape => {
                    ctl.handle_at(InputEvent::Escape, now);
                    latest = None;
                }
                Step::Respond(seq) => {
                    let before = ctl.list().clone();
                    answer(&mut ctl, seq, &[format!("r{}", seq).as_str()]);
                    if latest == Some(seq) {
                        prop_assert_eq!(ctl.list().len(), 1);
                        latest = None;
                    } else {
                        prop_assert_eq!(ctl.list(), &before);
                    }
                }
            }
        }
    }
}
