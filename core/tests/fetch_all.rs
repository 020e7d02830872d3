mod common;

use common::{ids, page, ScriptedSource};
use taskboard_core::api::{fetch_all, FetchError, FetchOptions, Truncation};

#[tokio::test]
async fn concatenates_pages_in_order() {
    let source = ScriptedSource::new(vec![
        Ok(page(&["a", "b"], true)),
        Ok(page(&["c"], true)),
        Ok(page(&["d", "e"], false)),
    ]);

    let outcome = fetch_all(&source, &FetchOptions::default()).await.unwrap();

    assert!(outcome.is_complete());
    assert_eq!(outcome.pages, 3);
    assert_eq!(ids(&outcome.tasks), ["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn requests_sequential_pages_with_fixed_limit() {
    let source = ScriptedSource::new(vec![Ok(page(&["a"], true)), Ok(page(&[], false))]);
    let opts = FetchOptions {
        page_size: 250,
        ..FetchOptions::default()
    };

    fetch_all(&source, &opts).await.unwrap();

    let requests = source.requests();
    assert_eq!(requests.len(), 2);
    for (n, req) in requests.iter().enumerate() {
        assert_eq!(req.page, n as u32);
        assert_eq!(req.limit, 100);
        assert!(req.include_closed);
    }
}

#[tokio::test]
async fn single_empty_page_is_complete_and_empty() {
    let source = ScriptedSource::new(vec![Ok(page(&[], false))]);
    let outcome = fetch_all(&source, &FetchOptions::default()).await.unwrap();
    assert!(outcome.is_complete());
    assert!(outcome.tasks.is_empty());
    assert_eq!(outcome.pages, 1);
}

#[tokio::test]
async fn first_page_failure_is_an_error() {
    let source = ScriptedSource::new(vec![Err("status 500".to_string())]);

    let err = fetch_all(&source, &FetchOptions::default())
        .await
        .unwrap_err();

    let FetchError::FirstPage(inner) = err;
    assert!(inner.to_string().contains("status 500"));
    assert_eq!(source.requests().len(), 1);
}

#[tokio::test]
async fn later_page_failure_truncates() {
    let source = ScriptedSource::new(vec![
        Ok(page(&["a", "b"], true)),
        Ok(page(&["c"], true)),
        Err("status 502".to_string()),
        Ok(page(&["never"], false)),
    ]);

    let outcome = fetch_all(&source, &FetchOptions::default()).await.unwrap();

    assert!(!outcome.is_complete());
    assert_eq!(outcome.pages, 2);
    assert_eq!(ids(&outcome.tasks), ["a", "b", "c"]);
    assert_eq!(
        outcome.truncated,
        Some(Truncation::PageFailed {
            page: 2,
            reason: "status 502".to_string()
        })
    );
    assert_eq!(source.requests().len(), 3);
}

#[tokio::test]
async fn max_pages_stops_and_flags_incomplete() {
    let source = ScriptedSource::new(vec![
        Ok(page(&["a"], true)),
        Ok(page(&["b"], true)),
        Ok(page(&["c"], true)),
    ]);
    let opts = FetchOptions {
        max_pages: Some(2),
        ..FetchOptions::default()
    };

    let outcome = fetch_all(&source, &opts).await.unwrap();

    assert_eq!(ids(&outcome.tasks), ["a", "b"]);
    assert_eq!(outcome.truncated, Some(Truncation::MaxPagesReached { pages: 2 }));
    assert_eq!(source.requests().len(), 2);
}

#[tokio::test]
async fn max_pages_not_reached_is_complete() {
    let source = ScriptedSource::new(vec![Ok(page(&["a"], true)), Ok(page(&["b"], false))]);
    let opts = FetchOptions {
        max_pages: Some(2),
        ..FetchOptions::default()
    };

    let outcome = fetch_all(&source, &opts).await.unwrap();
    assert!(outcome.is_complete());
    assert_eq!(ids(&outcome.tasks), ["a", "b"]);
}
