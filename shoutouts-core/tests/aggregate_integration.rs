use chrono::{DateTime, TimeZone, Utc};
use shoutouts_core::aggregate::aggregate_pull_requests;
use shoutouts_core::contract::{MockGitHubApi, PullRequestRecord, RepositoryRef};
use shoutouts_core::ShoutoutError;

fn merged_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn closed_pr(repo: &str, number: u32, author: &str) -> PullRequestRecord {
    PullRequestRecord {
        author_login: author.to_string(),
        author_url: format!("https://github.com/{author}"),
        title: format!("PR {number} in {repo}"),
        url: format!("https://github.com/org/{repo}/pull/{number}"),
        merged_at: Some(merged_at()),
        state: "closed".to_string(),
    }
}

#[tokio::test]
async fn test_results_are_concatenated_in_scope_order() {
    let mut api = MockGitHubApi::new();
    api.expect_list_closed_pull_requests()
        .returning(|_, repo| match repo {
            "a" => Ok(vec![closed_pr("a", 1, "x"), closed_pr("a", 2, "y")]),
            "b" => Ok(vec![closed_pr("b", 7, "z")]),
            other => Err(format!("unexpected repo {other}").into()),
        });

    let scope = vec![RepositoryRef::new("org", "b"), RepositoryRef::new("org", "a")];
    let prs = aggregate_pull_requests(&api, &scope).await.unwrap();

    let urls: Vec<&str> = prs.iter().map(|p| p.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://github.com/org/b/pull/7",
            "https://github.com/org/a/pull/1",
            "https://github.com/org/a/pull/2",
        ]
    );
}

#[tokio::test]
async fn test_duplicate_repository_is_tolerated() {
    let mut api = MockGitHubApi::new();
    api.expect_list_closed_pull_requests()
        .times(2)
        .returning(|_, repo| Ok(vec![closed_pr(repo, 3, "x")]));

    let scope = vec![RepositoryRef::new("org", "a"), RepositoryRef::new("org", "a")];
    let prs = aggregate_pull_requests(&api, &scope).await.unwrap();

    assert_eq!(prs.len(), 2);
    assert_eq!(prs[0], prs[1]);
}

#[tokio::test]
async fn test_failure_names_repository_and_drops_partial_results() {
    let mut api = MockGitHubApi::new();
    api.expect_list_closed_pull_requests()
        .returning(|_, repo| match repo {
            "a" => Ok(vec![closed_pr("a", 1, "x")]),
            _ => Err("502 Bad Gateway".into()),
        });

    let scope = vec![RepositoryRef::new("org", "a"), RepositoryRef::new("org", "b")];
    let result = aggregate_pull_requests(&api, &scope).await;

    match result {
        Err(ShoutoutError::Aggregation { repository, .. }) => assert_eq!(repository, "org/b"),
        other => panic!("expected Aggregation error for org/b, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_scope_fetches_nothing() {
    let mut api = MockGitHubApi::new();
    api.expect_list_closed_pull_requests().never();

    let prs = aggregate_pull_requests(&api, &[]).await.unwrap();
    assert!(prs.is_empty());
}
