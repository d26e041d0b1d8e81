use shoutouts_core::contract::{MockGitHubApi, RepositoryRef};
use shoutouts_core::repository::resolve_repositories;
use shoutouts_core::ShoutoutError;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_explicit_repos_are_used_verbatim() {
    let mut api = MockGitHubApi::new();
    api.expect_list_team_repos().never();

    let repos = resolve_repositories(
        &api,
        "vmware-tanzu",
        &names(&["velero", "velero-plugin-for-aws", "velero"]),
        &names(&["velero-owners"]),
    )
    .await
    .unwrap();

    assert_eq!(
        repos,
        vec![
            RepositoryRef::new("vmware-tanzu", "velero"),
            RepositoryRef::new("vmware-tanzu", "velero-plugin-for-aws"),
            RepositoryRef::new("vmware-tanzu", "velero"),
        ]
    );
}

#[tokio::test]
async fn test_team_repos_are_appended_without_dedup() {
    let mut api = MockGitHubApi::new();
    api.expect_list_team_repos()
        .returning(|org, team| match team {
            "core" => Ok(vec![
                RepositoryRef::new(org, "community-edition"),
                RepositoryRef::new(org, "tanzu-framework"),
            ]),
            "docs" => Ok(vec![RepositoryRef::new(org, "community-edition")]),
            other => Err(format!("unknown team {other}").into()),
        });

    let repos = resolve_repositories(&api, "vmware-tanzu", &[], &names(&["core", "docs"]))
        .await
        .unwrap();

    let listed: Vec<String> = repos.iter().map(ToString::to_string).collect();
    assert_eq!(
        listed,
        vec![
            "vmware-tanzu/community-edition",
            "vmware-tanzu/tanzu-framework",
            "vmware-tanzu/community-edition",
        ]
    );
}

#[tokio::test]
async fn test_no_teams_and_no_repos_is_empty_scope() {
    let api = MockGitHubApi::new();
    let repos = resolve_repositories(&api, "org", &[], &[]).await.unwrap();
    assert!(repos.is_empty());
}

#[tokio::test]
async fn test_team_repo_failure_is_resolution_error() {
    let mut api = MockGitHubApi::new();
    api.expect_list_team_repos()
        .returning(|_, team| match team {
            "ok" => Ok(vec![]),
            _ => Err("403 Forbidden".into()),
        });

    let err = resolve_repositories(&api, "org", &[], &names(&["ok", "locked"]))
        .await
        .expect_err("forbidden team must fail");

    match err {
        ShoutoutError::Resolution { what, .. } => assert!(what.contains("locked")),
        other => panic!("expected Resolution error, got {other:?}"),
    }
}
