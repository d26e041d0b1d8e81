use shoutouts_core::contract::{Identity, MockGitHubApi};
use shoutouts_core::identity::resolve_identities;
use shoutouts_core::ShoutoutError;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn roster(logins: &[&str]) -> Vec<Identity> {
    logins.iter().map(|l| Identity::new(*l)).collect()
}

#[tokio::test]
async fn test_overlapping_login_is_resolved_once() {
    let mut api = MockGitHubApi::new();
    api.expect_list_team_members()
        .withf(|org, team| org == "vmware-tanzu" && team == "tce-owners")
        .times(1)
        .returning(|_, _| Ok(roster(&["alice", "bob"])));
    api.expect_get_user()
        .withf(|login| login == "carol")
        .times(1)
        .returning(|login| Ok(Identity::new(login).with_name("Carol")));

    let set = resolve_identities(
        &api,
        "vmware-tanzu",
        &names(&["tce-owners"]),
        &names(&["bob", "carol"]),
    )
    .await
    .expect("resolution should succeed");

    let logins: Vec<&str> = set.logins().collect();
    assert_eq!(logins, vec!["alice", "bob", "carol"]);
    assert_eq!(set.len(), 3, "bob must appear exactly once");
}

#[tokio::test]
async fn test_team_then_explicit_order_is_stable() {
    let mut api = MockGitHubApi::new();
    api.expect_list_team_members()
        .returning(|_, team| match team {
            "maintainers" => Ok(roster(&["zoe", "amir"])),
            "docs" => Ok(roster(&["amir", "li"])),
            other => Err(format!("unexpected team {other}").into()),
        });
    api.expect_get_user()
        .returning(|login| Ok(Identity::new(login)));

    let teams = names(&["maintainers", "docs"]);
    let devs = names(&["bo", "zoe", "bo"]);

    let first = resolve_identities(&api, "org", &teams, &devs).await.unwrap();
    let second = resolve_identities(&api, "org", &teams, &devs).await.unwrap();

    let order: Vec<&str> = first.logins().collect();
    assert_eq!(order, vec!["zoe", "amir", "li", "bo"]);
    let again: Vec<&str> = second.logins().collect();
    assert_eq!(order, again, "re-running resolution must give the same order");
}

#[tokio::test]
async fn test_explicit_handles_only() {
    let mut api = MockGitHubApi::new();
    api.expect_list_team_members().never();
    api.expect_get_user()
        .returning(|login| Ok(Identity::new(login).with_name(login.to_uppercase())));

    let set = resolve_identities(&api, "org", &[], &names(&["nrb", "zubron"]))
        .await
        .unwrap();

    let listed: Vec<(&str, Option<&str>)> = set
        .iter()
        .map(|i| (i.login.as_str(), i.name.as_deref()))
        .collect();
    assert_eq!(listed, vec![("nrb", Some("NRB")), ("zubron", Some("ZUBRON"))]);
}

#[tokio::test]
async fn test_missing_team_is_resolution_error() {
    let mut api = MockGitHubApi::new();
    api.expect_list_team_members()
        .returning(|_, _| Err("404 Not Found".into()));
    api.expect_get_user().never();

    let err = resolve_identities(&api, "org", &names(&["ghost-team"]), &names(&["alice"]))
        .await
        .expect_err("missing team must fail");

    match err {
        ShoutoutError::Resolution { what, .. } => assert!(what.contains("ghost-team")),
        other => panic!("expected Resolution error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_user_is_resolution_error() {
    let mut api = MockGitHubApi::new();
    api.expect_get_user()
        .returning(|login| match login {
            "alice" => Ok(Identity::new("alice")),
            _ => Err("404 Not Found".into()),
        });

    let err = resolve_identities(&api, "org", &[], &names(&["alice", "nobody"]))
        .await
        .expect_err("unknown user must fail");

    assert!(matches!(err, ShoutoutError::Resolution { ref what, .. } if what.contains("nobody")));
}

#[tokio::test]
async fn test_repeated_explicit_handle_is_fetched_once() {
    let mut api = MockGitHubApi::new();
    api.expect_get_user()
        .withf(|login| login == "bo")
        .times(1)
        .returning(|login| Ok(Identity::new(login)));

    let set = resolve_identities(&api, "org", &[], &names(&["bo", "bo", "bo"]))
        .await
        .unwrap();

    assert_eq!(set.logins().collect::<Vec<_>>(), vec!["bo"]);
}
