//! Behavioural tests for deadline-bounded commit resolution.

#[path = "support/runtime.rs"]
mod runtime;

use assignment_archive::github::models::test_support::api_commit_json;
use assignment_archive::{
    CutoffZone, GitHubSettings, HttpCommitGateway, PullRequestCommitResolver, ResolveError,
    ResolvedCommit,
};
use chrono::{FixedOffset, NaiveDateTime};
use http::header::AUTHORIZATION;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use runtime::{SharedRuntime, ensure_runtime_and_server};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

#[derive(ScenarioState, Default)]
struct ResolutionState {
    runtime: Slot<SharedRuntime>,
    server: Slot<MockServer>,
    token: Slot<String>,
    resolved: Slot<ResolvedCommit>,
    error: Slot<ResolveError>,
}

#[fixture]
fn resolution_state() -> ResolutionState {
    ResolutionState::default()
}

/// Matches requests whose `Authorization` header is present but empty.
struct EmptyAuthorization;

impl Match for EmptyAuthorization {
    fn matches(&self, request: &Request) -> bool {
        request
            .headers
            .get(AUTHORIZATION)
            .is_some_and(|value| value.as_bytes().is_empty())
    }
}

fn three_commits() -> serde_json::Value {
    json!([
        api_commit_json("a1", "2024-01-09T10:00:00+09:00"),
        api_commit_json("b2", "2024-01-10T11:00:00+09:00"),
        api_commit_json("c3", "2024-01-11T09:00:00+09:00"),
    ])
}

fn commits_path(pr: u64) -> String {
    format!("/repos/org/repo/pulls/{pr}/commits")
}

fn prepare(state: &ResolutionState) -> Result<SharedRuntime, ResolveError> {
    ensure_runtime_and_server(&state.runtime, &state.server).map_err(|error| ResolveError::Io {
        message: format!("failed to prepare scenario: {error}"),
    })
}

fn mount(state: &ResolutionState, runtime: &SharedRuntime, mock: Mock) -> Result<(), ResolveError> {
    state
        .server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .ok_or_else(|| ResolveError::Api {
            message: "mock server not initialised".to_owned(),
        })
}

#[given("a mock GitHub API listing three commits on pull request {pr:u64}")]
fn seed_commits(resolution_state: &ResolutionState, pr: u64) -> Result<(), ResolveError> {
    let runtime = prepare(resolution_state)?;

    let mock = Mock::given(method("GET"))
        .and(path(commits_path(pr)))
        .and(query_param("per_page", "100"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(three_commits()));

    mount(resolution_state, &runtime, mock)
}

#[given("a mock GitHub API accepting anonymous requests for pull request {pr:u64}")]
fn seed_anonymous_commits(resolution_state: &ResolutionState, pr: u64) -> Result<(), ResolveError> {
    let runtime = prepare(resolution_state)?;

    let mock = Mock::given(method("GET"))
        .and(path(commits_path(pr)))
        .and(EmptyAuthorization)
        .respond_with(ResponseTemplate::new(200).set_body_json(three_commits()));

    mount(resolution_state, &runtime, mock)
}

#[given("a mock GitHub API that rejects the token for pull request {pr:u64}")]
fn seed_rejecting_server(resolution_state: &ResolutionState, pr: u64) -> Result<(), ResolveError> {
    let runtime = prepare(resolution_state)?;

    let mock = Mock::given(method("GET"))
        .and(path(commits_path(pr)))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Bad credentials" })),
        );

    mount(resolution_state, &runtime, mock)
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("an access token {token}")]
fn remember_token(resolution_state: &ResolutionState, token: String) {
    resolution_state
        .token
        .set(token.trim_matches('"').to_owned());
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[when("the submission {pr_url} is resolved at {cutoff} in zone {zone}")]
fn resolve_submission(
    resolution_state: &ResolutionState,
    pr_url: String,
    cutoff: String,
    zone: String,
) -> Result<(), ResolveError> {
    let server_url = resolution_state
        .server
        .with_ref(MockServer::uri)
        .ok_or_else(|| ResolveError::Api {
            message: "mock server URL missing".to_owned(),
        })?;
    let runtime = resolution_state
        .runtime
        .get()
        .ok_or_else(|| ResolveError::Api {
            message: "runtime not initialised".to_owned(),
        })?;

    let raw_cutoff = cutoff.trim_matches('"');
    let deadline = raw_cutoff
        .parse::<NaiveDateTime>()
        .map_err(|_| ResolveError::InvalidCutoff {
            value: raw_cutoff.to_owned(),
        })?;
    let offset = zone
        .trim_matches('"')
        .parse::<FixedOffset>()
        .map_err(|error| ResolveError::Configuration {
            message: format!("scenario zone {zone} is invalid: {error}"),
        })?;

    let settings = GitHubSettings::new(server_url, resolution_state.token.get().unwrap_or_default());
    let url = pr_url.trim_matches('"').to_owned();

    let result = runtime.block_on(async {
        let gateway = HttpCommitGateway::new(&settings)?;
        let resolver =
            PullRequestCommitResolver::new(&gateway).with_zone(CutoffZone::Fixed(offset));
        resolver.resolve_last_commit_before(&url, deadline).await
    });

    match result {
        Ok(resolved) => {
            drop(resolution_state.error.take());
            resolution_state.resolved.set(resolved);
        }
        Err(error) => {
            drop(resolution_state.resolved.take());
            resolution_state.error.set(error);
        }
    }

    Ok(())
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the resolved commit is {expected}")]
fn assert_resolved(resolution_state: &ResolutionState, expected: String) -> Result<(), ResolveError> {
    let expected_hash = expected.trim_matches('"');
    let actual = resolution_state
        .resolved
        .with_ref(|resolved| resolved.hash.as_str().to_owned())
        .ok_or_else(|| ResolveError::Api {
            message: format!(
                "expected commit {expected_hash}, got error {:?}",
                resolution_state.error.get()
            ),
        })?;

    if actual == expected_hash {
        Ok(())
    } else {
        Err(ResolveError::Api {
            message: format!("expected commit {expected_hash} but resolved {actual}"),
        })
    }
}

fn take_error(resolution_state: &ResolutionState) -> Result<ResolveError, ResolveError> {
    resolution_state
        .error
        .with_ref(Clone::clone)
        .ok_or_else(|| ResolveError::Api {
            message: "expected resolution to fail".to_owned(),
        })
}

#[then("resolution fails because no commit qualifies")]
fn assert_no_commit(resolution_state: &ResolutionState) -> Result<(), ResolveError> {
    match take_error(resolution_state)? {
        ResolveError::NoQualifyingCommit { .. } => Ok(()),
        other => Err(ResolveError::Api {
            message: format!("expected NoQualifyingCommit, got {other:?}"),
        }),
    }
}

#[then("resolution fails because the URL is malformed")]
fn assert_malformed_url(resolution_state: &ResolutionState) -> Result<(), ResolveError> {
    match take_error(resolution_state)? {
        ResolveError::InvalidUrlFormat(_) => Ok(()),
        other => Err(ResolveError::Api {
            message: format!("expected InvalidUrlFormat, got {other:?}"),
        }),
    }
}

#[then("resolution fails with an authentication error")]
fn assert_authentication_error(resolution_state: &ResolutionState) -> Result<(), ResolveError> {
    match take_error(resolution_state)? {
        ResolveError::Authentication { message } if message.contains("Bad credentials") => Ok(()),
        other => Err(ResolveError::Api {
            message: format!("expected Authentication mentioning credentials, got {other:?}"),
        }),
    }
}

#[scenario(path = "tests/features/commit_resolution.feature", index = 0)]
fn latest_commit_before_deadline(resolution_state: ResolutionState) {
    let _ = resolution_state;
}

#[scenario(path = "tests/features/commit_resolution.feature", index = 1)]
fn deadline_before_every_commit(resolution_state: ResolutionState) {
    let _ = resolution_state;
}

#[scenario(path = "tests/features/commit_resolution.feature", index = 2)]
fn malformed_url_is_rejected(resolution_state: ResolutionState) {
    let _ = resolution_state;
}

#[scenario(path = "tests/features/commit_resolution.feature", index = 3)]
fn anonymous_request_sends_empty_header(resolution_state: ResolutionState) {
    let _ = resolution_state;
}

#[scenario(path = "tests/features/commit_resolution.feature", index = 4)]
fn rejected_token_is_authentication_failure(resolution_state: ResolutionState) {
    let _ = resolution_state;
}
