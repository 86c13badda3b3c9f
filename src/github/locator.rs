//! URL parsing and identity wrappers for pull request submissions.

use url::Url;

use super::error::ResolveError;

const PULL_MARKER: &str = "pull";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, ResolveError> {
        if value.is_empty() {
            return Err(ResolveError::InvalidUrlFormat(
                "repository owner is empty".to_owned(),
            ));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, ResolveError> {
        if value.is_empty() {
            return Err(ResolveError::InvalidUrlFormat(
                "repository name is empty".to_owned(),
            ));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    pub(crate) fn parse(segment: &str) -> Result<Self, ResolveError> {
        if segment.is_empty() || !segment.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(ResolveError::InvalidUrlFormat(format!(
                "pull request number `{segment}` is not numeric"
            )));
        }

        let value = segment.parse::<u64>().map_err(|error| {
            ResolveError::InvalidUrlFormat(format!("pull request number `{segment}`: {error}"))
        })?;

        if value == 0 {
            return Err(ResolveError::InvalidUrlFormat(
                "pull request number must be positive".to_owned(),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Owner, repository, and number identified by a pull request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLocator {
    owner: RepositoryOwner,
    repository: RepositoryName,
    number: PullRequestNumber,
}

impl PullRequestLocator {
    /// Parses a pull request URL in the form
    /// `https://<host>/<owner>/<repo>/pull/<number>`.
    ///
    /// Only the leading four path segments are inspected, so links to a tab
    /// of the pull request (`/pull/12/files`) resolve to the same locator.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::InvalidUrlFormat` when the input does not start
    /// with a lowercase `https://`, when a path segment is missing or empty,
    /// when the third segment is not `pull`, or when the number is not a
    /// positive integer.
    ///
    /// # Example
    ///
    /// ```
    /// use assignment_archive::github::PullRequestLocator;
    ///
    /// let locator = PullRequestLocator::parse("https://github.com/org/repo/pull/42")
    ///     .expect("should parse pull request URL");
    /// assert_eq!(locator.owner().as_str(), "org");
    /// assert_eq!(locator.repository().as_str(), "repo");
    /// assert_eq!(locator.number().get(), 42);
    /// ```
    pub fn parse(input: &str) -> Result<Self, ResolveError> {
        let parsed = Url::parse(input)
            .map_err(|error| ResolveError::InvalidUrlFormat(format!("{input}: {error}")))?;

        if parsed.scheme() != "https" || !input.starts_with("https://") {
            return Err(ResolveError::InvalidUrlFormat(format!(
                "{input}: URL must start with `https://`"
            )));
        }

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(ResolveError::InvalidUrlFormat(format!(
                "{input}: URL must include a host"
            )));
        }

        let missing = || ResolveError::InvalidUrlFormat(format!("{input}: path is incomplete"));

        let mut segments = parsed.path_segments().ok_or_else(missing)?;

        let owner_segment = segments.next().ok_or_else(missing)?;
        let repository_segment = segments.next().ok_or_else(missing)?;
        let marker = segments.next().ok_or_else(missing)?;
        let number_segment = segments.next().ok_or_else(missing)?;

        if marker != PULL_MARKER {
            return Err(ResolveError::InvalidUrlFormat(format!(
                "{input}: expected `/{PULL_MARKER}/` after the repository name"
            )));
        }

        let owner = RepositoryOwner::new(owner_segment)?;
        let repository = RepositoryName::new(repository_segment)?;
        let number = PullRequestNumber::parse(number_segment)?;

        Ok(Self {
            owner,
            repository,
            number,
        })
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Pull request number.
    #[must_use]
    pub const fn number(&self) -> PullRequestNumber {
        self.number
    }

    pub(crate) fn commits_path(&self) -> String {
        format!(
            "/repos/{}/{}/pulls/{}/commits",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }
}
