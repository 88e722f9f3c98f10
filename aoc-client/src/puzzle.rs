//! The puzzle facade: cached input fetching and answer submission

use crate::cache::InputCache;
use crate::client::{AocClient, SubmissionResult};
use crate::error::AocError;
use crate::identity::PuzzleId;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use zeroize::Zeroizing;

/// Directory whose presence marks part 1 of the day as solved
pub const PART1_DONE_DIR: &str = ".finished-part1";

/// Attempts used by polling callers when the input may not be available yet
pub const RETRY_ATTEMPTS: u32 = 3;

/// Fixed delay between retry attempts; there is no backoff
pub const RETRY_DELAY: Duration = Duration::from_millis(200);

/// An answer value. Integers and strings are accepted and stringified on
/// submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer(String);

impl From<i64> for Answer {
    fn from(v: i64) -> Self {
        Answer(v.to_string())
    }
}

impl From<u64> for Answer {
    fn from(v: u64) -> Self {
        Answer(v.to_string())
    }
}

impl From<i32> for Answer {
    fn from(v: i32) -> Self {
        Answer(v.to_string())
    }
}

impl From<u32> for Answer {
    fn from(v: u32) -> Self {
        Answer(v.to_string())
    }
}

impl From<usize> for Answer {
    fn from(v: usize) -> Self {
        Answer(v.to_string())
    }
}

impl From<&str> for Answer {
    fn from(v: &str) -> Self {
        Answer(v.to_string())
    }
}

impl From<String> for Answer {
    fn from(v: String) -> Self {
        Answer(v)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated, ready-to-send submission produced by [`Puzzle::prepare`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    answer: String,
    part: u8,
}

impl Submission {
    /// The stringified answer
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// The part this submission targets
    pub fn part(&self) -> u8 {
        self.part
    }
}

/// One puzzle, bound to a session token.
///
/// Reads input through the local cache and submits answers. All I/O is
/// synchronous and blocking; the puzzle never prompts — interactive
/// confirmation between [`Puzzle::prepare`] and [`Puzzle::submit`] belongs to
/// the caller.
///
/// # Example
///
/// ```no_run
/// use aoc_client::{Puzzle, PuzzleId, SessionStore};
///
/// # fn main() -> Result<(), aoc_client::AocError> {
/// let session = SessionStore::new()?.load()?;
/// let puzzle = Puzzle::new(PuzzleId::new(2023, 1)?, session)?;
///
/// let input = puzzle.input()?;
///
/// let submission = puzzle.prepare(42i64, None)?;
/// let result = puzzle.submit(&submission)?;
/// println!("{:?}", result);
/// # Ok(())
/// # }
/// ```
pub struct Puzzle {
    id: PuzzleId,
    session: Zeroizing<String>,
    client: AocClient,
    cache: InputCache,
    marker_dir: PathBuf,
}

impl Puzzle {
    /// Create a puzzle with the default client and the current working
    /// directory as the cache/marker base.
    pub fn new(id: PuzzleId, session: impl Into<Zeroizing<String>>) -> Result<Self, AocError> {
        Self::builder(id, session).build()
    }

    /// Create a builder for overriding the client or working directory
    pub fn builder(id: PuzzleId, session: impl Into<Zeroizing<String>>) -> PuzzleBuilder {
        PuzzleBuilder {
            id,
            session: session.into(),
            client: None,
            workdir: PathBuf::from("."),
        }
    }

    /// The puzzle's identity
    pub fn id(&self) -> PuzzleId {
        self.id
    }

    /// The puzzle input, from the cache when possible.
    ///
    /// A present non-empty cache file is returned verbatim with no network
    /// call; otherwise the input is fetched, persisted to the cache, and a
    /// diagnostic note about the cache miss is logged. Repeated calls after a
    /// successful fetch never re-contact the network.
    ///
    /// # Errors
    ///
    /// Fetch errors per [`AocClient::fetch_input`]; `Io` if the cache cannot
    /// be read or written. The cache is left untouched when the fetch fails.
    pub fn input(&self) -> Result<String, AocError> {
        if let Some(data) = self.cache.get(self.id)? {
            return Ok(data);
        }

        let data = self.client.fetch_input(self.id, &self.session)?;
        tracing::warn!(
            "input for {} is not cached, saving data to {:?}...",
            self.id,
            self.cache.path(self.id)
        );
        self.cache.put(self.id, &data)?;
        Ok(data)
    }

    /// Validate an answer and resolve the part to submit against. Never
    /// issues an HTTP request.
    ///
    /// When `part` is omitted it defaults to 2 if the part-1 completion
    /// marker exists, else 1.
    ///
    /// # Errors
    ///
    /// `RefusedAnswer` if the answer renders to `""` or `"None"`;
    /// `InvalidPart` if an explicit part is outside {1, 2}.
    pub fn prepare(
        &self,
        answer: impl Into<Answer>,
        part: Option<u8>,
    ) -> Result<Submission, AocError> {
        let Answer(answer) = answer.into();
        if answer.is_empty() || answer == "None" {
            return Err(AocError::RefusedAnswer(answer));
        }

        let part = match part {
            Some(p @ 1..=2) => p,
            Some(p) => return Err(AocError::InvalidPart(p)),
            None => {
                if self.part1_done() {
                    2
                } else {
                    1
                }
            }
        };

        Ok(Submission { answer, part })
    }

    /// Send a prepared submission and classify the site's verdict.
    ///
    /// On `Correct` the part-1 completion marker is created if absent; it is
    /// never removed.
    pub fn submit(&self, submission: &Submission) -> Result<SubmissionResult, AocError> {
        let result =
            self.client
                .submit_answer(self.id, submission.part, &submission.answer, &self.session)?;

        if matches!(result, SubmissionResult::Correct) && !self.part1_done() {
            std::fs::create_dir_all(&self.marker_dir)?;
        }

        Ok(result)
    }

    fn part1_done(&self) -> bool {
        self.marker_dir.is_dir()
    }
}

/// Builder for a [`Puzzle`]
pub struct PuzzleBuilder {
    id: PuzzleId,
    session: Zeroizing<String>,
    client: Option<AocClient>,
    workdir: PathBuf,
}

impl PuzzleBuilder {
    /// Use a preconfigured client (e.g. one pointed at a mock server)
    pub fn client(mut self, client: AocClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Base directory for the input cache and the completion marker
    /// (defaults to the working directory)
    pub fn workdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = dir.into();
        self
    }

    /// Build the puzzle
    pub fn build(self) -> Result<Puzzle, AocError> {
        let client = match self.client {
            Some(c) => c,
            None => AocClient::new()?,
        };

        Ok(Puzzle {
            id: self.id,
            session: self.session,
            client,
            cache: InputCache::new(self.workdir.clone()),
            marker_dir: self.workdir.join(PART1_DONE_DIR),
        })
    }
}

/// Fetch input with a bounded retry loop: at most `attempts` tries separated
/// by a fixed `delay`. [`Puzzle::input`] itself never retries; this wrapper
/// exists for polling callers such as the countdown.
pub fn fetch_with_retry(
    puzzle: &Puzzle,
    attempts: u32,
    delay: Duration,
) -> Result<String, AocError> {
    let mut last_err = None;
    for attempt in 0..attempts.max(1) {
        if attempt > 0 {
            std::thread::sleep(delay);
        }
        match puzzle.input() {
            Ok(data) => return Ok(data),
            Err(e) => {
                tracing::warn!("failed to fetch input ({}), trying again...", e);
                last_err = Some(e);
            }
        }
    }
    // attempts.max(1) guarantees at least one iteration ran
    Err(last_err.expect("retry loop ran at least once"))
}
