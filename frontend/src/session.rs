//! Upload session state machine.
//!
//! A session moves `Idle → Uploading → Complete → Idle`. The state is a
//! single tagged union so a file can only exist outside `Idle`, a share link
//! only inside `Complete`, and a full progress bar only once complete.
//!
//! This module knows nothing about timers: [`UploadSession::tick`] is the
//! pure transition a ticker drives. See [`crate::services::simulator`] for
//! the ticker wiring.

use rand::Rng;

use crate::config::{PROGRESS_STEP, SHARE_PATH, TOKEN_LENGTH};
use crate::types::{FileMeta, Phase};

/// Characters a link token is drawn from.
const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Current state of an upload session.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UploadState {
    #[default]
    Idle,
    /// Progress is always below 100 here.
    Uploading { file: FileMeta, progress: u8 },
    Complete { file: FileMeta, share_link: String },
}

impl UploadState {
    pub fn phase(&self) -> Phase {
        match self {
            UploadState::Idle => Phase::Idle,
            UploadState::Uploading { .. } => Phase::Uploading,
            UploadState::Complete { .. } => Phase::Complete,
        }
    }

    pub fn file(&self) -> Option<&FileMeta> {
        match self {
            UploadState::Idle => None,
            UploadState::Uploading { file, .. } | UploadState::Complete { file, .. } => Some(file),
        }
    }

    /// Progress percentage, 0 while idle and 100 once complete.
    pub fn progress(&self) -> u8 {
        match self {
            UploadState::Idle => 0,
            UploadState::Uploading { progress, .. } => *progress,
            UploadState::Complete { .. } => 100,
        }
    }

    /// Share link, empty unless complete.
    pub fn share_link(&self) -> &str {
        match self {
            UploadState::Complete { share_link, .. } => share_link,
            _ => "",
        }
    }
}

/// Result of a single progress tick.
#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// Progress moved to the contained percentage.
    Advanced(u8),
    /// Progress reached 100, the contained share link was generated.
    Completed(String),
    /// No upload is running; nothing changed.
    Ignored,
}

/// In-memory record of one upload lifecycle.
#[derive(Clone, Debug)]
pub struct UploadSession {
    state: UploadState,
    origin: String,
    step: u8,
}

impl UploadSession {
    /// Create an idle session whose links are rooted at `origin`.
    pub fn new(origin: impl Into<String>) -> Self {
        Self::with_step(origin, PROGRESS_STEP)
    }

    /// Create an idle session advancing by `step` points per tick.
    pub fn with_step(origin: impl Into<String>, step: u8) -> Self {
        Self {
            state: UploadState::Idle,
            origin: origin.into(),
            step: step.clamp(1, 100),
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// Begin a new upload from any phase, discarding the previous one.
    pub fn start(&mut self, file: FileMeta) {
        self.state = UploadState::Uploading { file, progress: 0 };
    }

    /// Advance the progress by one step.
    ///
    /// Reaching 100 completes the session with a freshly generated link.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        let UploadState::Uploading { file, progress } = &mut self.state else {
            return TickOutcome::Ignored;
        };

        let next = progress.saturating_add(self.step).min(100);
        if next < 100 {
            *progress = next;
            return TickOutcome::Advanced(next);
        }

        let link = share_link(&self.origin, &generate_token(rng));
        let file = std::mem::replace(file, FileMeta::new("", 0));
        self.state = UploadState::Complete {
            file,
            share_link: link.clone(),
        };
        TickOutcome::Completed(link)
    }

    /// Return to idle, forgetting the file and link.
    pub fn reset(&mut self) {
        self.state = UploadState::Idle;
    }
}

/// Draw a short random token for a share link.
///
/// Not collision resistant; the link is a demo identifier only.
pub fn generate_token<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..TOKEN_LENGTH)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

/// Build `{origin}/file/{token}`.
pub fn share_link(origin: &str, token: &str) -> String {
    format!("{}/{}/{}", origin.trim_end_matches('/'), SHARE_PATH, token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ORIGIN: &str = "https://share.example";

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn report() -> FileMeta {
        FileMeta::new("report.pdf", 1536)
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = UploadSession::new(ORIGIN);
        let state = session.state();

        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.file(), None);
        assert_eq!(state.progress(), 0);
        assert_eq!(state.share_link(), "");
    }

    #[test]
    fn test_start_begins_at_zero() {
        let mut session = UploadSession::new(ORIGIN);
        session.start(report());

        assert_eq!(session.state().phase(), Phase::Uploading);
        assert_eq!(session.state().progress(), 0);
        assert_eq!(session.state().file(), Some(&report()));
        assert_eq!(session.state().share_link(), "");
    }

    #[test]
    fn test_progress_is_linear_and_completes_at_exactly_100() {
        let mut session = UploadSession::new(ORIGIN);
        let mut rng = rng();
        session.start(report());

        let mut seen = vec![session.state().progress()];
        let link = loop {
            match session.tick(&mut rng) {
                TickOutcome::Advanced(p) => {
                    assert_eq!(session.state().phase(), Phase::Uploading);
                    seen.push(p);
                }
                TickOutcome::Completed(link) => break link,
                TickOutcome::Ignored => panic!("tick ignored while uploading"),
            }
        };

        assert_eq!(seen, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90]);
        assert_eq!(session.state().phase(), Phase::Complete);
        assert_eq!(session.state().progress(), 100);
        assert_eq!(session.state().share_link(), link);
        assert_eq!(session.state().file(), Some(&report()));
    }

    #[test]
    fn test_step_is_clamped_and_never_overshoots() {
        let mut session = UploadSession::with_step(ORIGIN, 30);
        let mut rng = rng();
        session.start(report());

        assert_eq!(session.tick(&mut rng), TickOutcome::Advanced(30));
        assert_eq!(session.tick(&mut rng), TickOutcome::Advanced(60));
        assert_eq!(session.tick(&mut rng), TickOutcome::Advanced(90));
        assert!(matches!(session.tick(&mut rng), TickOutcome::Completed(_)));
        assert_eq!(session.state().progress(), 100);
    }

    #[test]
    fn test_progress_ignores_file_size() {
        let mut rng = rng();
        let mut small = UploadSession::new(ORIGIN);
        let mut huge = UploadSession::new(ORIGIN);
        small.start(FileMeta::new("a.txt", 1));
        huge.start(FileMeta::new("b.iso", 8 * 1024 * 1024 * 1024));

        for _ in 0..5 {
            small.tick(&mut rng);
            huge.tick(&mut rng);
        }
        assert_eq!(small.state().progress(), huge.state().progress());
    }

    #[test]
    fn test_tick_outside_upload_is_ignored() {
        let mut rng = rng();
        let mut session = UploadSession::new(ORIGIN);
        assert_eq!(session.tick(&mut rng), TickOutcome::Ignored);
        assert_eq!(session.state(), &UploadState::Idle);

        session.start(report());
        while !matches!(session.tick(&mut rng), TickOutcome::Completed(_)) {}
        let completed = session.state().clone();

        assert_eq!(session.tick(&mut rng), TickOutcome::Ignored);
        assert_eq!(session.state(), &completed);
    }

    #[test]
    fn test_reset_from_every_phase() {
        let mut rng = rng();
        let mut session = UploadSession::new(ORIGIN);

        session.reset();
        assert_eq!(session.state(), &UploadState::Idle);

        session.start(report());
        session.tick(&mut rng);
        session.reset();
        assert_eq!(session.state(), &UploadState::Idle);

        session.start(report());
        while !matches!(session.tick(&mut rng), TickOutcome::Completed(_)) {}
        session.reset();
        assert_eq!(session.state(), &UploadState::Idle);
        assert_eq!(session.state().share_link(), "");
    }

    #[test]
    fn test_restart_from_complete_clears_link() {
        let mut rng = rng();
        let mut session = UploadSession::new(ORIGIN);
        session.start(report());
        while !matches!(session.tick(&mut rng), TickOutcome::Completed(_)) {}

        session.start(FileMeta::new("next.zip", 10));
        assert_eq!(session.state().phase(), Phase::Uploading);
        assert_eq!(session.state().progress(), 0);
        assert_eq!(session.state().share_link(), "");
        assert_eq!(session.state().file().map(|f| f.name.as_str()), Some("next.zip"));
    }

    #[test]
    fn test_share_link_shape() {
        let mut rng = rng();
        let mut session = UploadSession::new(ORIGIN);
        session.start(report());
        while !matches!(session.tick(&mut rng), TickOutcome::Completed(_)) {}

        let link = session.state().share_link();
        let token = link.strip_prefix("https://share.example/file/").unwrap();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.bytes().all(|b| TOKEN_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_share_link_does_not_double_slash() {
        assert_eq!(share_link("http://localhost:8080/", "abc123"), "http://localhost:8080/file/abc123");
        assert_eq!(share_link("http://localhost:8080", "abc123"), "http://localhost:8080/file/abc123");
    }
}
