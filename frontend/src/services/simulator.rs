//! Upload simulator.
//!
//! Couples an [`UploadSession`] to the page's collaborators: a [`Ticker`]
//! advancing the progress, a [`Notifier`] for toasts and a
//! [`ClipboardWriter`] for the share link.
//!
//! The running ticker's handle is stored next to the session and cancelled
//! explicitly on completion, reset, re-selection, teardown or drop, so at
//! most one ticker is ever alive. Each ticker is also tagged with a
//! generation, and callbacks from an older generation are ignored.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::services::clipboard::{BrowserClipboard, ClipboardWriter};
use crate::services::notifier::{Notifier, Toaster};
use crate::services::ticker::{IntervalTicker, Ticker, TickerHandle};
use crate::session::{TickOutcome, UploadSession, UploadState};
use crate::{
    format_size, AppError, AppResult, FileMeta, COPY_FAILED_MESSAGE, LINK_COPIED_MESSAGE,
    TICK_INTERVAL_MS, UPLOAD_COMPLETE_MESSAGE, UPLOAD_START_FAILED_MESSAGE,
};

/// Callback invoked with a snapshot after every state change.
pub type StateObserver = Rc<dyn Fn(&UploadState)>;

/// Simulator wired to the browser's interval timer, toasts and clipboard.
pub type BrowserSimulator = UploadSimulator<IntervalTicker, Toaster, BrowserClipboard>;

/// Simulated upload state machine with its collaborators.
///
/// Cloning is cheap and yields a handle to the same session.
pub struct UploadSimulator<T: Ticker, N: Notifier, C: ClipboardWriter> {
    inner: Rc<Inner<T, N, C>>,
}

struct Inner<T: Ticker, N: Notifier, C: ClipboardWriter> {
    session: RefCell<UploadSession>,
    active: RefCell<Option<T::Handle>>,
    generation: Cell<u64>,
    observer: RefCell<Option<StateObserver>>,
    rng: RefCell<StdRng>,
    period: Duration,
    ticker: T,
    notifier: N,
    clipboard: C,
}

impl<T, N, C> UploadSimulator<T, N, C>
where
    T: Ticker + 'static,
    N: Notifier + 'static,
    C: ClipboardWriter + 'static,
{
    /// Create an idle simulator generating links under `origin`.
    pub fn new(origin: impl Into<String>, ticker: T, notifier: N, clipboard: C) -> Self {
        Self::from_parts(
            UploadSession::new(origin),
            ticker,
            notifier,
            clipboard,
            StdRng::from_entropy(),
        )
    }

    /// Create a simulator from an explicit session and random source.
    pub fn from_parts(
        session: UploadSession,
        ticker: T,
        notifier: N,
        clipboard: C,
        rng: StdRng,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                session: RefCell::new(session),
                active: RefCell::new(None),
                generation: Cell::new(0),
                observer: RefCell::new(None),
                rng: RefCell::new(rng),
                period: Duration::from_millis(TICK_INTERVAL_MS),
                ticker,
                notifier,
                clipboard,
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UploadState {
        self.inner.session.borrow().state().clone()
    }

    /// Register the observer notified after every state change.
    ///
    /// Replaces any previous observer.
    pub fn subscribe(&self, observer: impl Fn(&UploadState) + 'static) {
        *self.inner.observer.borrow_mut() = Some(Rc::new(observer));
    }

    /// Whether a progress ticker is currently running.
    pub fn is_ticking(&self) -> bool {
        self.inner.active.borrow().is_some()
    }

    /// Start simulating the upload of `file`.
    ///
    /// Any upload already running or finished is discarded first.
    pub fn select_file(&self, file: FileMeta) {
        let inner = &self.inner;

        if inner.cancel_ticker() {
            log::info!("🔁 Upload restarted, previous ticker cancelled");
        }

        log::info!("📤 Uploading {} ({})", file.name, format_size(file.size));
        inner.session.borrow_mut().start(file);
        inner.publish();

        let generation = inner.generation.get();
        let weak: Weak<Inner<T, N, C>> = Rc::downgrade(inner);
        let on_tick: Rc<dyn Fn()> = Rc::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_tick(generation);
            }
        });

        match inner.ticker.start(inner.period, on_tick) {
            Ok(handle) => *inner.active.borrow_mut() = Some(handle),
            Err(e) => {
                log::error!("❌ {}", e);
                inner.session.borrow_mut().reset();
                inner.publish();
                inner.notifier.error(UPLOAD_START_FAILED_MESSAGE);
            }
        }
    }

    /// Write the share link to the clipboard.
    ///
    /// Only meaningful once complete; the session itself is never modified.
    pub async fn copy_link(&self) -> AppResult<()> {
        let link = {
            let session = self.inner.session.borrow();
            match session.state() {
                UploadState::Complete { share_link, .. } => share_link.clone(),
                other => return Err(AppError::NoShareLink(other.phase())),
            }
        };

        match self.inner.clipboard.write_text(&link).await {
            Ok(()) => {
                log::info!("📋 Link copied: {}", link);
                self.inner.notifier.success(LINK_COPIED_MESSAGE);
                Ok(())
            }
            Err(e) => {
                log::warn!("⚠️  {}", e);
                self.inner.notifier.error(COPY_FAILED_MESSAGE);
                Err(e)
            }
        }
    }

    /// Return to idle from any phase.
    pub fn reset(&self) {
        self.inner.cancel_ticker();
        self.inner.session.borrow_mut().reset();
        log::info!("🔄 Upload session reset");
        self.inner.publish();
    }

    /// Stop ticking and detach the observer, for when the view goes away.
    pub fn teardown(&self) {
        if self.inner.cancel_ticker() {
            log::debug!("Ticker cancelled on teardown");
        }
        self.inner.observer.borrow_mut().take();
    }
}

impl<T: Ticker, N: Notifier, C: ClipboardWriter> Clone for UploadSimulator<T, N, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Ticker, N: Notifier, C: ClipboardWriter> Inner<T, N, C> {
    fn on_tick(&self, generation: u64) {
        if generation != self.generation.get() {
            log::debug!("Stale tick from ticker #{} ignored", generation);
            return;
        }

        let outcome = {
            let mut rng = self.rng.borrow_mut();
            self.session.borrow_mut().tick(&mut *rng)
        };

        match outcome {
            TickOutcome::Advanced(progress) => {
                log::debug!("⏳ Upload progress {}%", progress);
                self.publish();
            }
            TickOutcome::Completed(link) => {
                self.cancel_ticker();
                log::info!("✅ Upload complete, share link {}", link);
                self.publish();
                self.notifier.success(UPLOAD_COMPLETE_MESSAGE);
            }
            TickOutcome::Ignored => {
                if self.cancel_ticker() {
                    log::warn!("Tick outside an upload, ticker cancelled");
                }
            }
        }
    }

    /// Cancel the running ticker, returning whether one was running.
    fn cancel_ticker(&self) -> bool {
        self.generation.set(self.generation.get() + 1);
        let handle = self.active.borrow_mut().take();
        match handle {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    fn publish(&self) {
        let observer = self.observer.borrow().clone();
        if let Some(observer) = observer {
            let state = self.session.borrow().state().clone();
            observer(&state);
        }
    }
}

impl<T: Ticker, N: Notifier, C: ClipboardWriter> Drop for Inner<T, N, C> {
    fn drop(&mut self) {
        if let Some(handle) = self.active.get_mut().take() {
            handle.cancel();
        }
    }
}
