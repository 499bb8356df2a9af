//! Repeating timers driving the simulated upload.
//!
//! [`Ticker`] is the seam between the upload simulator and the host event
//! loop. In the browser, [`IntervalTicker`] maps onto `setInterval` through
//! Leptos' helpers; tests substitute a manually fired ticker.

use std::rc::Rc;
use std::time::Duration;

use leptos::set_interval_with_handle;
use leptos_dom::helpers::IntervalHandle;

use crate::{AppError, AppResult};

/// Starts cancellable repeating tasks.
pub trait Ticker {
    type Handle: TickerHandle + 'static;

    /// Call `on_tick` every `period` until the returned handle is cancelled.
    fn start(&self, period: Duration, on_tick: Rc<dyn Fn()>) -> AppResult<Self::Handle>;
}

/// Handle of a running repeating task.
pub trait TickerHandle {
    /// Stop the task. No tick fires afterwards.
    fn cancel(self);
}

/// Browser ticker backed by `window.setInterval`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    type Handle = IntervalTicket;

    fn start(&self, period: Duration, on_tick: Rc<dyn Fn()>) -> AppResult<Self::Handle> {
        let handle = set_interval_with_handle(move || on_tick(), period)
            .map_err(|e| AppError::Timer(format!("{:?}", e)))?;
        log::debug!("⏱️  Interval started every {}ms", period.as_millis());
        Ok(IntervalTicket(handle))
    }
}

/// Running `setInterval` registration.
///
/// Clearing is safe from inside the interval's own callback.
pub struct IntervalTicket(IntervalHandle);

impl TickerHandle for IntervalTicket {
    fn cancel(self) {
        self.0.clear();
        log::debug!("⏱️  Interval cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_ticker<T: Ticker>() {}

    #[test]
    fn test_interval_ticker_is_a_ticker() {
        assert_ticker::<IntervalTicker>();
    }
}
