//! Delayed bot replies.
//!
//! Each reply is a one-shot `gloo_timers` sleep wrapped in
//! [`futures::future::abortable`], so the UI keeps running while the "typing"
//! delay elapses and a reset-close can cancel everything still pending.

#[cfg(test)]
#[path = "reply_timer_test.rs"]
mod reply_timer_test;

use futures::future::AbortHandle;
use leptos::prelude::*;
use saanvi::{ReplyTicket, WidgetController};

/// Abort handles for replies that have not fired yet.
#[derive(Clone, Copy)]
pub struct ReplyTimers {
    handles: StoredValue<Vec<(u64, AbortHandle)>>,
}

impl Default for ReplyTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyTimers {
    pub fn new() -> Self {
        Self { handles: StoredValue::new(Vec::new()) }
    }

    pub fn track(&self, ticket_id: u64, handle: AbortHandle) {
        self.handles.update_value(|h| h.push((ticket_id, handle)));
    }

    pub fn forget(&self, ticket_id: u64) {
        self.handles.update_value(|h| h.retain(|(id, _)| *id != ticket_id));
    }

    pub fn pending(&self) -> usize {
        self.handles.with_value(Vec::len)
    }

    /// Abort every pending reply.
    pub fn cancel_all(&self) {
        self.handles.update_value(|h| {
            for (_, handle) in h.drain(..) {
                handle.abort();
            }
        });
    }
}

/// Deliver `ticket` into `ctl` after the configured reply delay.
pub fn schedule_reply(ctl: RwSignal<WidgetController>, timers: ReplyTimers, ticket: ReplyTicket) {
    #[cfg(feature = "csr")]
    {
        let delay = ctl.with_untracked(|c| c.config().reply_delay());
        let ticket_id = ticket.id;

        let (task, handle) = futures::future::abortable(async move {
            gloo_timers::future::sleep(delay).await;
            ctl.update(|c| {
                c.deliver_reply(&ticket);
            });
        });
        timers.track(ticket_id, handle);

        leptos::task::spawn_local(async move {
            if task.await.is_err() {
                log::debug!("reply {ticket_id} cancelled");
            }
            timers.forget(ticket_id);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ctl, timers, ticket);
    }
}
