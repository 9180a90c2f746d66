//! Delayed spin resolution
//!
//! A spin resolves once, after its animation has had time to play. The
//! scheduler arms that single timer; when it fires, the ticket is handed
//! back to the wheel through the application's event channel.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::event::Event;

/// Identifies one accepted spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpinTicket(pub u64);

/// A pending timer that can be called off
pub trait Cancel {
    fn cancel(self);
}

/// Arms one-shot timers that deliver a [`SpinTicket`] when they fire
pub trait Scheduler {
    type Handle: Cancel;

    fn schedule_once(&mut self, delay: Duration, ticket: SpinTicket) -> Self::Handle;
}

/// Scheduler backed by tokio timers, firing into the UI event channel
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<Event>,
}

impl TokioScheduler {
    pub fn new(tx: mpsc::UnboundedSender<Event>) -> Self {
        Self { tx }
    }
}

/// Handle to a timer task spawned by [`TokioScheduler`]
#[derive(Debug)]
pub struct TimerHandle(JoinHandle<()>);

impl Cancel for TimerHandle {
    fn cancel(self) {
        self.0.abort();
    }
}

impl Scheduler for TokioScheduler {
    type Handle = TimerHandle;

    fn schedule_once(&mut self, delay: Duration, ticket: SpinTicket) -> TimerHandle {
        let tx = self.tx.clone();
        TimerHandle(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(Event::SpinResolved(ticket)).is_err() {
                log::debug!("Spin {} resolved after the event loop closed", ticket.0);
            }
        }))
    }
}

/// Simulated clock for driving spins in tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    clock: std::rc::Rc<std::cell::RefCell<ManualClock>>,
}

#[cfg(test)]
#[derive(Debug, Default)]
struct ManualClock {
    now: Duration,
    timers: Vec<ManualTimer>,
    armed: usize,
}

#[cfg(test)]
#[derive(Debug)]
struct ManualTimer {
    due: Duration,
    ticket: SpinTicket,
    cancelled: std::rc::Rc<std::cell::Cell<bool>>,
}

#[cfg(test)]
#[derive(Debug)]
pub struct ManualHandle(std::rc::Rc<std::cell::Cell<bool>>);

#[cfg(test)]
impl Cancel for ManualHandle {
    fn cancel(self) {
        self.0.set(true);
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule_once(&mut self, delay: Duration, ticket: SpinTicket) -> ManualHandle {
        let cancelled = std::rc::Rc::new(std::cell::Cell::new(false));
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + delay;
        clock.armed += 1;
        clock.timers.push(ManualTimer {
            due,
            ticket,
            cancelled: cancelled.clone(),
        });
        ManualHandle(cancelled)
    }
}

#[cfg(test)]
impl ManualScheduler {
    /// Move the clock forward and return the tickets that fired, in due order
    pub fn advance(&self, by: Duration) -> Vec<SpinTicket> {
        let mut clock = self.clock.borrow_mut();
        clock.now += by;
        let now = clock.now;

        let (mut fired, waiting): (Vec<_>, Vec<_>) =
            clock.timers.drain(..).partition(|t| t.due <= now);
        clock.timers = waiting;

        fired.sort_by_key(|t| t.due);
        fired
            .into_iter()
            .filter(|t| !t.cancelled.get())
            .map(|t| t.ticket)
            .collect()
    }

    /// Total number of timers ever armed
    pub fn armed(&self) -> usize {
        self.clock.borrow().armed
    }

    /// Timers not yet fired or cancelled
    pub fn pending(&self) -> usize {
        self.clock
            .borrow()
            .timers
            .iter()
            .filter(|t| !t.cancelled.get())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn tokio_timer_fires_after_the_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);
        let started = tokio::time::Instant::now();

        let _handle = scheduler.schedule_once(Duration::from_millis(4000), SpinTicket(3));

        match rx.recv().await {
            Some(Event::SpinResolved(ticket)) => assert_eq!(ticket, SpinTicket(3)),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(started.elapsed() >= Duration::from_millis(4000));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_tokio_timer_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TokioScheduler::new(tx);

        scheduler
            .schedule_once(Duration::from_millis(500), SpinTicket(1))
            .cancel();

        let waited = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(waited.is_err(), "cancelled timer delivered {waited:?}");
    }

    #[test]
    fn manual_clock_fires_due_timers_only() {
        let mut scheduler = ManualScheduler::default();
        scheduler.schedule_once(Duration::from_millis(100), SpinTicket(1));
        scheduler.schedule_once(Duration::from_millis(50), SpinTicket(2));
        let skipped = scheduler.schedule_once(Duration::from_millis(60), SpinTicket(3));
        skipped.cancel();

        assert!(scheduler.advance(Duration::from_millis(49)).is_empty());
        assert_eq!(scheduler.pending(), 2);
        assert_eq!(
            scheduler.advance(Duration::from_millis(11)),
            vec![SpinTicket(2)]
        );
        assert_eq!(
            scheduler.advance(Duration::from_millis(40)),
            vec![SpinTicket(1)]
        );
        assert_eq!(scheduler.armed(), 3);
        assert_eq!(scheduler.pending(), 0);
    }
}
