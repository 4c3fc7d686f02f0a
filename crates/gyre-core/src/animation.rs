use crate::clock::Clock;
use crate::input::InputSource;
use crate::schedule::Scheduler;
use crate::surface::DrawingSurface;
use crate::widget::{RingWidget, Tick};
use std::cell::RefCell;
use std::rc::Rc;

/// Starts `ring` and schedules its frame loop. Does nothing if it is
/// already running.
///
/// The scheduled task only holds a weak reference: it halts once the widget
/// is dropped, stopped, or restarted under a newer token.
pub fn start<S, C>(
    ring: &Rc<RefCell<RingWidget<S, C>>>,
    input: &impl InputSource,
    scheduler: &impl Scheduler,
) where
    S: DrawingSurface + 'static,
    C: Clock + 'static,
{
    let Some(token) = ring.borrow_mut().start(input) else {
        log::debug!("Ring already running");
        return;
    };

    let ring = Rc::downgrade(ring);
    scheduler.every_frame(Box::new(move || {
        let Some(ring) = ring.upgrade() else {
            return Tick::Halted;
        };
        let mut ring = ring.borrow_mut();
        match ring.tick(token) {
            Ok(tick) => tick,
            Err(e) => {
                log::error!("Ring animation stopped: {}", e);
                Tick::Halted
            }
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::color::Color;
    use crate::config::RingSettings;
    use crate::input::PointerFeed;
    use crate::schedule::ManualScheduler;
    use crate::surface::testing::RecordingSurface;

    type TestRing = Rc<RefCell<RingWidget<RecordingSurface, ManualClock>>>;

    fn setup() -> (TestRing, ManualClock, PointerFeed, ManualScheduler) {
        let clock = ManualClock::default();
        let settings = RingSettings {
            stroke_width: 2,
            radius: 40,
            background: Color::rgb(1.0, 1.0, 1.0),
            fps: 50,
        };
        let mut widget =
            RingWidget::new(RecordingSurface::new(100.0, 100.0), clock.clone(), &settings)
                .unwrap();
        widget
            .add_arc(0.0, 0.5, Color::rgb(0.0, 0.0, 0.0), None)
            .unwrap();
        (
            Rc::new(RefCell::new(widget)),
            clock,
            PointerFeed::default(),
            ManualScheduler::default(),
        )
    }

    #[test]
    fn test_loop_draws_on_due_frames() {
        let (ring, clock, feed, scheduler) = setup();
        start(&ring, &feed, &scheduler);
        assert!(ring.borrow().is_running());

        for _ in 0..4 {
            feed.emit();
        }
        // frames every 5ms against a 20ms interval: one redraw per 4 refreshes
        for _ in 0..16 {
            clock.advance(5.0);
            scheduler.run_frame();
        }

        let ring = ring.borrow();
        assert_eq!(ring.surface().strokes.len(), 3 * 2);
        assert_eq!(ring.speed(), 0.5);
    }

    #[test]
    fn test_double_start_schedules_once() {
        let (ring, _, feed, scheduler) = setup();
        start(&ring, &feed, &scheduler);
        start(&ring, &feed, &scheduler);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(feed.listener_count(), 1);
    }

    #[test]
    fn test_stop_is_observed_on_next_frame() {
        let (ring, clock, feed, scheduler) = setup();
        start(&ring, &feed, &scheduler);
        ring.borrow_mut().stop();
        assert_eq!(scheduler.pending(), 1);

        clock.advance(100.0);
        assert_eq!(scheduler.run_frame(), 0);
        assert!(ring.borrow().surface().strokes.is_empty());
    }

    #[test]
    fn test_restart_before_pending_frame_runs_once() {
        let (ring, clock, feed, scheduler) = setup();
        start(&ring, &feed, &scheduler);
        ring.borrow_mut().stop();
        start(&ring, &feed, &scheduler);
        assert_eq!(scheduler.pending(), 2);

        clock.advance(25.0);
        assert_eq!(scheduler.run_frame(), 1);
        assert_eq!(ring.borrow().surface().strokes.len(), 2);
    }

    #[test]
    fn test_dropped_widget_halts_task() {
        let (ring, _, feed, scheduler) = setup();
        start(&ring, &feed, &scheduler);
        drop(ring);
        assert_eq!(scheduler.run_frame(), 0);
    }

    #[test]
    fn test_surface_failure_halts_task() {
        let (ring, clock, feed, scheduler) = setup();
        start(&ring, &feed, &scheduler);
        ring.borrow_mut().surface_mut().unavailable = true;

        clock.advance(25.0);
        assert_eq!(scheduler.run_frame(), 0);
        assert!(!ring.borrow().is_running());
        assert_eq!(feed.listener_count(), 0);
    }
}
