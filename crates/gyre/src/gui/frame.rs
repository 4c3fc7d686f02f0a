use gtk::prelude::*;
use gtk4 as gtk;
use gyre_core::Tick;
use gyre_core::schedule::{FrameTask, Scheduler};
use std::cell::RefCell;

/// Runs frame tasks from the widget's frame clock, queueing a redraw of the
/// widget whenever a task drew.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    widget: gtk::DrawingArea,
}

impl FrameScheduler {
    pub fn new(widget: gtk::DrawingArea) -> Self {
        Self { widget }
    }
}

impl Scheduler for FrameScheduler {
    fn every_frame(&self, task: FrameTask) {
        let task = RefCell::new(task);
        self.widget.add_tick_callback(move |widget, _| {
            let tick = (*task.borrow_mut())();
            match tick {
                Tick::Halted => glib::ControlFlow::Break,
                Tick::Idle => glib::ControlFlow::Continue,
                Tick::Drawn => {
                    widget.queue_draw();
                    glib::ControlFlow::Continue
                }
            }
        });
    }
}
