use crate::widget::Tick;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub type FrameTask = Box<dyn FnMut() -> Tick>;

/// Runs a task once per display refresh until it reports `Tick::Halted`.
pub trait Scheduler {
    fn every_frame(&self, task: FrameTask);
}

/// Scheduler driven by hand, one `run_frame` per simulated refresh.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    tasks: Rc<RefCell<Vec<FrameTask>>>,
}

impl ManualScheduler {
    /// Runs every pending task once and returns how many remain scheduled.
    pub fn run_frame(&self) -> usize {
        let mut tasks = std::mem::take(&mut *self.tasks.borrow_mut());
        tasks.retain_mut(|task| task() != Tick::Halted);

        // keep tasks registered while this frame was running
        let mut queue = self.tasks.borrow_mut();
        tasks.append(&mut queue);
        *queue = tasks;
        queue.len()
    }

    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }
}

impl Scheduler for ManualScheduler {
    fn every_frame(&self, task: FrameTask) {
        self.tasks.borrow_mut().push(task);
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("pending", &self.pending())
            .finish()
    }
}
