use std::cell::Cell;
use std::rc::Rc;

/// Cancellation flag shared between a repeating task and whoever may stop it.
///
/// Clones observe the same flag. Once stopped it stays stopped.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    stopped: Rc<Cell<bool>>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

pub struct RepeatingTask<F> {
    handle: StopHandle,
    step: F,
}

impl<F: FnMut()> RepeatingTask<F> {
    pub fn new(step: F) -> Self {
        Self {
            handle: StopHandle::new(),
            step,
        }
    }

    pub fn handle(&self) -> StopHandle {
        self.handle.clone()
    }

    pub fn tick(&mut self) -> bool {
        if self.handle.is_stopped() {
            return false;
        }
        (self.step)();
        !self.handle.is_stopped()
    }
}
