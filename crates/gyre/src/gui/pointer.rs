use gtk::prelude::*;
use gtk4 as gtk;
use gyre_core::input::{InputSource, Listener, Subscription};

/// Pointer motion over a widget, as an input source.
#[derive(Debug, Clone)]
pub struct PointerInput {
    controller: gtk::EventControllerMotion,
}

impl PointerInput {
    pub fn attach(widget: &impl IsA<gtk::Widget>) -> Self {
        let controller = gtk::EventControllerMotion::new();
        widget.add_controller(controller.clone());
        Self { controller }
    }
}

impl InputSource for PointerInput {
    fn subscribe(&self, listener: Listener) -> Subscription {
        let id = self.controller.connect_motion(move |_, _, _| listener());
        let controller = self.controller.clone();
        Subscription::new(move || controller.disconnect(id))
    }
}
