use crate::events::AppEvent;
use crate::gui::frame::FrameScheduler;
use crate::gui::pointer::PointerInput;
use crate::gui::{theme, window};
use gtk::prelude::*;
use gtk4 as gtk;
use gyre_core::animation;
use gyre_core::canvas::Canvas;
use gyre_core::clock::SystemClock;
use gyre_core::config::{self, Config};
use gyre_core::control::ControlCommand;
use gyre_core::{RingError, RingWidget};
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

type Ring = RingWidget<Canvas, SystemClock>;

pub struct AppModel {
    pub ring: Option<Rc<RefCell<Ring>>>,
    pub image: Rc<RefCell<Option<cairo::ImageSurface>>>,
    pub config: Config,
    pub pointer: PointerInput,
    pub scheduler: FrameScheduler,
    pub drawing_area: gtk::DrawingArea,
    pub css: gtk::CssProvider,
}

#[derive(Debug)]
pub enum AppMsg {
    Control(ControlCommand),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Control(command) => AppMsg::Control(command),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

/// Builds a stopped ring from `config`. Arcs that fail validation are
/// logged and left out.
fn build_ring(config: &Config) -> Result<Ring, RingError> {
    let mut canvas = Canvas::new(config.canvas.width, config.canvas.height)?;
    canvas.fill(&config.ring.background)?;

    let mut ring = RingWidget::new(canvas, SystemClock::new(), &config.ring)?;
    for arc in &config.arcs {
        if let Err(e) = ring.add_arc(arc.begin, arc.end, arc.color, arc.width) {
            log::error!("Skipping arc {}..{}: {}", arc.begin, arc.end, e);
        }
    }
    Ok(ring)
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Gyre"),
            add_css_class: "gyre-window",
            set_decorated: false,
            set_resizable: false,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Control(ControlCommand::Toggle));
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_content_width: model.config.canvas.width,
                set_content_height: model.config.canvas.height,
                add_css_class: "gyre-drawing-area",
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, rx) = init;

        let css = theme::install_css(&config.ring.background);
        if let Some(layer) = config.window.layer {
            window::init_layer_shell(&root, layer);
        }

        let placeholder = gtk::DrawingArea::default();
        let model = AppModel {
            ring: None,
            image: Rc::new(RefCell::new(None)),
            config,
            pointer: PointerInput::attach(&root),
            scheduler: FrameScheduler::new(placeholder.clone()),
            drawing_area: placeholder,
            css,
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();
        model.scheduler = FrameScheduler::new(widgets.drawing_area.clone());

        let image = model.image.clone();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, _, _| {
                if let Some(image) = image.borrow().as_ref()
                    && let Err(e) = cr
                        .set_source_surface(image, 0.0, 0.0)
                        .and_then(|_| cr.paint())
                {
                    log::error!("Drawing error: {}", e);
                }
            });

        model.rebuild();
        if model.config.window.autostart {
            model.start();
        }

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Control(ControlCommand::Start) => self.start(),
            AppMsg::Control(ControlCommand::Stop) => self.stop(),
            AppMsg::Control(ControlCommand::Toggle) => {
                if self.is_running() {
                    self.stop();
                } else {
                    self.start();
                }
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    let was_running = self.is_running();
                    self.stop();
                    self.config = new_config;
                    self.drawing_area
                        .set_content_width(self.config.canvas.width);
                    self.drawing_area
                        .set_content_height(self.config.canvas.height);
                    theme::set_background(&self.css, &self.config.ring.background);
                    self.rebuild();
                    if was_running {
                        self.start();
                    }
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}

impl AppModel {
    fn is_running(&self) -> bool {
        self.ring.as_ref().is_some_and(|r| r.borrow().is_running())
    }

    fn start(&self) {
        match &self.ring {
            Some(ring) => animation::start(ring, &self.pointer, &self.scheduler),
            None => log::warn!("No ring to start"),
        }
    }

    fn stop(&self) {
        if let Some(ring) = &self.ring {
            ring.borrow_mut().stop();
        }
    }

    /// Discards the current ring and builds a fresh one from the config.
    fn rebuild(&mut self) {
        self.ring = None;
        *self.image.borrow_mut() = None;

        match build_ring(&self.config) {
            Ok(ring) => {
                log::info!(
                    "Ring ready: {} arcs, radius {}",
                    ring.arcs().len(),
                    ring.radius()
                );
                *self.image.borrow_mut() = Some(ring.surface().image().clone());
                self.ring = Some(Rc::new(RefCell::new(ring)));
            }
            Err(e) => log::error!("Failed to build ring: {}", e),
        }
        self.drawing_area.queue_draw();
    }
}
