use crate::arc::Arc;
use crate::clock::Clock;
use crate::color::Color;
use crate::config::RingSettings;
use crate::error::RingError;
use crate::input::{InputSource, Subscription};
use crate::motion::Speed;
use crate::surface::{ArcStroke, DrawingSurface, Point, SurfaceError};
use crate::timing::FrameGate;
use std::f64::consts::PI;

/// Outcome of one scheduled frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The widget was stopped or restarted; the task must not run again.
    Halted,
    /// Too soon since the last frame; nothing drawn.
    Idle,
    Drawn,
}

/// Identifies one `start`. Frame tasks holding an older token halt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunToken(u64);

/// A ring of arcs that spin faster while the pointer moves and coast back
/// to rest.
///
/// Each frame first overpaints the ring with a full circle in the
/// background color, `stroke_width + 2` wide, then redraws the arcs. This
/// only erases correctly when the background is opaque and no arc is wider
/// than the overpaint.
pub struct RingWidget<S, C> {
    surface: S,
    clock: C,
    baseline_width: f64,
    radius: f64,
    center: Point,
    background: Color,
    speed: Speed,
    arcs: Vec<Arc>,
    gate: FrameGate,
    running: bool,
    generation: u64,
    subscription: Option<Subscription>,
}

impl<S: DrawingSurface, C: Clock> RingWidget<S, C> {
    pub fn new(surface: S, clock: C, settings: &RingSettings) -> Result<Self, RingError> {
        if settings.radius == 0 {
            return Err(RingError::InvalidRadius);
        }
        if settings.fps == 0 {
            return Err(RingError::InvalidFrameRate);
        }
        if settings.stroke_width == 0 {
            return Err(RingError::InvalidStrokeWidth(0.0));
        }
        let size = surface.size();
        if size.is_empty() {
            return Err(RingError::EmptySurface {
                width: size.width,
                height: size.height,
            });
        }

        let gate = FrameGate::new(settings.fps, clock.now());

        Ok(Self {
            surface,
            clock,
            baseline_width: settings.stroke_width as f64,
            radius: settings.radius as f64,
            center: size.center(),
            background: settings.background,
            speed: Speed::default(),
            arcs: Vec::new(),
            gate,
            running: false,
            generation: 0,
            subscription: None,
        })
    }

    pub fn add_arc(
        &mut self,
        begin: f64,
        end: f64,
        color: Color,
        stroke_width: Option<f64>,
    ) -> Result<(), RingError> {
        self.arcs.push(Arc::new(begin, end, color, stroke_width)?);
        Ok(())
    }

    /// Strokes one arc, angles in units of π. Falls back to the baseline
    /// width when `stroke_width` is `None`.
    pub fn draw_arc(
        &mut self,
        begin: f64,
        end: f64,
        color: Color,
        stroke_width: Option<f64>,
    ) -> Result<(), SurfaceError> {
        self.surface.stroke_arc(&ArcStroke {
            center: self.center,
            radius: self.radius,
            start: begin * PI,
            end: end * PI,
            color,
            width: stroke_width.unwrap_or(self.baseline_width),
        })
    }

    pub fn clear_canvas(&mut self) -> Result<(), SurfaceError> {
        self.draw_arc(0.0, 2.0, self.background, Some(self.baseline_width + 2.0))
    }

    pub fn rotate_arc(&mut self, index: usize) {
        let speed = self.speed.get();
        if let Some(arc) = self.arcs.get_mut(index) {
            arc.rotate(speed);
        }
    }

    /// Starts listening to `input`. Returns `None` if already running.
    pub fn start(&mut self, input: &impl InputSource) -> Option<RunToken> {
        if self.running {
            return None;
        }

        let speed = self.speed.clone();
        self.subscription = Some(input.subscribe(Box::new(move || speed.boost())));
        self.running = true;
        self.generation += 1;
        log::debug!("Ring started ({} arcs)", self.arcs.len());

        Some(RunToken(self.generation))
    }

    /// Unsubscribes from input. A pending frame halts the next time it runs.
    pub fn stop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
        if self.running {
            log::debug!("Ring stopped");
        }
        self.running = false;
    }

    /// Loop body, called once per display refresh.
    pub fn tick(&mut self, token: RunToken) -> Result<Tick, RingError> {
        if !self.running || token != RunToken(self.generation) {
            return Ok(Tick::Halted);
        }

        if !self.gate.try_advance(self.clock.now()) {
            return Ok(Tick::Idle);
        }

        self.speed.decay();

        if let Err(e) = self.redraw() {
            self.stop();
            return Err(e.into());
        }
        Ok(Tick::Drawn)
    }

    fn redraw(&mut self) -> Result<(), SurfaceError> {
        self.clear_canvas()?;

        for i in 0..self.arcs.len() {
            self.rotate_arc(i);
            let arc = &self.arcs[i];
            let (begin, end, color, width) =
                (arc.begin(), arc.end(), *arc.color(), arc.stroke_width());
            self.draw_arc(begin, end, color, width)?;
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn speed(&self) -> f64 {
        self.speed.get()
    }

    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn frame_interval_ms(&self) -> f64 {
        self.gate.interval_ms()
    }

    pub fn last_frame_time(&self) -> f64 {
        self.gate.last_frame()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
