use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use gtk4::prelude::*;
use gtk4::DrawingArea;

use crate::state::{CheckedChangeSlot, FrameTickGate, SwitchMachine, SwitchTransition};

use super::style::StyleTokens;
use super::switch_render::{draw_switch, switch_layout};

/// Custom-drawn day/night switch.
///
/// A tap flips the state and animates toward it; the registered listener is
/// called with the new value once that animation ends, or right away if a
/// newer animation cuts it short.
#[derive(Clone)]
pub struct NightModeSwitch {
    area: DrawingArea,
    machine: Rc<RefCell<SwitchMachine>>,
    listener: CheckedChangeSlot,
    frame_tick: FrameTickGate,
    frame_interval: Duration,
}

impl NightModeSwitch {
    pub fn new(tokens: StyleTokens, animation_duration: Duration) -> Self {
        let area = DrawingArea::new();
        area.set_content_width(tokens.switch_width);
        area.set_content_height(tokens.switch_height);
        area.set_halign(gtk4::Align::Center);
        area.set_valign(gtk4::Align::Center);
        area.set_cursor_from_name(Some("pointer"));
        area.add_css_class("night-mode-switch");

        let switch = Self {
            area,
            machine: Rc::new(RefCell::new(SwitchMachine::new(animation_duration))),
            listener: CheckedChangeSlot::default(),
            frame_tick: FrameTickGate::default(),
            frame_interval: tokens.frame_interval(),
        };
        switch.connect_draw(tokens);
        switch.connect_tap();
        switch
    }

    pub fn widget(&self) -> &DrawingArea {
        &self.area
    }

    /// Sets the logical state. `animate == false` jumps straight to the
    /// endpoint, which is what startup uses to avoid a visible slide.
    pub fn set_checked(&self, checked: bool, animate: bool) {
        let transition = self
            .machine
            .borrow_mut()
            .set_checked(checked, animate, Instant::now());
        if !transition.changed {
            return;
        }
        if animate {
            self.ensure_frame_tick();
        }
        self.area.queue_draw();
        self.report_interrupted(transition);
    }

    /// Replaces any previously registered listener.
    pub fn set_on_checked_change_listener<F: Fn(bool) + 'static>(&self, listener: F) {
        self.listener.replace(listener);
    }

    fn connect_draw(&self, tokens: StyleTokens) {
        let machine = self.machine.clone();
        let border_width = f64::from(tokens.border_width);
        self.area.set_draw_func(move |_, context, width, height| {
            if width <= 0 || height <= 0 {
                return;
            }
            let visual = machine.borrow().visual();
            let layout = switch_layout(width, height, visual, tokens);
            draw_switch(context, &layout, border_width);
        });
    }

    fn connect_tap(&self) {
        let click = gtk4::GestureClick::new();
        click.set_button(gtk4::gdk::BUTTON_PRIMARY);
        let switch = self.downgraded();
        click.connect_released(move |_, _, _, _| {
            let Some(switch) = switch.upgrade() else {
                return;
            };
            let (transition, checked) = {
                let mut machine = switch.machine.borrow_mut();
                (machine.tap(Instant::now()), machine.checked())
            };
            tracing::info!(checked, "night mode switch tapped");
            switch.ensure_frame_tick();
            switch.area.queue_draw();
            switch.report_interrupted(transition);
        });
        self.area.add_controller(click);
    }

    fn ensure_frame_tick(&self) {
        if !self.frame_tick.try_start() {
            return;
        }
        let switch = self.downgraded();
        gtk4::glib::timeout_add_local(self.frame_interval, move || {
            let Some(switch) = switch.upgrade() else {
                return gtk4::glib::ControlFlow::Break;
            };
            let (outcome, phase) = {
                let mut machine = switch.machine.borrow_mut();
                (machine.tick(Instant::now()), machine.phase())
            };
            switch.area.queue_draw();
            if switch.frame_tick.on_frame(outcome) {
                return gtk4::glib::ControlFlow::Continue;
            }
            tracing::debug!(?phase, "switch frame tick stopped");
            if let Some(checked) = outcome.notification() {
                switch.notify_checked_change(checked);
            }
            gtk4::glib::ControlFlow::Break
        });
    }

    fn report_interrupted(&self, transition: SwitchTransition) {
        if let Some(checked) = transition.interrupted {
            self.notify_checked_change(checked);
        }
    }

    fn notify_checked_change(&self, checked: bool) {
        if !self.listener.notify(checked) {
            tracing::debug!(checked, "no checked change listener registered");
        }
    }

    fn downgraded(&self) -> WeakNightModeSwitch {
        WeakNightModeSwitch {
            area: self.area.downgrade(),
            machine: self.machine.clone(),
            listener: self.listener.clone(),
            frame_tick: self.frame_tick.clone(),
            frame_interval: self.frame_interval,
        }
    }
}

/// Handle captured by signal closures. Holds the widget weakly so the
/// drawing area is not kept alive by its own controllers; the switch state
/// lives as long as any closure does.
struct WeakNightModeSwitch {
    area: gtk4::glib::WeakRef<DrawingArea>,
    machine: Rc<RefCell<SwitchMachine>>,
    listener: CheckedChangeSlot,
    frame_tick: FrameTickGate,
    frame_interval: Duration,
}

impl WeakNightModeSwitch {
    fn upgrade(&self) -> Option<NightModeSwitch> {
        Some(NightModeSwitch {
            area: self.area.upgrade()?,
            machine: self.machine.clone(),
            listener: self.listener.clone(),
            frame_tick: self.frame_tick.clone(),
            frame_interval: self.frame_interval,
        })
    }
}
