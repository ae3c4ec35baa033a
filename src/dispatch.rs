//! Callback registry for Fire input, for when matching on [`Message`]s by hand gets tedious.
//!
//! ```no_run
//! use akai_fire::{Button, Dispatcher, Pad, Rotary};
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.on_any_pad(|pad| println!("Pad {} in row {}", pad.index(), pad.row()));
//! dispatcher.on_button(Button::Play, |_, event| println!("Play {:?}", event));
//! dispatcher.on_rotary(Rotary::Volume, |_, direction, velocity| {
//!     println!("Volume {:?} by {}", direction, velocity)
//! });
//!
//! // Keep the handler around, otherwise the connection closes immediately
//! let _input = dispatcher.listen()?;
//! # Ok::<(), akai_fire::MidiError>(())
//! ```

use std::collections::HashMap;

use crate::{Button, Direction, InputDevice, InputDeviceHandler, Message, Pad, Rotary};

/// Whether a button went down or up
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ButtonEvent {
    Press,
    Release,
}

/// Whether a rotary encoder knob was touched or let go
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchEvent {
    Touch,
    Release,
}

type PadListener = Box<dyn FnMut(Pad) + Send>;
type ButtonListener = Box<dyn FnMut(Button, ButtonEvent) + Send>;
type RotaryListener = Box<dyn FnMut(Rotary, Direction, u8) + Send>;
type TouchListener = Box<dyn FnMut(Rotary, TouchEvent) + Send>;

/// Routes incoming [`Message`]s to the listeners registered for them.
///
/// There is at most one listener per pad, button and rotary encoder (registering another one
/// replaces the previous listener). Pad listeners only fire on presses; a press triggers both the
/// pad's own listener and the [global one](Self::on_any_pad).
#[derive(Default)]
pub struct Dispatcher {
    pad_listeners: HashMap<Pad, PadListener>,
    global_pad_listener: Option<PadListener>,
    button_listeners: HashMap<Button, ButtonListener>,
    rotary_listeners: HashMap<Rotary, RotaryListener>,
    touch_listeners: HashMap<Rotary, TouchListener>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls `callback` whenever one of `pads` is pressed.
    pub fn on_pads<F>(&mut self, pads: impl IntoIterator<Item = Pad>, callback: F)
    where
        F: FnMut(Pad) + Clone + Send + 'static,
    {
        for pad in pads {
            self.pad_listeners.insert(pad, Box::new(callback.clone()));
        }
    }

    /// Calls `callback` whenever any pad is pressed.
    pub fn on_any_pad(&mut self, callback: impl FnMut(Pad) + Send + 'static) {
        self.global_pad_listener = Some(Box::new(callback));
    }

    pub fn on_button(
        &mut self,
        button: Button,
        callback: impl FnMut(Button, ButtonEvent) + Send + 'static,
    ) {
        self.button_listeners.insert(button, Box::new(callback));
    }

    /// Calls `callback` with the direction and velocity of every turn of `rotary`.
    pub fn on_rotary(
        &mut self,
        rotary: Rotary,
        callback: impl FnMut(Rotary, Direction, u8) + Send + 'static,
    ) {
        self.rotary_listeners.insert(rotary, Box::new(callback));
    }

    pub fn on_rotary_touch(
        &mut self,
        rotary: Rotary,
        callback: impl FnMut(Rotary, TouchEvent) + Send + 'static,
    ) {
        self.touch_listeners.insert(rotary, Box::new(callback));
    }

    /// Hands `msg` to the matching listeners. Messages nobody listens to are dropped.
    pub fn dispatch(&mut self, msg: &Message) {
        match *msg {
            Message::PadPress { pad, .. } => {
                if let Some(listener) = self.pad_listeners.get_mut(&pad) {
                    listener(pad);
                }
                if let Some(listener) = &mut self.global_pad_listener {
                    listener(pad);
                }
            }
            Message::PadRelease { .. } => {}
            Message::ButtonPress { button } => self.dispatch_button(button, ButtonEvent::Press),
            Message::ButtonRelease { button } => self.dispatch_button(button, ButtonEvent::Release),
            Message::RotaryTurn { rotary, direction, velocity } => {
                if let Some(listener) = self.rotary_listeners.get_mut(&rotary) {
                    listener(rotary, direction, velocity);
                }
            }
            Message::RotaryTouch { rotary } => self.dispatch_touch(rotary, TouchEvent::Touch),
            Message::RotaryRelease { rotary } => self.dispatch_touch(rotary, TouchEvent::Release),
            Message::Unknown(_) => {}
        }
    }

    fn dispatch_button(&mut self, button: Button, event: ButtonEvent) {
        if let Some(listener) = self.button_listeners.get_mut(&button) {
            listener(button, event);
        }
    }

    fn dispatch_touch(&mut self, rotary: Rotary, event: TouchEvent) {
        if let Some(listener) = self.touch_listeners.get_mut(&rotary) {
            listener(rotary, event);
        }
    }

    /// Connects to the Fire and dispatches every incoming message, on the MIDI input thread.
    #[must_use = "If not saved, the connection will be immediately dropped"]
    pub fn listen(mut self) -> Result<InputDeviceHandler, crate::MidiError> {
        crate::Input::guess(move |msg| self.dispatch(&msg))
    }
}
