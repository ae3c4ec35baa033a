use super::{Button, Pad, Rotary};

const NOTE_OFF: u8 = 0x80;
const NOTE_ON: u8 = 0x90;
const CONTROL_CHANGE: u8 = 0xB0;

/// The direction a rotary encoder was turned in
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Eq, PartialEq, Hash, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A Fire input message
pub enum Message {
    /// A pad was hit. `velocity` is how hard
    PadPress { pad: Pad, velocity: u8 },
    /// A pad was let go
    PadRelease { pad: Pad },
    ButtonPress { button: Button },
    ButtonRelease { button: Button },
    /// A rotary encoder was turned. `velocity` is the number of steps since the last message,
    /// at least 1
    RotaryTurn {
        rotary: Rotary,
        direction: Direction,
        velocity: u8,
    },
    /// A finger touched the knob of a rotary encoder
    RotaryTouch { rotary: Rotary },
    /// The finger left the knob again
    RotaryRelease { rotary: Rotary },
    /// Anything this crate doesn't know about, verbatim
    Unknown(Vec<u8>),
}

impl Message {
    /// The signed number of steps of a [`Message::RotaryTurn`], positive being clockwise.
    /// Returns `None` for other messages.
    pub fn rotary_delta(&self) -> Option<i32> {
        match *self {
            Message::RotaryTurn { direction: Direction::Clockwise, velocity, .. } => Some(velocity as i32),
            Message::RotaryTurn { direction: Direction::CounterClockwise, velocity, .. } => {
                Some(-(velocity as i32))
            }
            _ => None,
        }
    }
}

/// The Fire input connection creator.
pub struct Input;

/// Note on and note off share everything but whether something was pressed or released.
fn decode_note(note: u8, pressed: bool, velocity: u8) -> Option<Message> {
    if let Some(pad) = Pad::from_note(note) {
        return Some(match pressed {
            true => Message::PadPress { pad, velocity },
            false => Message::PadRelease { pad },
        });
    }

    if let Some(button) = Button::from_code(note) {
        return Some(match pressed {
            true => Message::ButtonPress { button },
            false => Message::ButtonRelease { button },
        });
    }

    if let Some(rotary) = Rotary::from_code(note) {
        return Some(match pressed {
            true => Message::RotaryTouch { rotary },
            false => Message::RotaryRelease { rotary },
        });
    }

    None
}

/// Rotary turns are encoded in two's complement over 7 bits
fn decode_rotary_turn(rotary: Rotary, value: u8) -> Message {
    if value < 0x40 {
        Message::RotaryTurn { rotary, direction: Direction::Clockwise, velocity: value }
    } else {
        Message::RotaryTurn { rotary, direction: Direction::CounterClockwise, velocity: 0x80 - value }
    }
}

fn decode_short_message(data: &[u8]) -> Option<Message> {
    // the channel nibble doesn't carry information on the Fire
    match *data {
        // data bytes are 7 bit, anything above is garbage or a status byte out of place
        [_, first, second] if first > 0x7F || second > 0x7F => None,
        [status, note, velocity] if status & 0xF0 == NOTE_ON => {
            // a note on with zero velocity is a note off in disguise
            decode_note(note, velocity > 0, velocity)
        }
        [status, note, velocity] if status & 0xF0 == NOTE_OFF => decode_note(note, false, velocity),
        [status, controller, value] if status & 0xF0 == CONTROL_CHANGE => {
            Rotary::from_code(controller).map(|rotary| decode_rotary_turn(rotary, value))
        }
        _ => None,
    }
}

impl crate::InputDevice for Input {
    const MIDI_CONNECTION_NAME: &'static str = "Akai Fire input";
    const MIDI_DEVICE_KEYWORD: &'static str = "FL STUDIO FIRE";
    type Message = Message;

    fn decode_message(_timestamp: u64, data: &[u8]) -> Message {
        match decode_short_message(data) {
            Some(msg) => msg,
            None => {
                log::warn!("Unexpected MIDI message from the Fire: {:02X?}", data);
                Message::Unknown(data.to_vec())
            }
        }
    }
}
