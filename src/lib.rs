/*!
An interfacing library for the Akai Fire MIDI controller, covering its OLED display, the button,
track and control bank LEDs, and all of its inputs: pads, buttons and rotary encoders.

# The OLED

The Fire's 128x64 OLED is written with one large SysEx message in a peculiar bit-interleaved
format. [`OledBitmap`] is a framebuffer in exactly that format: draw into it pixel by pixel (or
with `embedded-graphics`, behind the feature of the same name) and send it off.

```no_run
use akai_fire::{OledBitmap, Output, OutputDevice as _};

let mut output = Output::guess()?;
let mut bitmap = OledBitmap::new();

bitmap.draw_circle(64, 32, 20, true);
bitmap.fill_circle(64, 32, 4, true);
output.send_bitmap(&bitmap)?;
# Ok::<(), akai_fire::MidiError>(())
```

# Input

Input either arrives in a callback, or is polled:

```no_run
use akai_fire::{Button, ButtonLed, Input, InputDevice as _, Message, MsgPollingWrapper as _};
use akai_fire::{Output, OutputDevice as _};

let mut output = Output::guess()?;
let input = Input::guess_polling()?;
input.drain();

// Light buttons while they are held down
for msg in input.iter() {
    match msg {
        Message::ButtonPress { button } => output.set_button_led(button, ButtonLed::HIGH)?,
        Message::ButtonRelease { button } => output.set_button_led(button, ButtonLed::OFF)?,
        _ => {}
    }
}
# Ok::<(), akai_fire::MidiError>(())
```

For registering one callback per pad, button or encoder, see [`Dispatcher`].

# Low-level access

Every method on [`Output`] corresponds to exactly one MIDI message (unless noted otherwise in the
documentation), so you stay in control of what is actually sent. [`OutputDevice::send`] gives
raw access for everything else.
*/

pub mod oled;
pub use oled::OledBitmap;

pub mod fire;
pub use fire::*;

mod dispatch;
pub use dispatch::*;

mod midi_io;
pub use midi_io::*;

mod errors;
pub use errors::*;

pub mod prelude {
    pub use crate::fire::{Button, Pad, Rotary};
    pub use crate::midi_io::{InputDevice, MsgPollingWrapper, OutputDevice};
    pub use crate::oled::OledBitmap;
}

/// Identifier used for e.g. the midi port names etc.
const APPLICATION_NAME: &str = "Akai Fire";
