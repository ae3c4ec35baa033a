//! Prints every input event, mirrors held buttons on their LEDs and shows the last rotary turn on
//! the track LEDs. Press Stop to quit.

use akai_fire::{
    Button, ButtonLed, Input, InputDevice as _, Message, MsgPollingWrapper as _, Output,
    OutputDevice as _, TrackLed,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mut output = Output::guess()?;
    output.reset()?;

    let input = Input::guess_polling()?;
    let stale = input.drain();
    if stale > 0 {
        log::info!("Discarded {} stale messages", stale);
    }

    for msg in input.iter() {
        println!("{:?}", msg);

        match msg {
            Message::ButtonPress { button: Button::Stop } => break,
            Message::ButtonPress { button } => output.set_button_led(button, ButtonLed::HIGH)?,
            Message::ButtonRelease { button } => output.set_button_led(button, ButtonLed::OFF)?,
            Message::PadPress { pad, .. } => output.set_track_led(pad.row(), TrackLed::HighGreen)?,
            Message::PadRelease { pad } => output.set_track_led(pad.row(), TrackLed::Off)?,
            _ => {
                if let Some(delta) = msg.rotary_delta() {
                    let led = if delta > 0 { TrackLed::DullGreen } else { TrackLed::DullRed };
                    output.set_track_led(0, led)?;
                }
            }
        }
    }

    output.reset()?;
    Ok(())
}
