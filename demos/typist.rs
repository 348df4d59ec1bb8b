//! Creates a virtual keyboard and types "hello".

use std::{thread, time::Duration};

use vinput::{Keyboard, Result, event::Key};

fn main() -> Result<()> {
    env_logger::init();

    let mut kbd = Keyboard::create("/dev/uinput", "vinput typist")?;
    println!("Created keyboard at {}", kbd.syspath()?.display());

    for key in [Key::KEY_H, Key::KEY_E, Key::KEY_L, Key::KEY_L, Key::KEY_O] {
        kbd.press(key)?;
        thread::sleep(Duration::from_millis(100));
    }

    kbd.close()?;
    Ok(())
}
