//! Creates a virtual mouse, wiggles the pointer, and clicks.

use std::{thread, time::Duration};

use vinput::{Mouse, Result};

fn main() -> Result<()> {
    env_logger::init();

    let mut mouse = Mouse::create("/dev/uinput", "vinput pointer")?;
    println!("Created mouse at {}", mouse.syspath()?.display());

    for _ in 0..10 {
        mouse.move_right(20)?;
        thread::sleep(Duration::from_millis(50));
    }
    for _ in 0..10 {
        mouse.move_left(20)?;
        thread::sleep(Duration::from_millis(50));
    }

    mouse.wheel(false, -2)?;
    mouse.left_click()?;

    mouse.close()?;
    Ok(())
}
