//! Walks through an editing session: keystrokes, a rejected value, an
//! eye-dropper sample and a copy to the clipboard.
//!
//! Run with: `cargo run --example picker_session`

use std::time::{Duration, Instant};

use colorkit::sampling::{NotificationState, HIDE_DURATION, SHOW_DURATION};
use colorkit::{ConversionCoordinator, Field, PickerSession, Result, SampleError};

fn main() -> Result<()> {
    let mut coordinator = ConversionCoordinator::new();
    print_state("start", &coordinator);

    for raw in ["1", "12", "120"] {
        coordinator.set_field(Field::Hue, raw)?;
    }
    print_state("typed hue 120", &coordinator);

    if let Err(e) = coordinator.set_field(Field::Saturation, "101") {
        println!("rejected: {e}");
    }

    let mut session = PickerSession::new();
    let mut eye_dropper = || Ok::<_, SampleError>("#1e90ff".to_string());
    if let Ok(sampled) = session.pick(&mut eye_dropper) {
        let sampled = sampled.to_string();
        coordinator.apply_sample(&sampled)?;
    }
    print_state("sampled", &coordinator);

    let mut clipboard = String::new();
    let now = Instant::now();
    session.copy(&mut clipboard, now);
    println!("copied {clipboard}");

    let done = now + SHOW_DURATION + HIDE_DURATION + Duration::from_millis(1);
    assert_eq!(session.notification_mut().tick(done), NotificationState::Hidden);

    Ok(())
}

fn print_state(label: &str, coordinator: &ConversionCoordinator) {
    let colors = coordinator.colors();
    println!(
        "{label:<14} [{}] {} #{} {} {}",
        coordinator.authoritative(),
        colors.rgb,
        colors.hex,
        colors.hsl,
        colors.cmyk
    );
}
