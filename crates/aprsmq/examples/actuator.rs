//! Minimal actuator node — subscribes to two topics and acts on values.
//!
//! A hardware-free stand-in for the usual LED/servo subscriber: it prints
//! what it would do. Change the callsigns (and wire up real outputs)
//! before pointing it at your modem bridge.
//!
//! Run with:
//!   cargo run --example actuator

use aprsmq::session::{Session, StationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let mut config = StationConfig::new("WB2OSZ-1", "WB2OSZ-15");
    config.via = "WIDE1-1".to_string();

    let mycall = config.mycall.clone();
    let mut session = Session::new(config);

    session.subscribe("rgbled");
    session.subscribe("servo");

    // Watch for incoming messages forever; a keep-alive goes out
    // periodically so the broker keeps the subscriptions.
    session.run(
        move |addressee: &str, _command: &str, _options: &str, topic: &str, value: &str| {
            if addressee != mycall {
                return;
            }
            match topic {
                "rgbled" => println!("set led to {value}"),
                "servo" => println!("set servo to {value}"),
                other => println!("ignoring unexpected topic {other}"),
            }
        },
    )?;
    Ok(())
}
