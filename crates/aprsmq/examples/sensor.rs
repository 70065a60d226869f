//! Minimal sensor node — publishes a reading every 15 seconds.
//!
//! A hardware-free stand-in for a temperature/humidity sensor: the
//! values are simulated. Swap in a real driver and your own callsigns
//! before pointing it at your modem bridge.
//!
//! Run with:
//!   cargo run --example sensor

use std::thread;
use std::time::Duration;

use aprsmq::session::{Session, StationConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let mut config = StationConfig::new("WB2OSZ-1", "WB2OSZ-15");
    config.via = "WIDE1-1".to_string();

    let mut session = Session::new(config);

    // Stand-in readings; a real node reads its sensor here.
    let mut temperature_f = 68.0f64;
    loop {
        temperature_f += 0.1;
        let humidity = 55;

        println!("Temp: {temperature_f:.1} F    Humidity: {humidity}%");
        session.publish("temperature", &format!("{temperature_f:.1}"));
        session.publish("humidity", &humidity.to_string());

        thread::sleep(Duration::from_secs(15));
    }
}
