//! btn2ble - embedded entry point (nRF52840 + SoftDevice S140).
//!
//! Boot sequence:
//!
//! 1. Initialise the Embassy HAL (SoftDevice owns the top interrupt
//!    priorities, so our peripherals run at P2).
//! 2. Enable the SoftDevice, register the GATT server, spawn the
//!    SoftDevice background task.
//! 3. Loop forever: advertise → peer connects → poll the trigger at a
//!    fixed cadence and notify on each edge → peer drops → advertise
//!    again.
//!
//! The connection flag is the only state shared with the radio stack's
//! execution context; everything else lives in this single cooperative
//! loop.

#![no_std]
#![no_main]

mod ble;
mod config;
mod error;
mod indicator;
mod notify_logic;
mod trigger;

use ble::server::{advertisement_data, scan_data, BleServer, BleServerEvent, TriggerServiceEvent};
use ble::CONNECTION;
use defmt::{debug, info, unwrap, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::select::select;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::interrupt::Priority;
use embassy_time::{Duration, Timer};
use embedded_hal::digital::{InputPin, OutputPin};
use indicator::Indicator;
use nrf_softdevice::ble::{gatt_server, Connection};
use nrf_softdevice::Softdevice;
use panic_probe as _;
use trigger::button::ButtonTrigger;
use trigger::TriggerSource;

/// SoftDevice background task - services the radio stack forever.
#[embassy_executor::task]
async fn softdevice_task(sd: &'static Softdevice) -> ! {
    sd.run().await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("btn2ble starting");

    let mut nrf_config = embassy_nrf::config::Config::default();
    nrf_config.gpiote_interrupt_priority = Priority::P2;
    nrf_config.time_interrupt_priority = Priority::P2;
    let p = embassy_nrf::init(nrf_config);

    let sd = Softdevice::enable(&ble::softdevice_config());
    let server = unwrap!(BleServer::new(sd));
    unwrap!(spawner.spawn(softdevice_task(sd)));

    // Button on P0.11 (active-low, pull-up so an open circuit reads
    // released), indicator LED on P0.06.
    let mut trigger = ButtonTrigger::new(Input::new(p.P0_11, Pull::Up));
    let mut indicator = Indicator::new(Output::new(p.P0_06, Level::Low, OutputDrive::Standard));

    let adv_data = advertisement_data();
    let scan_data = scan_data();

    loop {
        CONNECTION.on_disconnect();

        info!("advertising as '{}'", config::DEVICE_NAME);
        let conn = match ble::advertise(sd, &adv_data, &scan_data).await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("advertise error: {}", e);
                continue;
            }
        };

        info!("peer connected");
        CONNECTION.on_connect();

        // The GATT future completes when the peer disconnects; the
        // polling future runs forever.  select() therefore ends the
        // session exactly at disconnect time, and triggers that occur
        // while unconnected are silently dropped, never queued.
        let gatt_fut = gatt_server::run(&conn, &server, |event| match event {
            BleServerEvent::Trigger(TriggerServiceEvent::PressCccdWrite { notifications }) => {
                info!("press notifications enabled: {}", notifications);
            }
        });
        let poll_fut = event_loop(&server, &conn, &mut trigger, &mut indicator);
        select(gatt_fut, poll_fut).await;

        CONNECTION.on_disconnect();
        info!("peer disconnected");
    }
}

/// The always-running cooperative loop: one trigger poll per
/// iteration, gated on the connection flag.
///
/// The indicator hold inside the fire path blocks this loop for
/// `INDICATOR_PULSE_MS` - triggers inside that window are missed by
/// design.
async fn event_loop<P: InputPin, L: OutputPin>(
    server: &BleServer,
    conn: &Connection,
    trigger: &mut ButtonTrigger<P>,
    indicator: &mut Indicator<L>,
) -> ! {
    loop {
        let edge = trigger.poll().is_some();
        if notify_logic::should_fire(CONNECTION.is_connected(), edge) {
            info!("trigger");
            // Best-effort: a peer that vanished between the flag check
            // and the push just misses the event.
            if let Err(e) = server.notify_press(conn) {
                debug!("notify dropped: {}", e);
            }
            indicator
                .pulse(Duration::from_millis(config::INDICATOR_PULSE_MS))
                .await;
        }
        Timer::after(Duration::from_millis(config::LOOP_IDLE_MS)).await;
    }
}
