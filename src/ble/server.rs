//! GATT server - the trigger service and its advertisement payloads.
//!
//! One service, one characteristic.  The characteristic value is a
//! fixed 6-byte token that gets overwritten and actively pushed
//! ("notify", not a peer-initiated read) on every trigger.  Both UUIDs
//! are opaque constants that must match the paired application.

use crate::config;
use crate::error::{BleError, Error};
use nrf_softdevice::ble::advertisement_builder::{
    Flag, LegacyAdvertisementBuilder, LegacyAdvertisementPayload, ServiceList,
};
use nrf_softdevice::ble::{gatt_server, Connection};

#[nrf_softdevice::gatt_service(uuid = "12345678-1234-1234-1234-123456789abc")]
pub struct TriggerService {
    // Readable for peers that poll, notifiable for the paired app.
    #[characteristic(uuid = "87654321-4321-4321-4321-cba987654321", read, notify)]
    pub press: [u8; 6],
}

#[nrf_softdevice::gatt_server]
pub struct BleServer {
    pub trigger: TriggerService,
}

impl BleServer {
    /// Overwrite the press characteristic with the fixed token and
    /// push it to subscribed peers.
    ///
    /// Best-effort: the caller is expected to swallow the error.  A
    /// peer that dropped between the connection check and this push
    /// simply never sees the event - there is no retry.
    pub fn notify_press(&self, conn: &Connection) -> Result<(), Error> {
        gatt_server::notify_value(conn, self.trigger.press_value_handle, config::NOTIFY_PAYLOAD)
            .map_err(|_| BleError::NotifyFailed.into())
    }
}

/// Advertisement payload: flags plus the 128-bit trigger service UUID.
pub fn advertisement_data() -> LegacyAdvertisementPayload {
    LegacyAdvertisementBuilder::new()
        .flags(&[Flag::GeneralDiscovery, Flag::LE_Only])
        .services_128(ServiceList::Complete, &[config::TRIGGER_SERVICE_UUID])
        .build()
}

/// Scan-response payload.  The device name goes here because the
/// 128-bit UUID leaves no room for it in the advertisement packet.
pub fn scan_data() -> LegacyAdvertisementPayload {
    LegacyAdvertisementBuilder::new()
        .full_name(config::DEVICE_NAME)
        .build()
}
