//! Bluetooth Low Energy subsystem.
//!
//! This module drives the Nordic SoftDevice S140 in **Peripheral**
//! role:
//!
//! 1. **Advertiser** - broadcasts a connectable advertisement carrying
//!    the 128-bit trigger service UUID, with the device name in the
//!    scan response.
//! 2. **GATT Server** - exposes one notifiable "press" characteristic
//!    the paired peer subscribes to.
//! 3. **Connection Tracker** - a single atomic flag flipped when a
//!    peer connects or drops, read by the polling loop to gate
//!    notifications.
//!
//! Pairing, encryption and MTU negotiation are left to the SoftDevice
//! defaults; the device is fire-and-forget and keeps no bond state.

pub mod connection;
pub mod server;

use crate::config;
use crate::error::{BleError, Error};
use connection::ConnectionFlag;
use core::mem;
use nrf_softdevice::ble::peripheral::{self, ConnectableAdvertisement};
use nrf_softdevice::ble::Connection;
use nrf_softdevice::{raw, Config, Softdevice};

/// Connection state shared between the SoftDevice execution context
/// and the polling loop.  Lives for the powered lifetime of the
/// device; every boot starts disconnected.
pub static CONNECTION: ConnectionFlag = ConnectionFlag::new();

/// Advertise until a peer connects.
///
/// Scannable undirected advertisement: the main packet carries the
/// service UUID, the scan response carries the device name.
pub async fn advertise(
    sd: &Softdevice,
    adv_data: &[u8],
    scan_data: &[u8],
) -> Result<Connection, Error> {
    let adv = ConnectableAdvertisement::ScannableUndirected {
        adv_data,
        scan_data,
    };
    peripheral::advertise_connectable(sd, adv, &Default::default())
        .await
        .map_err(|_| BleError::AdvertiseFailed.into())
}

/// SoftDevice configuration for a single-peer peripheral.
///
/// Internal RC oscillator for the low-frequency clock, one connection
/// slot, default ATT MTU - the 6-byte payload never needs more.
pub fn softdevice_config() -> Config {
    Config {
        clock: Some(raw::nrf_clock_lf_cfg_t {
            source: raw::NRF_CLOCK_LF_SRC_RC as u8,
            rc_ctiv: 16,
            rc_temp_ctiv: 2,
            accuracy: raw::NRF_CLOCK_LF_ACCURACY_500_PPM as u8,
        }),
        conn_gap: Some(raw::ble_gap_conn_cfg_t {
            conn_count: 1,
            event_length: 24,
        }),
        conn_gatt: Some(raw::ble_gatt_conn_cfg_t {
            att_mtu: raw::BLE_GATT_ATT_MTU_DEFAULT as u16,
        }),
        gap_role_count: Some(raw::ble_gap_cfg_role_count_t {
            adv_set_count: 1,
            periph_role_count: 1,
            central_role_count: 0,
            central_sec_count: 0,
            _bitfield_1: raw::ble_gap_cfg_role_count_t::new_bitfield_1(0),
        }),
        gap_device_name: Some(raw::ble_gap_cfg_device_name_t {
            p_value: config::DEVICE_NAME.as_ptr() as _,
            current_len: config::DEVICE_NAME.len() as u16,
            max_len: config::DEVICE_NAME.len() as u16,
            write_perm: unsafe { mem::zeroed() },
            _bitfield_1: raw::ble_gap_cfg_device_name_t::new_bitfield_1(
                raw::BLE_GATTS_VLOC_STACK as u8,
            ),
        }),
        ..Default::default()
    }
}
