// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end scenarios driving the full library surface the way a front
//! end would.

use smarthome_lib::{Device, Error, OptionValue, SmartHome, ValueError};

#[test]
fn full_walkthrough() {
    let mut home = SmartHome::with_capacity(3).unwrap();

    home.add_device(Device::plug(120).unwrap()).unwrap();
    home.add_device(Device::tv(5).unwrap()).unwrap();
    home.add_device(Device::door(true)).unwrap();

    assert_eq!(
        home.to_string(),
        "SmartHome with 3 device(s):\n\
         1- Plug is off with consumption rate 120\n\
         2- TV is off with channel 5\n\
         3- Door is off with locked true"
    );

    // Toggle each device individually
    for index in 0..home.len() {
        home.toggle_device(index).unwrap();
    }
    assert!(home.devices().iter().all(Device::is_on));

    // Bulk off, then bulk on
    assert_eq!(home.switch_all_off(), 3);
    assert!(home.devices().iter().all(|d| !d.is_on()));
    assert_eq!(home.switch_all_on(), 3);

    // The home is full now
    let err = home.add_device(Device::plug(90).unwrap()).unwrap_err();
    assert_eq!(err, Error::CapacityReached { max: 3 });

    // Update every option with a valid value
    home.update_option(0, 150).unwrap();
    home.update_option(1, 10).unwrap();
    home.update_option(2, false).unwrap();

    // Invalid updates leave state untouched
    assert!(home.update_option(0, -60).is_err());
    assert!(home.update_option(1, -60).is_err());
    assert!(home.update_option(2, "yes").is_err());
    assert_eq!(home.device(0).unwrap().option(), OptionValue::Integer(150));
    assert_eq!(home.device(1).unwrap().option(), OptionValue::Integer(10));
    assert_eq!(home.device(2).unwrap().option(), OptionValue::Boolean(false));

    // Remove the first device; the rest shift down
    let removed = home.remove_device(0).unwrap();
    assert_eq!(removed.name(), "Plug");
    assert_eq!(home.len(), 2);
    assert_eq!(home.device(0).unwrap().name(), "TV");

    assert!(matches!(
        home.remove_device(10),
        Err(Error::IndexOutOfBounds { index: 10, len: 2 })
    ));
}

#[test]
fn plug_option_bounds_are_inclusive() {
    let mut home = SmartHome::new();
    home.add_device(Device::plug(0).unwrap()).unwrap();

    home.update_option(0, 0).unwrap();
    home.update_option(0, 150).unwrap();
    assert!(home.update_option(0, 151).is_err());
    assert!(home.update_option(0, -1).is_err());
}

#[test]
fn tv_option_bounds_are_inclusive() {
    let mut home = SmartHome::new();
    home.add_device(Device::tv(1).unwrap()).unwrap();

    home.update_option(0, 1).unwrap();
    home.update_option(0, 734).unwrap();
    assert!(home.update_option(0, 0).is_err());
    assert!(home.update_option(0, 735).is_err());
}

#[test]
fn capacity_two_scenario() {
    let mut home = SmartHome::with_capacity(2).unwrap();
    home.add_device(Device::plug(10).unwrap()).unwrap();
    home.add_device(Device::tv(5).unwrap()).unwrap();

    let err = home.add_device(Device::door(true)).unwrap_err();
    assert_eq!(err, Error::CapacityReached { max: 2 });
    assert_eq!(home.devices().len(), 2);
}

#[test]
fn locked_door_rejects_string_update() {
    let mut home = SmartHome::new();
    home.add_device(Device::door(true)).unwrap();

    let err = home.update_option(0, "yes").unwrap_err();
    assert!(matches!(err, Error::Value(ValueError::WrongKind { .. })));
    assert_eq!(
        err.to_string(),
        "value error: locked must be true or false, got yes"
    );
    assert_eq!(home.device(0).unwrap().option(), OptionValue::Boolean(true));
}

#[test]
fn removing_middle_device_shifts_indices() {
    let mut home = SmartHome::new();
    home.add_device(Device::plug(50).unwrap()).unwrap();
    home.add_device(Device::tv(10).unwrap()).unwrap();
    home.add_device(Device::door(true)).unwrap();

    let previously_last = home.device(2).unwrap().clone();
    home.remove_device(1).unwrap();
    assert_eq!(*home.device(1).unwrap(), previously_last);
}

#[test]
fn plug_round_trip_description() {
    let plug = Device::plug(45).unwrap();
    assert_eq!(plug.to_string(), "Plug is off with consumption rate 45");
}

#[test]
fn home_state_serializes_for_front_ends() {
    let mut home = SmartHome::with_capacity(2).unwrap();
    home.add_device(Device::plug(45).unwrap()).unwrap();
    home.add_device(Device::door(true)).unwrap();
    home.toggle_device(0).unwrap();

    let snapshot = serde_json::to_value(&home).unwrap();
    assert_eq!(
        snapshot,
        serde_json::json!({
            "devices": [
                { "Plug": { "power": "on", "rate": 45 } },
                { "Door": { "power": "off", "locked": true } },
            ],
            "max_capacity": 2,
        })
    );
}
