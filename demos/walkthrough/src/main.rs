// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Console walkthrough of the smart home library.
//!
//! Drives the full core surface the way a front end would: builds a home,
//! adds devices, toggles them individually and in bulk, hits the capacity
//! limit, updates options with valid and invalid values, and removes a
//! device.

use smarthome_lib::{Device, SmartHome};

fn main() -> smarthome_lib::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut home = SmartHome::with_capacity(3)?;

    println!("Adding devices...");
    home.add_device(Device::plug(120)?)?;
    home.add_device(Device::tv(5)?)?;
    home.add_device(Device::door(true))?;
    println!("{home}\n");

    println!("Toggling each device individually...");
    for index in 0..home.len() {
        let state = home.toggle_device(index)?;
        println!("  device {index} is now {state}");
    }
    println!("{home}\n");

    println!("Switching everything off, then on...");
    println!("  switched off {} device(s)", home.switch_all_off());
    println!("  switched on {} device(s)", home.switch_all_on());
    println!("  switching on again changes {} device(s)", home.switch_all_on());
    println!("{home}\n");

    println!("Trying to add a fourth device to a home of three...");
    match home.add_device(Device::plug(90)?) {
        Ok(index) => println!("  unexpected success at index {index}"),
        Err(err) => println!("  rejected: {err}"),
    }

    println!("\nUpdating options with valid values...");
    home.update_option(0, 150)?;
    home.update_option(1, 10)?;
    home.update_option(2, false)?;
    println!("{home}\n");

    println!("Updating options with invalid values...");
    for (index, value) in [(0, "-60"), (1, "-60"), (2, "yes")] {
        let result = match value.parse::<i64>() {
            Ok(number) => home.update_option(index, number),
            Err(_) => home.update_option(index, value),
        };
        match result {
            Ok(()) => println!("  unexpected success on device {index}"),
            Err(err) => println!("  rejected: {err}"),
        }
    }
    println!("\nState is unchanged after rejected updates:");
    println!("{home}\n");

    println!("Removing the first device...");
    let removed = home.remove_device(0)?;
    println!("  removed: {removed}");

    println!("\nFinal state:");
    println!("{home}");

    Ok(())
}
