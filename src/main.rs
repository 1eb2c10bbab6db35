//! M5Reader start-up firmware for nRF52840 + SSD1306.
//!
//! Shows the splash screen, then the start menu, then idles. There is
//! no input handling; the menu stays on screen until power-off.

#![no_std]
#![no_main]

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Delay, Duration, Timer};
use {cortex_m as _, defmt_rtt as _, panic_probe as _};

use m5reader::error::Error;
use m5reader::ui::{display, screens};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("m5reader starting");

    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K400;
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, i2c_config);

    if let Err(e) = run(i2c) {
        error!("Start-up screens failed: {}", e);
    }

    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}

fn run<I2C>(i2c: I2C) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let mut display = display::init(i2c)?;

    info!("UI: splash");
    screens::show_splash(&mut display, &mut Delay)?;

    info!("UI: menu");
    screens::show_menu(&mut display)
}
