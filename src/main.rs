#![no_std]
#![no_main]

use bsp::hal;
use bsp::pac;
use itsybitsy_m0 as bsp;
use rtic::app;

#[app(device = bsp::pac, dispatchers = [EVSYS])]
mod app {
    use hal::clock::GenericClockController;
    use hal::prelude::*;
    use hal::rtc;
    use hal::sercom::v2::{uart, Sercom0};
    use hal::typelevel::NoneT;
    use panic_halt as _;

    use samd_event_counter::control::ControlState;
    use samd_event_counter::logger;
    use samd_event_counter::samd21::Samd21;
    use samd_event_counter::{Config, EventCounter, PwmSingle, SenseMode};

    use crate::bsp;
    use crate::hal;
    use crate::pac;

    type UartTx = uart::Uart<uart::Config<uart::Pads<Sercom0, NoneT, bsp::UartTx>>, uart::Tx>;

    struct UartSink(UartTx);

    impl logger::Sink for UartSink {
        fn write_bytes(&mut self, bytes: &[u8]) {
            for &b in bytes {
                while self.0.write(b).is_err() {}
            }
        }
    }

    /// Step input on A0 (PA02), counted by TC3.
    const STEP_PORT: u8 = 0;
    const STEP_PIN: u8 = 2;
    const STEP_TC: u8 = 3;

    /// Coil driver on D10 (PA18, TCC0 WO[2]).
    const PWM_PIN: u8 = 18;
    const PWM_FREQ_HZ: u32 = 1000;

    const SAMPLE_PERIOD_MS: u32 = 10;

    #[shared]
    struct Shared {
        control: ControlState,
    }

    #[local]
    struct Local {
        regs: Samd21,
        config: Config,
        step_counter: EventCounter,
        pwm: PwmSingle,
    }

    #[monotonic(binds = RTC, default = true)]
    type RtcMonotonic = rtc::Rtc<rtc::Count32Mode>;

    #[init(local = [
        uart_sink: Option<UartSink> = None,
    ])]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut peripherals: pac::Peripherals = cx.device;

        let mut clocks = GenericClockController::with_internal_32kosc(
            peripherals.GCLK,
            &mut peripherals.PM,
            &mut peripherals.SYSCTRL,
            &mut peripherals.NVMCTRL,
        );
        let gclk0 = clocks.gclk0();
        let gclk1 = clocks.gclk1();

        let rtc_clock = clocks.rtc(&gclk1).unwrap();
        let rtc = rtc::Rtc::count32_mode(peripherals.RTC, rtc_clock.freq(), &mut peripherals.PM);

        let pins = bsp::Pins::new(peripherals.PORT);

        let uart_tx = {
            let clock = &clocks.sercom0_core(&gclk0).unwrap();
            let pads = uart::Pads::default().tx(pins.d1);
            uart::Config::new(&peripherals.PM, peripherals.SERCOM0, pads, clock.freq())
                .baud(
                    115200.hz(),
                    uart::BaudMode::Fractional(uart::Oversampling::Bits16),
                )
                .enable()
        };
        let sink = cx.local.uart_sink.insert(UartSink(uart_tx));
        logger::init(sink, log::LevelFilter::Info);

        // The counter and PWM sequences program PM, GCLK, PORT, EIC, EVSYS, TC3 and TCC0
        // directly, after the clock controller above has brought up GCLK0.
        let mut regs = unsafe { Samd21::steal() };
        let config = Config::default();

        let mut step_counter = EventCounter::new(STEP_PORT, STEP_PIN, STEP_TC, SenseMode::Rise);
        if let Err(e) = step_counter.begin(&mut regs, &config) {
            log::error!("step counter: {}", e);
        }

        let mut pwm = PwmSingle::new();
        if let Err(e) = pwm.begin(&mut regs, &config, PWM_PIN, PWM_FREQ_HZ, 0) {
            log::error!("PWM: {}", e);
        }

        sample::spawn().ok();

        (
            Shared {
                control: ControlState::new(),
            },
            Local {
                regs,
                config,
                step_counter,
                pwm,
            },
            init::Monotonics(rtc),
        )
    }

    #[task(
        shared = [control],
        local = [regs, config, step_counter, pwm]
    )]
    fn sample(mut cx: sample::Context) {
        let regs: &mut Samd21 = cx.local.regs;
        let config: &Config = cx.local.config;

        match cx.local.step_counter.read(regs, config) {
            Ok(steps) => {
                let effort = cx.shared.control.lock(|control| {
                    control.step_count = steps as i32;
                    control.shift_history();
                    control.effort
                });
                let duty = effort.clamp(0, PwmSingle::MAX_DUTY as i32) as u8;
                if let Err(e) = cx.local.pwm.set_duty_cycle(regs, config, duty) {
                    log::warn!("PWM update failed: {}", e);
                }
                log::debug!("steps {}", steps);
            }
            Err(e) => log::warn!("step counter: {}", e),
        }

        sample::spawn_at(monotonics::now() + rtc::Duration::millis(SAMPLE_PERIOD_MS)).ok();
    }
}
