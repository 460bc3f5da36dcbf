/// Log output.
///
/// Sends `log` records and `panel_print!` output to a text sink registered
/// at start-up: the debug UART on the instrument, a string buffer in the
/// simulator. Until a sink is registered, output is dropped.

use core::fmt::{self, Write};
use spin::Mutex;

pub type Sink = &'static mut (dyn Write + Send);

static SINK: Mutex<Option<Sink>> = Mutex::new(None);

struct PanelLogger;

static LOGGER: PanelLogger = PanelLogger;

impl log::Log for PanelLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            _print(format_args!(
                "[{:<5}] {}: {}\n",
                record.level(),
                record.target(),
                record.args()
            ));
        }
    }

    fn flush(&self) {}
}

/// Replace the output sink, returning the previous one.
///
/// The sink is written with the sink lock held, so it must not log or
/// `panel_print!` itself.
pub fn set_sink(sink: Sink) -> Option<Sink> {
    SINK.lock().replace(sink)
}

/// Install the logger with `sink` as its output. The sink is registered even
/// if another logger already owns the `log` facade.
pub fn init(sink: Sink, level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    set_sink(sink);
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

#[macro_export]
macro_rules! panel_print {
    ($($arg:tt)*) => {
        $crate::logger::_print(::core::format_args!($($arg)*));
    };
}

#[macro_export]
macro_rules! panel_println {
    () => ($crate::panel_print!("\n"));
    ($($arg:tt)*) => ($crate::panel_print!("{}\n", ::core::format_args!($($arg)*)));
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments<'_>) {
    if let Some(sink) = SINK.lock().as_mut() {
        let _ = sink.write_fmt(args);
    }
}
