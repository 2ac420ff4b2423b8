use once_cell::sync::Lazy;
use std::fmt::Arguments;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError, ErrorKind, Write};
use std::sync::{Mutex, MutexGuard};

/// Verbose run log; `None` until `init_global_logger` succeeds.
static LOGGER: Lazy<Mutex<Option<BufWriter<File>>>> = Lazy::new(|| Mutex::new(None));

fn lock_logger() -> Result<MutexGuard<'static, Option<BufWriter<File>>>, IoError> {
    LOGGER
        .lock()
        .map_err(|_| IoError::new(ErrorKind::Other, "logger mutex poisoned"))
}

/// Opens `log_file_path` as the run log, truncating what an earlier run left.
pub fn init_global_logger(log_file_path: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_file_path)?;
    *lock_logger()? = Some(BufWriter::new(file));
    Ok(())
}

/// Appends one line to the run log. Lines are dropped while no log is open;
/// a log that cannot be written to sends them to stderr instead.
fn write_line(prefix: &str, args: Arguments<'_>) {
    match lock_logger() {
        Ok(mut guard) => {
            if let Some(writer) = guard.as_mut() {
                if writeln!(writer, "{}{}", prefix, args).is_err() {
                    eprintln!("[log unavailable] {}{}", prefix, args);
                }
            }
        }
        Err(_) => eprintln!("[log unavailable] {}{}", prefix, args),
    }
}

pub fn log_verbose_message_args(args: Arguments<'_>) {
    write_line("", args);
}

pub fn log_verbose_error_args(args: Arguments<'_>) {
    write_line("ERROR: ", args);
}

/// Flushes the run log, if one is open.
pub fn flush_global_logger() -> Result<(), IoError> {
    match lock_logger()?.as_mut() {
        Some(writer) => writer.flush(),
        None => Ok(()),
    }
}
