//! Invoking the shared printer from several threads at once.

use std::io::Write;
use std::sync::{Mutex, PoisonError};
use std::thread;

use dp_core::{Error, Handle, Result};
use log::debug;

use crate::printer::Printer;

/// Invoke `printer` once from each of `threads` scoped workers, writing to
/// `out`.
///
/// Each worker fetches the instance on its own and fails with
/// [`Error::Runtime`] if it differs from the handle it was given.
pub fn run_workers<W>(
    printer: Handle<'static, Printer>,
    threads: u16,
    out: &Mutex<W>,
) -> Result<()>
where
    W: Write + Send,
{
    thread::scope(|s| {
        let workers: Vec<_> = (0..threads)
            .map(|n| {
                s.spawn(move || {
                    let fetched = Printer::instance();
                    if fetched != printer {
                        return Err(Error::Runtime(format!(
                            "worker {n} saw a second printer"
                        )));
                    }
                    let mut out = out.lock().unwrap_or_else(PoisonError::into_inner);
                    fetched.invoke_to(&mut *out)?;
                    debug!("worker {n} invoked printer {:#x}", fetched.id());
                    Ok(())
                })
            })
            .collect();
        workers
            .into_iter()
            .map(|w| {
                w.join().unwrap_or_else(|_| {
                    Err(Error::Runtime("worker thread panicked".to_string()))
                })
            })
            .collect::<Result<Vec<()>>>()
            .map(|_| ())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_workers_print_four_lines() {
        let out = Mutex::new(Vec::new());
        run_workers(Printer::instance(), 4, &out).unwrap();
        let text = String::from_utf8(out.into_inner().unwrap()).unwrap();
        assert_eq!(text, "Inside print function\n".repeat(4));
        assert_eq!(Printer::constructions(), 1);
    }

    #[test]
    fn zero_workers_print_nothing() {
        let out = Mutex::new(Vec::new());
        run_workers(Printer::instance(), 0, &out).unwrap();
        assert!(out.into_inner().unwrap().is_empty());
    }
}
