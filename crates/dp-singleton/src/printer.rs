//! The process-wide printer.
//!
//! `Printer` has no public constructor and implements neither `Clone` nor
//! `Copy`: the only way to reach one is [`Printer::instance`].

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

use dp_core::{define_singleton, Result};
use log::debug;

/// The fixed line emitted by [`Printer::invoke`].
pub const MESSAGE: &str = "Inside print function";

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

/// A stateless service with one observable operation.
#[derive(Debug)]
pub struct Printer {
    _private: (),
}

impl Printer {
    fn new() -> Self {
        let count = CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("printer constructed (construction #{count})");
        Self { _private: () }
    }

    define_singleton!(
        /// Return a handle to the shared printer, constructing it on first use.
        ///
        /// Safe to call from any thread, any number of times; every call
        /// returns a handle to the same instance.
        pub fn instance() -> Printer = Printer::new()
    );

    /// How many printers have been constructed in this process (0 or 1).
    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    /// Write [`MESSAGE`] to standard output.
    pub fn invoke(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.invoke_to(&mut out)
    }

    /// Write [`MESSAGE`] followed by a newline to `out`.
    pub fn invoke_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{MESSAGE}")?;
        out.flush()?;
        Ok(())
    }
}
