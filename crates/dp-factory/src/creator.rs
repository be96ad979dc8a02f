//! Creators: the factory method and the logic shared by every creator.
//!
//! The set of creators is closed, so they form an enum. Each variant maps to
//! a constructor function for its product; the shared logic in
//! [`Creator::parse_fix_message`] only ever sees a `dyn Broker`.

use std::io::Write;

use dp_core::Result;
use log::debug;

use crate::broker::{Axis, Broker, Hsbc};

/// A concrete creator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Creator {
    /// Builds [`Hsbc`].
    Hsbc,
    /// Builds [`Axis`].
    Axis,
}

fn new_hsbc() -> Box<dyn Broker> {
    Box::new(Hsbc)
}

fn new_axis() -> Box<dyn Broker> {
    Box::new(Axis)
}

impl Creator {
    /// Every creator, in menu order.
    pub const ALL: [Creator; 2] = [Creator::Hsbc, Creator::Axis];

    /// Look up the creator for a menu selection number.
    pub fn from_selection(selection: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.selection() == selection)
    }

    /// The number that selects this creator in the menu.
    pub fn selection(self) -> i64 {
        match self {
            Creator::Hsbc => 1,
            Creator::Axis => 2,
        }
    }

    /// The label printed next to the selection number.
    pub fn label(self) -> &'static str {
        match self {
            Creator::Hsbc => "HSBC",
            Creator::Axis => "Axix",
        }
    }

    fn constructor(self) -> fn() -> Box<dyn Broker> {
        match self {
            Creator::Hsbc => new_hsbc,
            Creator::Axis => new_axis,
        }
    }

    /// The factory method: build this creator's product.
    pub fn factory_method(self) -> Box<dyn Broker> {
        (self.constructor())()
    }

    /// Run the shared creator logic against a freshly built product.
    pub fn parse_fix_message(self) -> String {
        let broker = self.factory_method();
        debug!("{self:?} built broker {}", broker.name());
        format!(
            "Creator: The same creator's code has just worked with {}",
            broker.parse_fix_message()
        )
    }

    /// The line the application prints when it launches with this creator.
    pub fn launch_message(self) -> String {
        format!(
            "App: Launched with the ConcreteCreator{}.",
            self.selection()
        )
    }
}

/// Client code: works with any creator without knowing which one it has.
pub fn client_code<W: Write + ?Sized>(creator: &Creator, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "Client: I'm not aware of the creator's class, but it still works."
    )?;
    writeln!(out, "{}", creator.parse_fix_message())?;
    Ok(())
}
