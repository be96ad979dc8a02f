//! Broker products.
//!
//! A broker turns a FIX message into a result string. The two concrete
//! brokers here only return a fixed marker naming themselves.

/// A message-parsing strategy produced by a [`Creator`][crate::Creator].
pub trait Broker {
    /// Short display name of the broker.
    fn name(&self) -> &'static str;

    /// Parse a FIX message and describe the outcome.
    fn parse_fix_message(&self) -> String;
}

/// The HSBC broker.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hsbc;

impl Broker for Hsbc {
    fn name(&self) -> &'static str {
        "HSBC"
    }

    fn parse_fix_message(&self) -> String {
        "{Result of the CHSBC}".to_string()
    }
}

/// The Axis broker.
#[derive(Debug, Clone, Copy, Default)]
pub struct Axis;

impl Broker for Axis {
    fn name(&self) -> &'static str {
        "Axis"
    }

    fn parse_fix_message(&self) -> String {
        "{Result of the CAxis}".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_report_themselves() {
        let brokers: [&dyn Broker; 2] = [&Hsbc, &Axis];
        let results: Vec<_> = brokers.iter().map(|b| b.parse_fix_message()).collect();
        assert_eq!(results, ["{Result of the CHSBC}", "{Result of the CAxis}"]);
        assert_eq!(Hsbc.name(), "HSBC");
        assert_eq!(Axis.name(), "Axis");
    }
}
