use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;

/// Limit direction
///
/// The lines are always sorted ascending, the order decides which end of the sorted lines is
/// kept by the limit and how it is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Keep the smallest keys, ascending
    Asc,
    /// Keep the largest keys, descending
    Desc,
}

impl FromStr for Order {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(Order::Asc),
            "DES" => Ok(Order::Desc),
            _ => Err(anyhow!("Unsupported order: {}, expected ASC or DES", s)),
        }
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Order::Asc => write!(f, "ASC"),
            Order::Desc => write!(f, "DES"),
        }
    }
}
