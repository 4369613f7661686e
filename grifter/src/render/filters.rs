//! Template filters.

use std::collections::HashMap;

use tera::Value;

use crate::error::{Error, Result};
use crate::guest::BLACKHOLE_PORT;
use crate::interface::DATA_PORT_BASE;

/// Ports at or above this index are rejected (except the blackhole port).
pub const MAX_EXPLODED_PORT: u32 = 100;

/// Turns an interface index into a UDP tunnel port above `base`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] unless `port` is below 100 or is the
/// blackhole port 666.
///
/// # Examples
///
/// ```
/// use grifter::render::explode_port;
///
/// assert_eq!(explode_port(1, 10000).unwrap(), 10001);
/// assert_eq!(explode_port(666, 11000).unwrap(), 11666);
/// assert!(explode_port(100, 10000).is_err());
/// ```
pub fn explode_port(port: u32, base: u32) -> Result<u32> {
    if port != BLACKHOLE_PORT && port >= MAX_EXPLODED_PORT {
        return Err(Error::InvalidArgument {
            reason: format!("port must be an integer from 0 to 99 or {BLACKHOLE_PORT}, got {port}"),
        });
    }
    base.checked_add(port).ok_or_else(|| Error::InvalidArgument {
        reason: format!("base port {base} is too large"),
    })
}

/// The `explode_port` filter: `{{ port | explode_port(base=11000) }}`.
///
/// `base` defaults to the data port base.
///
/// # Errors
///
/// Returns a template error if the value or `base` is not a non-negative
/// integer, or if [`explode_port`] rejects the port.
pub fn explode_port_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let port = as_port(value).ok_or_else(|| {
        tera::Error::msg(format!("explode_port: expected an integer port, got {value}"))
    })?;
    let base = match args.get("base") {
        Some(base) => as_port(base).ok_or_else(|| {
            tera::Error::msg(format!("explode_port: base must be an integer, got {base}"))
        })?,
        None => DATA_PORT_BASE,
    };

    explode_port(port, base)
        .map(Value::from)
        .map_err(|e| tera::Error::msg(format!("explode_port: {e}")))
}

fn as_port(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|n| u32::try_from(n).ok())
}
