//! Time.
//!
//! Canonical unit: the second, with SI prefixes for the subdivisions and
//! the civil minute, hour, and day on top.

use mensura_core::quantity;

quantity! {
    /// Elapsed time, canonical in seconds.
    pub struct Time {
        name: "Time",
        si unit "s" = 1.0;
        unit "min" = 60.0;
        unit "h" = 3600.0;
        unit "d" = 86400.0;
    }
}
