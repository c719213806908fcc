//! Metric and binary prefix tables used by prefixable units.

/// A single multiplier prefix (e.g. `k` = 1000).
#[derive(Clone, Copy, Debug)]
pub(crate) struct Prefix {
    pub(crate) symbol: &'static str,
    pub(crate) factor: f64,
}

const fn prefix(symbol: &'static str, factor: f64) -> Prefix {
    Prefix { symbol, factor }
}

/// The SI decimal prefixes, yocto through yotta.
pub(crate) const SI: &[Prefix] = &[
    prefix("da", 1e1),
    prefix("h", 1e2),
    prefix("k", 1e3),
    prefix("M", 1e6),
    prefix("G", 1e9),
    prefix("T", 1e12),
    prefix("P", 1e15),
    prefix("E", 1e18),
    prefix("Z", 1e21),
    prefix("Y", 1e24),
    prefix("d", 1e-1),
    prefix("c", 1e-2),
    prefix("m", 1e-3),
    prefix("u", 1e-6),
    prefix("n", 1e-9),
    prefix("p", 1e-12),
    prefix("f", 1e-15),
    prefix("a", 1e-18),
    prefix("z", 1e-21),
    prefix("y", 1e-24),
];

/// The IEC binary prefixes, kibi through yobi.
pub(crate) const BINARY: &[Prefix] = &[
    prefix("Ki", 1024.0),
    prefix("Mi", 1024.0 * 1024.0),
    prefix("Gi", 1024.0 * 1024.0 * 1024.0),
    prefix("Ti", 1024.0 * 1024.0 * 1024.0 * 1024.0),
    prefix("Pi", 1125899906842624.0),
    prefix("Ei", 1152921504606846976.0),
    prefix("Zi", 1180591620717411303424.0),
    prefix("Yi", 1208925819614629174706176.0),
];

/// Which automatic prefix family a [`Unit`](crate::Unit) belongs to.
///
/// A prefixable unit is expanded into its full prefix family when its
/// provider's parsable-unit list is built, not at lex time: a prefixable
/// `"g"` with scale `s` yields a parsable `"kg"` with scale `s * 1000`, a
/// `"mg"` with `s / 1000`, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefixFamily {
    /// SI decimal prefixes (`da`, `h`, `k`, … `Y`; `d`, `c`, `m`, … `y`).
    Si,
    /// IEC binary prefixes (`Ki`, `Mi`, … `Yi`).
    Binary,
}

impl PrefixFamily {
    pub(crate) fn prefixes(self) -> &'static [Prefix] {
        match self {
            PrefixFamily::Si => SI,
            PrefixFamily::Binary => BINARY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn si_kilo_factor() {
        let kilo = SI.iter().find(|p| p.symbol == "k").unwrap();
        assert_eq!(kilo.factor, 1e3);
    }

    #[test]
    fn binary_kibi_factor() {
        let kibi = BINARY.iter().find(|p| p.symbol == "Ki").unwrap();
        assert_eq!(kibi.factor, 1024.0);
    }

    #[test]
    fn si_has_twenty_entries() {
        assert_eq!(SI.len(), 20);
    }
}
