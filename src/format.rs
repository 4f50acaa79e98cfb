/// Unit scaling and display rendering for page counters.
///
/// One function covers every counter/verbosity/unit combination; the
/// callers only differ in the label and raw value they pass in.

/// Size units for counter output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Raw bytes (divisor 1); the default when no unit flag is given.
    #[default]
    Bytes,
    /// KiB (divisor 1024).
    Kibibytes,
    /// MiB (divisor 1024²).
    Mebibytes,
    /// GiB (divisor 1024³).
    Gibibytes,
}

impl Unit {
    /// Divisor applied to a byte value.
    #[must_use]
    pub fn divisor(self) -> u64 {
        match self {
            Self::Bytes => 1,
            Self::Kibibytes => 1 << 10,
            Self::Mebibytes => 1 << 20,
            Self::Gibibytes => 1 << 30,
        }
    }

    /// Display suffix.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Bytes => "B",
            Self::Kibibytes => "KiB",
            Self::Mebibytes => "MiB",
            Self::Gibibytes => "GiB",
        }
    }
}

/// Scale a page count to the unit's value: `pages × page_size ÷ divisor`.
#[must_use]
#[allow(clippy::cast_precision_loss)] // counters are bounded by physical memory, far below 2^52
pub fn scale(pages: u64, page_size: u64, unit: Unit) -> f64 {
    pages as f64 * page_size as f64 / unit.divisor() as f64
}

/// Render one counter line at the given verbosity.
///
/// * level 0 — bare number with `precision` decimals
/// * level 1 — number and unit suffix
/// * level 2 — labeled line, e.g. `Unshared pages: 4000.00 KiB`
///
/// Levels above 2 render like level 2. The caller appends the newline via
/// `println!`.
#[must_use]
pub fn render(
    label: &str,
    pages: u64,
    page_size: u64,
    unit: Unit,
    precision: usize,
    verbosity: u8,
) -> String {
    let value = scale(pages, page_size, unit);
    match verbosity {
        0 => format!("{value:.precision$}"),
        1 => format!("{value:.precision$} {}", unit.suffix()),
        _ => format!("{label}: {value:.precision$} {}", unit.suffix()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: u64 = 4096;

    #[test]
    fn test_kib_example_from_reference() {
        // 1000 pages of 4096 bytes = 4096000 bytes = 4000 KiB.
        assert_eq!(
            render("Shared pages", 1000, PAGE, Unit::Kibibytes, 2, 1),
            "4000.00 KiB"
        );
    }

    #[test]
    fn test_verbosity_zero_has_no_suffix_or_label() {
        let line = render("Shared pages", 1000, PAGE, Unit::Kibibytes, 2, 0);
        assert_eq!(line, "4000.00");
        assert!(!line.contains("KiB"));
        assert!(!line.contains(':'));
    }

    #[test]
    fn test_verbosity_two_carries_label() {
        assert_eq!(
            render("Unshared pages", 1000, PAGE, Unit::Kibibytes, 2, 2),
            "Unshared pages: 4000.00 KiB"
        );
    }

    #[test]
    fn test_verbosity_above_two_renders_like_two() {
        assert_eq!(
            render("Scanned pages", 1, PAGE, Unit::Kibibytes, 2, 7),
            render("Scanned pages", 1, PAGE, Unit::Kibibytes, 2, 2)
        );
    }

    #[test]
    fn test_default_unit_is_raw_bytes() {
        assert_eq!(render("Shared pages", 1, PAGE, Unit::default(), 2, 1), "4096.00 B");
    }

    #[test]
    fn test_gib_scaling() {
        // 262144 pages of 4096 bytes = 1 GiB exactly.
        assert_eq!(
            render("Shared pages", 262_144, PAGE, Unit::Gibibytes, 2, 1),
            "1.00 GiB"
        );
    }

    #[test]
    fn test_precision_controls_decimals() {
        assert_eq!(render("x", 1000, PAGE, Unit::Kibibytes, 0, 0), "4000");
        assert_eq!(render("x", 1000, PAGE, Unit::Kibibytes, 4, 0), "4000.0000");
    }

    #[test]
    fn test_sub_unit_values_keep_remainder() {
        // 1 page in MiB: 4096 / 1048576 ≈ 0.0039.
        assert_eq!(render("x", 1, PAGE, Unit::Mebibytes, 4, 0), "0.0039");
    }

    #[test]
    fn test_zero_pages() {
        assert_eq!(render("x", 0, PAGE, Unit::Kibibytes, 2, 1), "0.00 KiB");
    }
}
