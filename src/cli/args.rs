/// CLI argument definitions via clap derive.
use clap::{ArgAction, Parser};

use crate::format::Unit;
use crate::uksm::Counter;

/// uksmctl — small tool to control UKSM.
#[derive(Debug, Parser)]
#[command(name = "uksmctl", about = "Small tool to control UKSM", version)]
#[allow(clippy::struct_excessive_bools)] // independent single-letter switches
pub struct CtlCli {
    /// Activate UKSM.
    #[arg(short = 'a')]
    pub activate: bool,

    /// Deactivate UKSM.
    #[arg(short = 'd')]
    pub deactivate: bool,

    /// Toggle UKSM state.
    #[arg(short = 's')]
    pub toggle: bool,

    /// Be verbose (up to -vv).
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Print results as compact JSON, one object per line.
    #[arg(long)]
    pub json: bool,
}

/// uksmstat — small tool to show UKSM statistics.
#[derive(Debug, Parser)]
#[command(name = "uksmstat", about = "Small tool to show UKSM statistics", version)]
#[allow(clippy::struct_excessive_bools)] // independent single-letter switches
pub struct StatCli {
    /// Show whether UKSM is active.
    #[arg(short = 'a')]
    pub active: bool,

    /// Show unshared memory.
    #[arg(short = 'u')]
    pub unshared: bool,

    /// Show shared (saved) memory.
    #[arg(short = 's')]
    pub shared: bool,

    /// Show scanned memory.
    #[arg(short = 'c')]
    pub scanned: bool,

    /// Report sizes in kibibytes.
    #[arg(short = 'k', overrides_with_all = ["kibibytes", "mebibytes", "gibibytes"])]
    pub kibibytes: bool,

    /// Report sizes in mebibytes.
    #[arg(short = 'm', overrides_with_all = ["kibibytes", "mebibytes", "gibibytes"])]
    pub mebibytes: bool,

    /// Report sizes in gibibytes.
    #[arg(short = 'g', overrides_with_all = ["kibibytes", "mebibytes", "gibibytes"])]
    pub gibibytes: bool,

    /// Decimal places for sizes; each occurrence adds one (default: 2).
    #[arg(short = 'p', action = ArgAction::Count)]
    pub precision: u8,

    /// Be verbose (up to -vv; further repetitions change nothing).
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Print results as compact JSON, one object per line.
    #[arg(long)]
    pub json: bool,
}

impl StatCli {
    /// The selected size unit; raw bytes when no unit flag is given.
    ///
    /// The unit flags override each other, so when several are given only
    /// the last one in argument order is still set here.
    #[must_use]
    pub fn unit(&self) -> Unit {
        if self.kibibytes {
            Unit::Kibibytes
        } else if self.mebibytes {
            Unit::Mebibytes
        } else if self.gibibytes {
            Unit::Gibibytes
        } else {
            Unit::Bytes
        }
    }

    /// Effective decimal places: the `-p` count, or 2 when never given.
    #[must_use]
    pub fn precision(&self) -> usize {
        if self.precision == 0 {
            2
        } else {
            usize::from(self.precision)
        }
    }

    /// Effective verbosity, clamped to the highest level that changes output.
    #[must_use]
    pub fn verbosity(&self) -> u8 {
        self.verbose.min(2)
    }

    /// Counters requested, in fixed display order (unshared, shared, scanned)
    /// regardless of flag order.
    #[must_use]
    pub fn counters(&self) -> Vec<Counter> {
        let mut counters = Vec::new();
        if self.unshared {
            counters.push(Counter::Unshared);
        }
        if self.shared {
            counters.push(Counter::Sharing);
        }
        if self.scanned {
            counters.push(Counter::Scanned);
        }
        counters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_flag_is_usage_error() {
        assert!(CtlCli::try_parse_from(["uksmctl", "-z"]).is_err());
        assert!(StatCli::try_parse_from(["uksmstat", "-z"]).is_err());
    }

    #[test]
    fn test_ctl_operation_flags_parse() {
        let cli = CtlCli::try_parse_from(["uksmctl", "-a", "-d", "-s"]).unwrap();
        assert!(cli.activate && cli.deactivate && cli.toggle);
    }

    #[test]
    fn test_combined_short_flags() {
        let cli = StatCli::try_parse_from(["uksmstat", "-ausk"]).unwrap();
        assert!(cli.active && cli.unshared && cli.shared);
        assert_eq!(cli.unit(), Unit::Kibibytes);
    }

    #[test]
    fn test_unit_defaults_to_bytes() {
        let cli = StatCli::try_parse_from(["uksmstat", "-u"]).unwrap();
        assert_eq!(cli.unit(), Unit::Bytes);
    }

    #[test]
    fn test_last_unit_flag_wins() {
        let cli = StatCli::try_parse_from(["uksmstat", "-u", "-k", "-m", "-g"]).unwrap();
        assert_eq!(cli.unit(), Unit::Gibibytes);
        let cli = StatCli::try_parse_from(["uksmstat", "-u", "-g", "-k"]).unwrap();
        assert_eq!(cli.unit(), Unit::Kibibytes);
    }

    #[test]
    fn test_repeated_unit_flag_is_accepted() {
        let cli = StatCli::try_parse_from(["uksmstat", "-k", "-k"]).unwrap();
        assert_eq!(cli.unit(), Unit::Kibibytes);
    }

    #[test]
    fn test_precision_counts_occurrences() {
        let cli = StatCli::try_parse_from(["uksmstat", "-u"]).unwrap();
        assert_eq!(cli.precision(), 2);
        let cli = StatCli::try_parse_from(["uksmstat", "-u", "-p"]).unwrap();
        assert_eq!(cli.precision(), 1);
        let cli = StatCli::try_parse_from(["uksmstat", "-u", "-ppp"]).unwrap();
        assert_eq!(cli.precision(), 3);
    }

    #[test]
    fn test_stat_verbosity_is_unbounded_but_clamped() {
        let cli = StatCli::try_parse_from(["uksmstat", "-u", "-vvvv"]).unwrap();
        assert_eq!(cli.verbose, 4);
        assert_eq!(cli.verbosity(), 2);
    }

    #[test]
    fn test_counters_come_back_in_fixed_order() {
        let cli = StatCli::try_parse_from(["uksmstat", "-c", "-s", "-u"]).unwrap();
        assert_eq!(
            cli.counters(),
            vec![Counter::Unshared, Counter::Sharing, Counter::Scanned]
        );
    }

    #[test]
    fn test_no_counters_requested() {
        let cli = StatCli::try_parse_from(["uksmstat", "-a"]).unwrap();
        assert!(cli.counters().is_empty());
    }
}
