use clap::{Parser, Subcommand};
use color::Color;

/// Swatch. Renders, combines and adjusts 24-bit terminal colors.
///
/// Colors are given as `r,g,b` (e.g. `255,165,0`) or hex (`#ffa500`, `#fa0`).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, author)]
pub(super) struct Args {
    /// Print the channel values next to every swatch
    #[arg(long, global = true, action)]
    pub values: bool,

    /// Command to run, defaults to `demo`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub(crate) enum Command {
    /// Run the built-in demonstration
    Demo,
    /// Print one swatch per color
    Show {
        #[arg(required = true)]
        colors: Vec<Color>,
    },
    /// Add colors channel by channel, saturating at 255
    Add {
        #[arg(required = true, num_args = 2..)]
        colors: Vec<Color>,
    },
    /// Adjust the contrast of a color
    Contrast {
        color: Color,
        /// Contrast factor from 0 (flat gray) to 1 (unchanged)
        #[arg(long, short, allow_negative_numbers = true)]
        factor: f64,
    },
    /// Check whether two colors are equal
    Eq { first: Color, second: Color },
    /// Count the distinct colors given
    Distinct {
        #[arg(required = true)]
        colors: Vec<Color>,
    },
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use color::Color;

    use super::{Args, Command};

    #[test]
    fn no_subcommand_leaves_command_empty() {
        let args = Args::try_parse_from(["swatch"]).unwrap();
        assert_eq!(args.command, None);
        assert!(!args.values);
    }

    #[test]
    fn parses_colors_in_both_notations() {
        let args = Args::try_parse_from(["swatch", "add", "255,0,0", "#00ff00"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Add {
                colors: vec![Color::new(255, 0, 0), Color::new(0, 255, 0)]
            })
        );
    }

    #[test]
    fn add_needs_two_colors() {
        assert!(Args::try_parse_from(["swatch", "add", "255,0,0"]).is_err());
    }

    #[test]
    fn rejects_malformed_color() {
        assert!(Args::try_parse_from(["swatch", "show", "300,0,0"]).is_err());
    }

    #[test]
    fn contrast_accepts_negative_factor_for_validation_later() {
        let args =
            Args::try_parse_from(["swatch", "contrast", "1,2,3", "--factor", "-0.1"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Contrast {
                color: Color::new(1, 2, 3),
                factor: -0.1
            })
        );
    }

    #[test]
    fn values_flag_is_global() {
        let args = Args::try_parse_from(["swatch", "show", "1,2,3", "--values"]).unwrap();
        assert!(args.values);
    }
}
