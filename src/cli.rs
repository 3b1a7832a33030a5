#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    /// Raise the log level (`-v` debug, `-vv` trace); overrides RUST_LOG
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Tokens,
    Summary,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Scan a file and print its tokens
    Scan {
        file: std::path::PathBuf,

        /// Specifies the output format
        #[arg(short, long)]
        #[clap(value_enum, default_value_t = OutputFormat::Tokens)]
        format: OutputFormat,
    },

    /// Scan lines read from stdin until EOF or `exit`
    Repl {
        /// Specifies the output format
        #[arg(short, long)]
        #[clap(value_enum, default_value_t = OutputFormat::Tokens)]
        format: OutputFormat,
    },

    /// Print the sample expression tree `(-123) * (45.67)`
    Sample,
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::{Cli, Command, OutputFormat};

    #[test]
    fn parse_scan() {
        let cli = Cli::parse_from(["lox", "-vv", "scan", "a.lox", "--format", "summary"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Scan { file, format } => {
                assert_eq!(file, std::path::PathBuf::from("a.lox"));
                assert_eq!(format, OutputFormat::Summary);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn repl_defaults_to_tokens() {
        let cli = Cli::parse_from(["lox", "repl"]);
        assert_eq!(cli.verbose, 0);
        assert!(matches!(
            cli.command,
            Command::Repl {
                format: OutputFormat::Tokens
            }
        ));
    }
}
