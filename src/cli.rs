use clap::{Parser, Subcommand};

/// PYRE configurator - build and price your grill from the terminal
#[derive(Parser)]
#[command(name = "pyretui")]
#[command(about = "Terminal configurator for the PYRE ceramic grill")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Price a build without entering the TUI
    ///
    /// Selections come entirely from flags; nothing is read from or written
    /// to disk. Unknown ids are rejected with a nonzero exit instead of
    /// being silently dropped, since a typo in a flag is a user error rather
    /// than stale session data.
    Quote {
        /// Exterior finish id (e.g. obsidian, ember)
        #[arg(long)]
        color: Option<String>,

        /// Base id (e.g. no-base, standard-base, premium-base)
        #[arg(long)]
        base: Option<String>,

        /// Cooking module id (repeatable)
        #[arg(long = "module")]
        modules: Vec<String>,

        /// Accessory id (repeatable)
        #[arg(long = "accessory")]
        accessories: Vec<String>,

        /// Tool id (repeatable)
        #[arg(long = "tool")]
        tools: Vec<String>,

        /// Emit the configuration, itemized quote, and scene plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every selectable option with id, name, and price
    Catalog {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_means_tui() {
        let cli = Cli::parse_from(["pyretui"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_quote_flags() {
        let cli = Cli::parse_from([
            "pyretui", "quote", "--color", "ember", "--base", "standard-base", "--module",
            "pizza-oven", "--module", "rotisserie", "--json",
        ]);
        match cli.command {
            Some(Commands::Quote {
                color,
                base,
                modules,
                json,
                ..
            }) => {
                assert_eq!(color.as_deref(), Some("ember"));
                assert_eq!(base.as_deref(), Some("standard-base"));
                assert_eq!(modules, vec!["pizza-oven", "rotisserie"]);
                assert!(json);
            }
            _ => panic!("expected quote subcommand"),
        }
    }

    #[test]
    fn test_catalog_subcommand() {
        let cli = Cli::parse_from(["pyretui", "catalog"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Catalog { json: false })
        ));
    }
}
