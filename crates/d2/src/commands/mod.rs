pub mod maps;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle map area data
    Maps {
        #[command(subcommand)]
        command: maps::MapsCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Maps { command } => command.handle(),
        }
    }
}
