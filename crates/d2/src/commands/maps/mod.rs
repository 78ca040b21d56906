pub mod extract;

#[derive(clap::Subcommand)]
pub enum MapsCommands {
    /// Extract maps and their monsters into a JSON file
    Extract(extract::ExtractArgs),
}

impl MapsCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            MapsCommands::Extract(extract) => extract.handle(),
        }
    }
}
