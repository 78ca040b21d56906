use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use std::{
    collections::HashMap,
    fs::File,
    path::PathBuf,
};

use d2_map::{extract_maps, to_json, StringTables};
use d2_tbl::StringTableReader;
use d2_txt::Record;
use tracing::info;

#[derive(Args)]
pub struct ExtractArgs {
    /// The directory holding the game data files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    directory: PathBuf,

    /// The JSON file to write
    #[arg(short, long, value_name = "FILE", default_value = "./maps.json")]
    output: PathBuf,
}

impl ExtractArgs {
    pub fn handle(&self) -> Result<()> {
        let base = self.read_table("string.tbl")?;
        let patch = self.read_table("patchstring.tbl")?;
        let expansion = self.read_table("expansionstring.tbl")?;
        let tables = StringTables::new(base, patch, expansion);

        let monsters = self.read_records("MonStats.txt")?;
        let monster_levels = self.read_records("MonLvl.txt")?;
        let misc = self.read_records("Misc.txt")?;
        let levels = self.read_records("Levels.txt")?;

        let maps = extract_maps(&tables, &monsters, &monster_levels, &misc, &levels);

        let encoded = to_json(&maps)?;
        std::fs::write(&self.output, encoded)
            .into_diagnostic()
            .context(format!("writing {}", self.output.display()))?;
        info!("wrote {} maps to {}", maps.len(), self.output.display());

        Ok(())
    }

    fn read_table(&self, name: &str) -> Result<HashMap<String, String>> {
        let path = self.directory.join(name);
        let mut file = File::open(&path)
            .into_diagnostic()
            .context(format!("path: {}", path.display()))?;
        let table = StringTableReader::new(&mut file)
            .context(format!("path: {}", path.display()))?;
        Ok(table.into_entries())
    }

    fn read_records(&self, name: &str) -> Result<Vec<Record>> {
        let path = self.directory.join(name);
        d2_txt::read_records_path(&path).context(format!("path: {}", path.display()))
    }
}
