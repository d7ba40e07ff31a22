use anyhow::Result;
use std::path::Path;

use crate::assets::get_demo_cc_content;
use crate::stub::{check_stub, stub_path, summarize_stub, write_stub, StubStatus};
use crate::StubCommands;

pub fn handle_stub_command(command: StubCommands, root: &Path) -> Result<()> {
    match command {
        StubCommands::Generate => {
            let path = write_stub(root)?;
            println!("✅ Generated stub file at: {}", path.display());
        }
        StubCommands::Check => {
            let path = stub_path(root);
            println!("🔍 Checking stub file at: {}", path.display());

            let status = check_stub(root)?;
            tracing::info!(%status, "stub check finished");

            match status {
                StubStatus::UpToDate => println!("✅ Stub file is up to date"),
                StubStatus::Missing => {
                    println!("   Run 'gendemo generate' to create it");
                    anyhow::bail!("Stub file not found at: {}", path.display());
                }
                StubStatus::Stale { missing_includes } => {
                    for header in &missing_includes {
                        println!("   missing: #include \"{header}\"");
                    }
                    println!("   Run 'gendemo generate' to regenerate it");
                    anyhow::bail!("Stub file is stale: {}", path.display());
                }
            }
        }
        StubCommands::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&summarize_stub())?);
            } else {
                print!("{}", get_demo_cc_content());
            }
        }
    }

    Ok(())
}
