use dialoguer::{theme::ColorfulTheme, Select};

use crate::{
    cli::cli::MenuAction,
    models::{CliApp, Result},
};
use tracing::error;

impl CliApp {
    pub async fn run(&self) -> Result<()> {
        println!("\n🤖 Welcome to LeadGenius!");
        println!("═══════════════════════════════════════");

        loop {
            let actions = vec![
                MenuAction::DiscoverLeads,
                MenuAction::GenerateSyntheticLeads,
                MenuAction::Exit,
            ];

            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("\nSelect an action")
                .default(0)
                .items(&actions)
                .interact()?;

            match &actions[selection] {
                MenuAction::DiscoverLeads => {
                    if let Err(e) = self.run_discover().await {
                        error!("Lead discovery failed: {}", e);
                    }
                }
                MenuAction::GenerateSyntheticLeads => {
                    if let Err(e) = self.run_generate().await {
                        error!("Lead generation failed: {}", e);
                    }
                }
                MenuAction::Exit => {
                    println!("\n👋 Thanks for using LeadGenius!");
                    break;
                }
            }
        }

        Ok(())
    }
}
