use crate::generator::{GeneratorParams, LeadGenerator, SyntheticLead};
use crate::models::{CliApp, Result};
use crate::scoring::{QualityPreference, ScoringPreferences};
use dialoguer::{theme::ColorfulTheme, Input, Select};

impl CliApp {
    pub async fn run_generate(&self) -> Result<()> {
        println!("\n🧪 Synthetic Lead Generation");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let industries = LeadGenerator::industries();
        let industry_idx = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Target industry")
            .items(&industries)
            .interact()?;

        let quality_options = vec![QualityPreference::HighQuality, QualityPreference::Standard];
        let quality_idx = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Quality preference")
            .default(1)
            .items(&quality_options)
            .interact()?;

        let location: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Target location (empty for anywhere)")
            .allow_empty(true)
            .interact_text()?;

        let num_leads: usize = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Number of leads")
            .default(20)
            .interact_text()?;

        let params = GeneratorParams {
            preferences: ScoringPreferences {
                industry: industries[industry_idx].to_string(),
                quality: quality_options[quality_idx],
                location: if location.is_empty() {
                    None
                } else {
                    Some(location)
                },
            },
            num_leads,
        };

        let leads = LeadGenerator::generate(&params);
        println!("\n🎉 Generated {} scored leads", leads.len());

        println!("\n🏆 Top leads:");
        for (i, lead) in leads.iter().take(10).enumerate() {
            println!(
                "  {}. [{:.1}] {} - {} | {} ({}) <{}>",
                i + 1,
                lead.lead_score,
                lead.company_name,
                lead.location,
                lead.contact_name,
                lead.job_title,
                lead.email
            );
        }
        if leads.len() > 10 {
            println!("  ... and {} more", leads.len() - 10);
        }

        self.export_synthetic_leads(&leads).await?;

        Ok(())
    }

    async fn export_synthetic_leads(&self, leads: &[SyntheticLead]) -> Result<()> {
        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
        let filename = format!(
            "{}/synthetic_leads_{}.json",
            self.config.output.directory, timestamp
        );

        let json = if self.config.output.pretty_json {
            serde_json::to_string_pretty(leads)?
        } else {
            serde_json::to_string(leads)?
        };
        tokio::fs::write(&filename, json).await?;

        println!("✅ Exported: {}", filename);
        Ok(())
    }
}
