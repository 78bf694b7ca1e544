use crate::config::Config;
use crate::models::CliApp;

#[derive(Debug, Clone)]
pub enum MenuAction {
    DiscoverLeads,
    GenerateSyntheticLeads,
    Exit,
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuAction::DiscoverLeads => {
                write!(f, "🔍 Discover leads: Google Maps search + website scrape")
            }
            MenuAction::GenerateSyntheticLeads => {
                write!(f, "🧪 Generate synthetic leads (scored & ranked)")
            }
            MenuAction::Exit => write!(f, "🚪 Exit"),
        }
    }
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
