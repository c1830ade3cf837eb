use crate::config::toml_config::RevparConfig;
use crate::domain::model::{Benchmark, RevparIndexInput};
use crate::utils::error::{RevparError, Result};
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "revpar")]
#[command(about = "Hotel RevPAR and competitive index calculator")]
pub struct CliConfig {
    /// Path to a TOML settings file (rounding and assessment thresholds)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// RevPAR from total room revenue and available rooms
    FromRevenue {
        #[arg(long, allow_negative_numbers = true)]
        revenue: f64,

        #[arg(long, allow_negative_numbers = true)]
        rooms: i64,
    },

    /// RevPAR from ADR and occupancy rate
    FromAdr {
        #[arg(long, allow_negative_numbers = true)]
        adr: f64,

        #[arg(long, allow_negative_numbers = true)]
        occupancy: f64,
    },

    /// MPI / ARI / RGI against the market and an optional comp set
    Index(IndexArgs),
}

#[derive(Debug, Clone, Args)]
pub struct IndexArgs {
    #[arg(long)]
    pub property_name: Option<String>,

    #[arg(long)]
    pub room_count: u32,

    #[arg(long, allow_negative_numbers = true)]
    pub adr: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub occupancy: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub market_adr: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub market_occupancy: f64,

    #[arg(long, requires = "comp_occupancy", allow_negative_numbers = true)]
    pub comp_adr: Option<f64>,

    #[arg(long, requires = "comp_adr", allow_negative_numbers = true)]
    pub comp_occupancy: Option<f64>,
}

impl IndexArgs {
    pub fn to_input(&self) -> RevparIndexInput {
        let comp_set = match (self.comp_adr, self.comp_occupancy) {
            (Some(adr), Some(occupancy)) => Some(Benchmark { adr, occupancy }),
            _ => None,
        };

        RevparIndexInput {
            property_name: self.property_name.clone(),
            room_count: self.room_count,
            adr: self.adr,
            occupancy: self.occupancy,
            market_adr: self.market_adr,
            market_occupancy: self.market_occupancy,
            comp_set,
        }
    }
}

impl CliConfig {
    /// 載入設定檔；未指定時使用預設值
    pub fn load_settings(&self) -> Result<RevparConfig> {
        let settings = match &self.config {
            Some(path) => RevparConfig::from_file(path)?,
            None => RevparConfig::default(),
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            if path.trim().is_empty() {
                return Err(RevparError::ConfigValidationError {
                    field: "config".to_string(),
                    message: "Path cannot be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
