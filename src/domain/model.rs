use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundingPolicy {
    pub precision: u32,
    pub bankers_rounding: bool,
}

impl RoundingPolicy {
    /// Monetary figures: two decimals.
    pub const CURRENCY: RoundingPolicy = RoundingPolicy {
        precision: 2,
        bankers_rounding: false,
    };

    /// Index values such as MPI: four decimals.
    pub const RATIO: RoundingPolicy = RoundingPolicy {
        precision: 4,
        bankers_rounding: false,
    };
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        Self::CURRENCY
    }
}

/// ADR and occupancy of a market or competitive set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub adr: f64,
    pub occupancy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevparIndexInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    pub room_count: u32,
    pub adr: f64,
    pub occupancy: f64,
    pub market_adr: f64,
    pub market_occupancy: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comp_set: Option<Benchmark>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenetrationAssessment {
    Outperforming,
    AtMarket,
    Underperforming,
}

impl std::fmt::Display for PenetrationAssessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PenetrationAssessment::Outperforming => "outperforming",
            PenetrationAssessment::AtMarket => "at_market",
            PenetrationAssessment::Underperforming => "underperforming",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevparIndexReport {
    pub property_revpar: f64,
    pub market_revpar: f64,
    pub comp_set_revpar: Option<f64>,
    pub mpi: f64,
    pub ari: f64,
    pub rgi: f64,
    pub comp_mpi: Option<f64>,
    pub comp_ari: Option<f64>,
    pub comp_rgi: Option<f64>,
    pub penetration_assessment: PenetrationAssessment,
    pub available_room_nights: u64,
    pub sold_room_nights: u64,
    pub room_revenue: f64,
}
