//! STR-style competitive positioning indices.
//!
//! * MPI (occupancy index) = property occupancy / market occupancy
//! * ARI (rate index) = property ADR / market ADR
//! * RGI (RevPAR index) = property RevPAR / market RevPAR
//!
//! Every index is reported to four decimals and is `0` when its benchmark
//! denominator is not positive. When a competitive set is supplied the same
//! three indices are computed against it as well.

use crate::core::revpar::compute_revpar_from_adr;
use crate::core::rounding::round_to;
use crate::domain::model::{
    Benchmark, PenetrationAssessment, RevparIndexInput, RevparIndexReport, RoundingPolicy,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;

pub const DAYS_PER_YEAR: u64 = 365;

pub struct IndexCalculator<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> IndexCalculator<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn compute(&self, input: &RevparIndexInput) -> Result<RevparIndexReport> {
        compute_revpar_index(input, &self.config)
    }
}

struct Indices {
    mpi: f64,
    ari: f64,
    rgi: f64,
}

fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        round_to(numerator / denominator, RoundingPolicy::RATIO)
    } else {
        0.0
    }
}

fn indices_against(
    occupancy: f64,
    adr: f64,
    property_revpar: f64,
    benchmark: &Benchmark,
    benchmark_revpar: f64,
) -> Indices {
    Indices {
        mpi: ratio_or_zero(occupancy, benchmark.occupancy),
        ari: ratio_or_zero(adr, benchmark.adr),
        rgi: ratio_or_zero(property_revpar, benchmark_revpar),
    }
}

pub fn assess_penetration(rgi: f64, config: &impl ConfigProvider) -> PenetrationAssessment {
    if rgi > config.outperform_threshold() {
        PenetrationAssessment::Outperforming
    } else if rgi < config.underperform_threshold() {
        PenetrationAssessment::Underperforming
    } else {
        PenetrationAssessment::AtMarket
    }
}

/// Computes property, market and optional comp-set RevPAR and the indices
/// between them over one year of room nights.
///
/// # Errors
///
/// `InvalidArgument` when any occupancy is outside [0, 1].
pub fn compute_revpar_index(
    input: &RevparIndexInput,
    config: &impl ConfigProvider,
) -> Result<RevparIndexReport> {
    let policy = config.rounding_policy();
    let round = |v: f64| round_to(v, policy);

    let property_revpar = round(compute_revpar_from_adr(input.adr, input.occupancy)?);
    let market_revpar = round(compute_revpar_from_adr(
        input.market_adr,
        input.market_occupancy,
    )?);

    let available_room_nights = u64::from(input.room_count) * DAYS_PER_YEAR;
    let sold_room_nights = (available_room_nights as f64 * input.occupancy).round() as u64;
    let room_revenue = round(sold_room_nights as f64 * input.adr);

    let market = Benchmark {
        adr: input.market_adr,
        occupancy: input.market_occupancy,
    };
    let Indices { mpi, ari, rgi } = indices_against(
        input.occupancy,
        input.adr,
        property_revpar,
        &market,
        market_revpar,
    );

    let (comp_set_revpar, comp) = match &input.comp_set {
        Some(comp_set) => {
            let comp_revpar = round(compute_revpar_from_adr(comp_set.adr, comp_set.occupancy)?);
            let indices = indices_against(
                input.occupancy,
                input.adr,
                property_revpar,
                comp_set,
                comp_revpar,
            );
            (Some(comp_revpar), Some(indices))
        }
        None => (None, None),
    };

    let penetration_assessment = assess_penetration(rgi, config);

    tracing::debug!(
        property = input.property_name.as_deref().unwrap_or("<unnamed>"),
        property_revpar,
        market_revpar,
        mpi,
        ari,
        rgi,
        assessment = %penetration_assessment,
        "RevPAR index computed"
    );

    Ok(RevparIndexReport {
        property_revpar,
        market_revpar,
        comp_set_revpar,
        mpi,
        ari,
        rgi,
        comp_mpi: comp.as_ref().map(|c| c.mpi),
        comp_ari: comp.as_ref().map(|c| c.ari),
        comp_rgi: comp.as_ref().map(|c| c.rgi),
        penetration_assessment,
        available_room_nights,
        sold_room_nights,
        room_revenue,
    })
}
