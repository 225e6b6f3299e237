use std::fmt;

use crate::{
    tally::{AggregateStats, EnrichStats},
    weights::WeightStats,
};

/// Data-completeness report for one tabulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub weights: WeightStats,
    pub enrich: EnrichStats,
    pub aggregate: AggregateStats,
    pub districts: usize,
    /// Districts whose representative count could not be resolved.
    pub unresolved_districts: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "geographies with weights:      {}", self.weights.geographies)?;
        writeln!(f, "  renormalized:                {}", self.weights.renormalized)?;
        writeln!(f, "  without usable weights:      {}", self.weights.empty)?;
        writeln!(f, "respondent records:            {}", self.enrich.records)?;
        writeln!(f, "  undeclared affiliation:      {}", self.enrich.unknown_affiliation)?;
        writeln!(f, "  unmapped respondents:        {}", self.aggregate.unmapped)?;
        writeln!(f, "districts:                     {}", self.districts)?;
        writeln!(f, "  unresolved representatives:  {}", self.unresolved_districts)?;
        writeln!(f, "votes outside catalogue:       {:.3}", self.aggregate.unmatched_mass)?;
        write!(f, "total vote mass:               {:.3}", self.aggregate.total_mass)
    }
}
