/// Join stage - builds the enriched product list from fixtures
pub mod enrich;

/// Filter state and the composite query over the enriched list
pub mod filter;
