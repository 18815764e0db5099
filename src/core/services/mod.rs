pub mod aggregation_service;

pub use aggregation_service::AggregationService;

#[cfg(test)]
mod tests;
