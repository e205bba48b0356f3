pub mod statistics_summary;
