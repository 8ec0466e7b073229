pub mod adduct_detection;
pub mod adduct_table;
pub mod aggregators;
pub mod annotation;
pub mod ionization_mode;
pub mod lipid;
pub mod peak;
pub mod peak_group;
