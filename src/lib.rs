// Re-export main structures
pub use crate::errors::{LipidQueryError, Result};
pub use crate::models::adduct_detection::{detect_adduct, find_adduct_match, AdductMatch};
pub use crate::models::adduct_table::{AdductStoichiometry, AdductTable};
pub use crate::models::aggregators::ScoreAccumulator;
pub use crate::models::annotation::Annotation;
pub use crate::models::ionization_mode::IonizationMode;
pub use crate::models::lipid::Lipid;
pub use crate::models::peak::Peak;
pub use crate::models::peak_group::PeakGroup;

// Re-export traits
pub use crate::traits::aggregator::Aggregator;
pub use crate::traits::tolerance::PpmTolerance;

// Declare modules
pub mod errors;
pub mod io;
pub mod models;
pub mod traits;
pub mod utils;
