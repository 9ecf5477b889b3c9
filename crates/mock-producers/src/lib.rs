//! Seedable synthetic producer records for demonstration purposes.
//!
//! The crate produces believable Brazilian farm producers: a valid CPF or
//! CNPJ, a person name, a company used as the farm name, a city, a state
//! code, land-use figures that respect the area invariant, and a handful of
//! crops. It does not depend on the registry service's domain types; callers
//! convert [`ProducerSeed`] values at the point of use.
//!
//! # Example
//!
//! ```
//! use mock_producers::ProducerGenerator;
//! use producer_rules::{check_land_use, is_valid_document};
//!
//! let mut generator = ProducerGenerator::from_seed(42);
//! let producers = generator.generate(5);
//!
//! assert_eq!(producers.len(), 5);
//! for producer in &producers {
//!     assert!(is_valid_document(&producer.document_number));
//!     assert!(check_land_use(
//!         producer.total_area,
//!         producer.farmable_area,
//!         producer.vegetation_area,
//!     )
//!     .is_ok());
//! }
//!
//! // The same seed always yields the same producers.
//! assert_eq!(producers, ProducerGenerator::from_seed(42).generate(5));
//! ```

mod generator;
mod seed;
mod vocabulary;

pub use generator::{MAX_SPLIT_ATTEMPTS, ProducerGenerator};
pub use seed::ProducerSeed;
pub use vocabulary::{CROP_VOCABULARY, STATE_CODES};
