//! Text preprocessing: cleaning, normalization, skill mapping and the pipeline

pub mod normalizer;
pub mod pipeline;
pub mod records;
pub mod skill_mapper;
pub mod text_cleaner;

pub use normalizer::TextNormalizer;
pub use pipeline::PreprocessingPipeline;
pub use records::{CandidateInput, OfferInput, ProcessedCandidate, ProcessedOffer, SkillRecord};
pub use skill_mapper::SkillMapper;
pub use text_cleaner::{MarkupStrategy, TextCleaner};
