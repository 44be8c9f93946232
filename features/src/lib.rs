//! Email feature extraction for phishing classification.
//!
//! Two components, consumed in dependency order: [`normalizer::normalize`]
//! turns raw email text into an ordered sequence of stemmed tokens, and
//! [`vectorizer::TfidfVectorizer`] learns a bounded vocabulary with IDF
//! weights from a corpus and projects any document onto that vocabulary as a
//! dense TF-IDF vector.
//!
//! The whole surface is total: no operation here returns an error. Empty or
//! noise-only input normalizes to an empty token sequence, an empty corpus
//! fits to an empty vocabulary, and transforming before fitting yields a
//! zero-length vector. Downstream consumers must handle the all-zero and
//! zero-length vectors explicitly.

pub mod normalizer;
pub mod vectorizer;

pub use normalizer::normalize;
pub use vectorizer::TfidfVectorizer;
