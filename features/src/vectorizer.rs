use crate::normalizer::normalize;
use std::collections::{HashMap, HashSet};

/// Two-phase TF-IDF vectorizer over normalized email tokens.
///
/// [`fit`](Self::fit) learns a bounded vocabulary and per-index IDF weights
/// from a corpus; [`transform`](Self::transform) projects a single document
/// onto that vocabulary as a dense vector. Fitted state is read-only: a
/// fitted vectorizer can serve any number of concurrent `transform` calls.
/// Transforming before any fit is not an error; it returns a zero-length
/// vector.
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    doc_freq: HashMap<String, u32>,
    max_features: usize,
    total_docs: usize,
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            doc_freq: HashMap::new(),
            max_features,
            total_docs: 0,
        }
    }

    /// Term to dense index mapping, fixed after `fit`.
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// IDF weights aligned with vocabulary indices.
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn num_features(&self) -> usize {
        self.vocabulary.len()
    }

    /// Learn the vocabulary and IDF weights from a corpus.
    ///
    /// Each document contributes at most one document-frequency count per
    /// distinct term. Terms are ranked by document frequency descending with
    /// lexical order breaking ties, and the top `max_features` become the
    /// vocabulary. `idf[i] = ln(total_docs / (doc_freq[term_i] + 1))`; the
    /// smoothing can make weights zero or negative for very common terms,
    /// which is accepted behavior. Calling `fit` again replaces all fitted
    /// state.
    pub fn fit<S: AsRef<str>>(&mut self, corpus: &[S]) {
        self.vocabulary.clear();
        self.idf.clear();
        self.doc_freq.clear();
        self.total_docs = corpus.len();

        for doc in corpus {
            let tokens = normalize(doc.as_ref());
            let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in distinct {
                *self.doc_freq.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        // Lexical tie-break keeps vocabulary selection deterministic.
        let mut ranked: Vec<(&String, u32)> =
            self.doc_freq.iter().map(|(term, &df)| (term, df)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let num_features = self.max_features.min(ranked.len());
        let selected: Vec<String> = ranked
            .into_iter()
            .take(num_features)
            .map(|(term, _)| term.clone())
            .collect();
        for (idx, term) in selected.into_iter().enumerate() {
            self.vocabulary.insert(term, idx);
        }

        self.idf = vec![0.0; num_features];
        for (term, &idx) in &self.vocabulary {
            let df = self.doc_freq[term];
            self.idf[idx] = (self.total_docs as f64 / (df + 1) as f64).ln();
        }

        tracing::info!(
            num_docs = self.total_docs,
            vocab_size = num_features,
            "fitted vectorizer"
        );
    }

    /// Project a document onto the fitted vocabulary as a dense vector.
    ///
    /// `features[i] = tf * idf[i]` where `tf` is the term's count divided by
    /// the document's total token count, including tokens outside the
    /// vocabulary. Indices for absent terms are zero; an empty or all-noise
    /// document yields the zero vector.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let tokens = normalize(document);
        let mut features = vec![0.0; self.vocabulary.len()];
        if tokens.is_empty() {
            return features;
        }

        // Sparse counts over vocabulary indices, projected into the dense
        // vector below.
        let mut counts: HashMap<usize, u32> = HashMap::new();
        for token in &tokens {
            if let Some(&idx) = self.vocabulary.get(token.as_str()) {
                *counts.entry(idx).or_insert(0) += 1;
            }
        }

        let total = tokens.len() as f64;
        for (idx, count) in counts {
            let tf = count as f64 / total;
            features[idx] = tf * self.idf[idx];
        }
        features
    }

    /// Fit on the corpus, then transform each document in input order.
    pub fn fit_transform<S: AsRef<str>>(&mut self, corpus: &[S]) -> Vec<Vec<f64>> {
        self.fit(corpus);
        corpus.iter().map(|doc| self.transform(doc.as_ref())).collect()
    }
}
