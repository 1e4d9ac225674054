//! TF-IDF vectorizer for corpus patterns and queries.

use std::collections::BTreeMap;
use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, AnalyzerKind, StandardAnalyzer};
use crate::error::{Result, SitebotError};

/// The frozen, serializable state of a fitted [`TfIdfVectorizer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorSpace {
    /// Analyzer flavour the space was fitted with.
    pub analyzer: AnalyzerKind,
    /// Feature terms in ascending order; the position is the feature index.
    pub terms: Vec<String>,
    /// Inverse document frequency per feature.
    pub idf: Vec<f64>,
    /// Number of documents the space was fitted on.
    pub n_documents: usize,
}

/// TF-IDF vectorizer for text feature extraction.
///
/// Features are raw term counts weighted by smoothed inverse document
/// frequency, `ln((1 + n) / (1 + df)) + 1`, and every vector is scaled to
/// unit length. Terms outside the fitted vocabulary are ignored, so a text
/// sharing nothing with the corpus maps to the zero vector.
pub struct TfIdfVectorizer {
    kind: AnalyzerKind,
    max_features: Option<usize>,
    /// Vocabulary: term -> feature index.
    vocabulary: AHashMap<String, usize>,
    terms: Vec<String>,
    idf: Vec<f64>,
    n_documents: usize,
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("max_features", &self.max_features)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create an unfitted vectorizer.
    ///
    /// `max_features` keeps only the most frequent terms of the corpus.
    pub fn new(kind: AnalyzerKind, max_features: Option<usize>) -> Result<Self> {
        Ok(TfIdfVectorizer {
            kind,
            max_features,
            vocabulary: AHashMap::new(),
            terms: Vec::new(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer: Arc::new(StandardAnalyzer::for_kind(kind)?),
        })
    }

    /// Rebuild a fitted vectorizer from its frozen state.
    pub fn from_space(space: VectorSpace) -> Result<Self> {
        if space.terms.len() != space.idf.len() {
            return Err(SitebotError::corpus(format!(
                "vector space has {} terms but {} idf weights",
                space.terms.len(),
                space.idf.len()
            )));
        }

        let vocabulary = space
            .terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        Ok(TfIdfVectorizer {
            kind: space.analyzer,
            max_features: None,
            vocabulary,
            terms: space.terms,
            idf: space.idf,
            n_documents: space.n_documents,
            analyzer: Arc::new(StandardAnalyzer::for_kind(space.analyzer)?),
        })
    }

    /// Snapshot the fitted state.
    pub fn to_space(&self) -> VectorSpace {
        VectorSpace {
            analyzer: self.kind,
            terms: self.terms.clone(),
            idf: self.idf.clone(),
            n_documents: self.n_documents,
        }
    }

    /// Fit the vectorizer on training documents.
    ///
    /// Fails when no document contains a single usable term.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        let mut term_frequency: BTreeMap<String, usize> = BTreeMap::new();
        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();

        for doc in documents {
            let tokens = self.analyzer.terms(doc)?;
            let mut seen: Vec<&String> = Vec::with_capacity(tokens.len());
            for token in &tokens {
                *term_frequency.entry(token.clone()).or_insert(0) += 1;
                if !seen.contains(&token) {
                    seen.push(token);
                    *document_frequency.entry(token.clone()).or_insert(0) += 1;
                }
            }
        }

        if term_frequency.is_empty() {
            return Err(SitebotError::corpus(
                "empty vocabulary; the documents only contain stop words",
            ));
        }

        // BTreeMap iteration is alphabetical, the stable sort keeps ties that way.
        let mut ranked: Vec<(String, usize)> = term_frequency.into_iter().collect();
        if let Some(limit) = self.max_features {
            if ranked.len() > limit {
                ranked.sort_by(|a, b| b.1.cmp(&a.1));
                ranked.truncate(limit);
                ranked.sort_by(|a, b| a.0.cmp(&b.0));
            }
        }

        let n_documents = documents.len();
        let terms: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        let idf = terms
            .iter()
            .map(|term| {
                let df = document_frequency.get(term).copied().unwrap_or(0);
                ((1.0 + n_documents as f64) / (1.0 + df as f64)).ln() + 1.0
            })
            .collect();

        self.vocabulary = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();
        self.terms = terms;
        self.idf = idf;
        self.n_documents = n_documents;

        Ok(())
    }

    /// Fit on the documents and return their vectors.
    pub fn fit_transform(&mut self, documents: &[String]) -> Result<Vec<Vec<f64>>> {
        self.fit(documents)?;
        documents.iter().map(|doc| self.transform(doc)).collect()
    }

    /// Transform a document into a unit-length TF-IDF feature vector.
    pub fn transform(&self, document: &str) -> Result<Vec<f64>> {
        let mut features = vec![0.0; self.vocabulary.len()];

        for token in self.analyzer.terms(document)? {
            if let Some(&idx) = self.vocabulary.get(&token) {
                features[idx] += 1.0;
            }
        }

        for (idx, value) in features.iter_mut().enumerate() {
            *value *= self.idf[idx];
        }

        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }

        Ok(features)
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Feature terms in index order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// The analyzer flavour.
    pub fn analyzer_kind(&self) -> AnalyzerKind {
        self.kind
    }
}

/// Cosine similarity of two vectors of equal length, `0.0` when either is zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a.sqrt() * norm_b.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_vocabulary_is_sorted_and_stop_words_dropped() {
        let mut vectorizer = TfIdfVectorizer::new(AnalyzerKind::EnglishStopWords, None).unwrap();
        vectorizer
            .fit(&docs(&["what is python", "learn java", "python course"]))
            .unwrap();

        assert_eq!(vectorizer.terms(), &["course", "java", "learn", "python"]);
    }

    #[test]
    fn test_smoothed_idf() {
        let mut vectorizer = TfIdfVectorizer::new(AnalyzerKind::KeepStopWords, None).unwrap();
        vectorizer
            .fit(&docs(&["python course", "java course"]))
            .unwrap();

        let space = vectorizer.to_space();
        // "course" appears in both documents, "java" in one.
        let course = space.terms.iter().position(|t| t == "course").unwrap();
        let java = space.terms.iter().position(|t| t == "java").unwrap();
        assert!((space.idf[course] - 1.0).abs() < 1e-12);
        assert!((space.idf[java] - ((3.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_transform_is_unit_length() {
        let mut vectorizer = TfIdfVectorizer::new(AnalyzerKind::EnglishStopWords, None).unwrap();
        vectorizer
            .fit(&docs(&["paid internship", "internship stipend", "java course"]))
            .unwrap();

        let vector = vectorizer.transform("paid internship internship").unwrap();
        let norm: f64 = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_terms_give_zero_vector() {
        let mut vectorizer = TfIdfVectorizer::new(AnalyzerKind::EnglishStopWords, None).unwrap();
        vectorizer.fit(&docs(&["python course"])).unwrap();

        let vector = vectorizer.transform("zzqx flumox").unwrap();
        assert!(vector.iter().all(|v| *v == 0.0));
        assert_eq!(cosine_similarity(&vector, &vector), 0.0);
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let mut vectorizer = TfIdfVectorizer::new(AnalyzerKind::KeepStopWords, Some(2)).unwrap();
        vectorizer
            .fit(&docs(&["java java python", "java python ruby", "zig"]))
            .unwrap();

        assert_eq!(vectorizer.terms(), &["java", "python"]);
    }

    #[test]
    fn test_only_stop_words_is_an_error() {
        let mut vectorizer = TfIdfVectorizer::new(AnalyzerKind::EnglishStopWords, None).unwrap();
        assert!(vectorizer.fit(&docs(&["what is this", "who are you"])).is_err());
    }

    #[test]
    fn test_space_round_trip() {
        let mut vectorizer = TfIdfVectorizer::new(AnalyzerKind::EnglishStopWords, None).unwrap();
        vectorizer
            .fit(&docs(&["data science", "big data", "machine learning"]))
            .unwrap();

        let restored = TfIdfVectorizer::from_space(vectorizer.to_space()).unwrap();
        assert_eq!(
            restored.transform("big data course").unwrap(),
            vectorizer.transform("big data course").unwrap()
        );
    }

    #[test]
    fn test_inconsistent_space_rejected() {
        let space = VectorSpace {
            analyzer: AnalyzerKind::KeepStopWords,
            terms: vec!["java".to_string()],
            idf: vec![],
            n_documents: 1,
        };
        assert!(TfIdfVectorizer::from_space(space).is_err());
    }

    #[test]
    fn test_cosine_similarity() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-12);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }
}
