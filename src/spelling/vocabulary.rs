//! The correction vocabulary: canonical domain terms and their misspellings.

use serde::{Deserialize, Serialize};

/// A canonical vocabulary word with its known misspelling variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainTerm {
    /// The correctly spelled term.
    pub canonical: String,
    /// Known misspellings, in no particular order.
    pub variants: Vec<String>,
}

impl DomainTerm {
    /// Create a new domain term.
    pub fn new<S: Into<String>>(canonical: S, variants: &[&str]) -> Self {
        DomainTerm {
            canonical: canonical.into(),
            variants: variants.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Variant spellings followed by the canonical form itself.
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        self.variants
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.canonical.as_str()))
    }
}

/// An ordered set of domain terms.
///
/// Iteration order is significant: whenever two terms match a token equally
/// well, the one that comes first wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    terms: Vec<DomainTerm>,
}

impl Vocabulary {
    /// Create a vocabulary from terms in tie-break order.
    pub fn new(terms: Vec<DomainTerm>) -> Self {
        Vocabulary { terms }
    }

    /// The vocabulary of the organization's course and internship domain.
    pub fn builtin() -> Self {
        let terms = vec![
            DomainTerm::new(
                "internship",
                &["intership", "internsip", "intrenship", "interenship"],
            ),
            DomainTerm::new("course", &["corse", "cource", "coarse", "coruse"]),
            DomainTerm::new("python", &["pythn", "pyton", "pythoon"]),
            DomainTerm::new("java", &["jva", "jaava", "jave"]),
            DomainTerm::new("machine", &["machin", "mashine", "machiene"]),
            DomainTerm::new("learning", &["lernning", "learnig", "lerning"]),
            DomainTerm::new("artificial", &["artifical", "artficial", "artifitial"]),
            DomainTerm::new(
                "intelligence",
                &["inteligence", "intelligance", "intelgence"],
            ),
            DomainTerm::new("brainovision", &["brainovison", "brainovisin"]),
            DomainTerm::new("program", &["programme", "progrm", "progam"]),
            DomainTerm::new("training", &["trainig", "trainning", "traning"]),
            DomainTerm::new("stipend", &["stiped", "stipnd", "stepend"]),
            DomainTerm::new("workshop", &["workshp", "wrokshop"]),
            DomainTerm::new("hackathon", &["hakathon", "hackaton"]),
            DomainTerm::new("admission", &["admision", "admisson"]),
            DomainTerm::new("contact", &["contct", "contat", "conatct"]),
            // Keeps "data" from being pulled towards "java" by edit distance.
            DomainTerm::new("data", &[]),
            DomainTerm::new("science", &["sience", "scence", "sceince"]),
        ];

        Vocabulary { terms }
    }

    /// Iterate over the terms in tie-break order.
    pub fn iter(&self) -> std::slice::Iter<'_, DomainTerm> {
        self.terms.iter()
    }

    /// Canonical forms in tie-break order.
    pub fn canonical_terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.canonical.as_str())
    }

    /// Look up a term by its canonical form.
    pub fn get(&self, canonical: &str) -> Option<&DomainTerm> {
        self.terms.iter().find(|t| t.canonical == canonical)
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a DomainTerm;
    type IntoIter = std::slice::Iter<'a, DomainTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
