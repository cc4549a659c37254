/// Index of a word in the solver's sorted vocabulary.
pub type WordId = usize;

/// Per-slot candidate sets, indexed by slot id. Candidate ids are kept in
/// ascending order so iteration is deterministic.
///
/// The store is the only mutable state shared between propagation and
/// search; [`snapshot`](DomainStore::snapshot) and
/// [`restore`](DomainStore::restore) are what make backtracking safe.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DomainStore {
    domains: Vec<Vec<WordId>>,
}

/// Full copy of a [`DomainStore`], taken before a tentative assignment.
#[derive(Debug, Clone)]
pub struct Snapshot {
    domains: Vec<Vec<WordId>>,
}

impl DomainStore {
    /// A store where every slot starts with the full vocabulary.
    pub fn new(slot_count: usize, word_count: usize) -> DomainStore {
        let full: Vec<WordId> = (0..word_count).collect();
        DomainStore {
            domains: vec![full; slot_count],
        }
    }

    pub fn candidates(&self, slot: usize) -> &[WordId] {
        &self.domains[slot]
    }

    pub fn len(&self, slot: usize) -> usize {
        self.domains[slot].len()
    }

    pub fn is_empty(&self, slot: usize) -> bool {
        self.domains[slot].is_empty()
    }

    /// Keep only candidates satisfying `keep`. Returns whether the domain
    /// changed.
    pub fn retain(&mut self, slot: usize, keep: impl FnMut(&WordId) -> bool) -> bool {
        let before = self.domains[slot].len();
        self.domains[slot].retain(keep);
        self.domains[slot].len() != before
    }

    /// Narrow a slot's domain to a single word, as happens when the search
    /// tentatively assigns it.
    pub fn narrow_to(&mut self, slot: usize, word: WordId) {
        self.domains[slot].clear();
        self.domains[slot].push(word);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            domains: self.domains.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.domains = snapshot.domains;
    }
}
