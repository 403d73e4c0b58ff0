use std::convert::Infallible;
use std::ops::Range;

use derive_more::{Display, Error, From};
use gf2perm::Permutation;
use rayon::prelude::*;

use crate::hierarchy::is_third_level;
use crate::ladder::{Ladder, LadderError};
use crate::subgroup::{find_clearing_candidate, six_qubit_candidates, CandidateSubgroup};

#[derive(Clone, Debug, Display, Error, From, PartialEq, Eq)]
pub enum SearchError {
    #[display("ladder acts on {ladder_qubits} qubits, permutations on {permutation_qubits}")]
    QubitCountMismatch {
        ladder_qubits: usize,
        permutation_qubits: usize,
    },
    #[display("generator {generator} of candidate {candidate} has support outside of 1..{size}")]
    SupportOutOfRange {
        candidate: usize,
        generator: usize,
        size: usize,
    },
    #[display("candidate {candidate} is not a maximal abelian subgroup")]
    NotMaximalAbelian { candidate: usize },
    #[from]
    Ladder(LadderError),
}

/// How the search disposed of one selection mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaskOutcome {
    /// Some conjugate of a single qubit X is not Clifford.
    OutsideThirdLevel,
    /// Third level, and no qubit is both a control and a target of the selected gates.
    MismatchFree,
    /// Third level with a control/target collision, cleared by the candidate at this index.
    Cleared { candidate: usize },
    /// Third level with a control/target collision and no candidate works.
    Unresolved,
}

/// Tallies of mask outcomes over a range of masks.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchReport {
    pub examined: u64,
    pub outside_third_level: u64,
    pub mismatch_free: u64,
    /// Number of masks cleared by each candidate, indexed like the candidate list.
    pub cleared: Vec<u64>,
    /// Unresolved masks in increasing order.
    pub unresolved: Vec<u32>,
}

impl SearchReport {
    pub fn new(candidate_count: usize) -> Self {
        SearchReport {
            cleared: vec![0; candidate_count],
            ..Self::default()
        }
    }

    /// # Panics
    ///
    /// Panics if a cleared candidate index is outside of the report's candidate list.
    pub fn record(&mut self, mask: u32, outcome: MaskOutcome) {
        self.examined += 1;
        match outcome {
            MaskOutcome::OutsideThirdLevel => self.outside_third_level += 1,
            MaskOutcome::MismatchFree => self.mismatch_free += 1,
            MaskOutcome::Cleared { candidate } => self.cleared[candidate] += 1,
            MaskOutcome::Unresolved => self.unresolved.push(mask),
        }
    }

    /// Combines reports of disjoint mask ranges.
    pub fn merge(mut self, other: SearchReport) -> Self {
        self.examined += other.examined;
        self.outside_third_level += other.outside_third_level;
        self.mismatch_free += other.mismatch_free;
        if self.cleared.len() < other.cleared.len() {
            self.cleared.resize(other.cleared.len(), 0);
        }
        for (total, count) in self.cleared.iter_mut().zip(other.cleared) {
            *total += count;
        }
        self.unresolved.extend(other.unresolved);
        self.unresolved.sort_unstable();
        self
    }

    #[must_use]
    pub fn third_level(&self) -> u64 {
        self.examined - self.outside_third_level
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Exhaustive search over the selection masks of a ladder acting on `log2(SIZE)` qubits.
#[must_use]
#[derive(Clone, Debug)]
pub struct StaircaseSearch<const SIZE: usize> {
    ladder: Ladder,
    candidates: Vec<CandidateSubgroup>,
}

impl StaircaseSearch<64> {
    /// The twenty gate six qubit staircase with its five candidate subgroups.
    pub fn six_qubit() -> Self {
        StaircaseSearch {
            ladder: Ladder::six_qubit(),
            candidates: six_qubit_candidates(),
        }
    }
}

impl<const SIZE: usize> StaircaseSearch<SIZE> {
    /// # Errors
    ///
    /// Returns [`SearchError`] if the ladder does not act on `log2(SIZE)` qubits, or if some
    /// candidate has a generator with empty or out of range support or is not maximal abelian.
    pub fn new(ladder: Ladder, candidates: Vec<CandidateSubgroup>) -> Result<Self, SearchError> {
        let qubit_count = Permutation::<SIZE>::QUBIT_COUNT;
        if ladder.qubit_count() != qubit_count {
            return Err(SearchError::QubitCountMismatch {
                ladder_qubits: ladder.qubit_count(),
                permutation_qubits: qubit_count,
            });
        }
        for (candidate_index, candidate) in candidates.iter().enumerate() {
            for (generator_index, generator) in candidate.generators().iter().enumerate() {
                if generator.support == 0 || generator.support >= SIZE {
                    return Err(SearchError::SupportOutOfRange {
                        candidate: candidate_index,
                        generator: generator_index,
                        size: SIZE,
                    });
                }
            }
            if !candidate.is_maximal_abelian(qubit_count) {
                return Err(SearchError::NotMaximalAbelian {
                    candidate: candidate_index,
                });
            }
        }
        Ok(StaircaseSearch { ladder, candidates })
    }

    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    #[must_use]
    pub fn candidates(&self) -> &[CandidateSubgroup] {
        &self.candidates
    }

    /// Every selection mask of the ladder.
    #[must_use]
    pub fn masks(&self) -> Range<u32> {
        0..self.ladder.mask_count()
    }

    pub fn permutation(&self, mask: u32) -> Permutation<SIZE> {
        self.ladder.build(mask)
    }

    /// Only third level permutations with a control/target collision go through the candidate list.
    #[must_use]
    pub fn classify(&self, mask: u32) -> MaskOutcome {
        let permutation = self.permutation(mask);
        if !is_third_level(&permutation) {
            return MaskOutcome::OutsideThirdLevel;
        }
        if !self.ladder.has_mismatch(mask) {
            return MaskOutcome::MismatchFree;
        }
        if let Some(candidate) = find_clearing_candidate(&permutation, &self.candidates) {
            tracing::trace!(mask, candidate, "mask cleared");
            MaskOutcome::Cleared { candidate }
        } else {
            tracing::debug!(mask = %self.format(mask), "no candidate subgroup clears mask");
            MaskOutcome::Unresolved
        }
    }

    pub fn run(&self, masks: Range<u32>) -> SearchReport {
        match self.run_with(masks, |_| Ok::<(), Infallible>(())) {
            Ok(report) => report,
            Err(never) => match never {},
        }
    }

    /// Classifies `masks` in increasing order, calling `on_unresolved` as soon as an
    /// unresolved mask is found.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error of `on_unresolved`.
    pub fn run_with<E>(
        &self,
        masks: Range<u32>,
        mut on_unresolved: impl FnMut(u32) -> Result<(), E>,
    ) -> Result<SearchReport, E> {
        tracing::info!(start = masks.start, end = masks.end, "sequential search started");
        let mut report = SearchReport::new(self.candidates.len());
        for mask in masks {
            let outcome = self.classify(mask);
            report.record(mask, outcome);
            if outcome == MaskOutcome::Unresolved {
                on_unresolved(mask)?;
            }
        }
        self.log_report(&report);
        Ok(report)
    }

    /// Classifies `masks` on the rayon thread pool. Masks are independent, so the report equals
    /// the one of [`StaircaseSearch::run`].
    pub fn run_parallel(&self, masks: Range<u32>) -> SearchReport {
        tracing::info!(
            start = masks.start,
            end = masks.end,
            threads = rayon::current_num_threads(),
            "parallel search started"
        );
        let candidate_count = self.candidates.len();
        let report = masks
            .into_par_iter()
            .fold(
                || SearchReport::new(candidate_count),
                |mut report, mask| {
                    report.record(mask, self.classify(mask));
                    report
                },
            )
            .reduce(|| SearchReport::new(candidate_count), SearchReport::merge);
        self.log_report(&report);
        report
    }

    /// `mask` as binary digits, one per gate, most significant first.
    #[must_use]
    pub fn format(&self, mask: u32) -> String {
        format_mask(mask, self.ladder.gate_count())
    }

    fn log_report(&self, report: &SearchReport) {
        tracing::info!(
            examined = report.examined,
            third_level = report.third_level(),
            mismatch_free = report.mismatch_free,
            cleared = ?report.cleared,
            unresolved = report.unresolved.len(),
            "search finished"
        );
        for (candidate, count) in self.candidates.iter().zip(&report.cleared) {
            tracing::debug!(
                candidate = %candidate.label(self.ladder.qubit_count()),
                count,
                "masks cleared by candidate"
            );
        }
    }
}

/// The low `width` bits of `mask` in binary, most significant first, with leading zeros.
///
/// Digits above bit 31 are always `0`.
#[must_use]
pub fn format_mask(mask: u32, width: usize) -> String {
    (0..width)
        .rev()
        .map(|bit| if bit < 32 && (mask >> bit) & 1 == 1 { '1' } else { '0' })
        .collect()
}
