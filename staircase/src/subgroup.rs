use gf2perm::Permutation;

use crate::pauli::PauliGenerator;

const fn x(support: usize) -> PauliGenerator {
    PauliGenerator::x(support)
}

const fn z(support: usize) -> PauliGenerator {
    PauliGenerator::z(support)
}

/// Maximal abelian subgroups of the six qubit Pauli group tried, in order, on every
/// third level staircase permutation that uses some qubit both as a control and as a target.
pub const SIX_QUBIT_CANDIDATES: [[PauliGenerator; 6]; 5] = [
    // <x6, x5, x3x4, z3z4, z2, z1>
    [x(1), x(2), x(12), z(12), z(16), z(32)],
    // <x6, x4x5, z4z5, z3, z2, z1>
    [x(1), x(6), z(6), z(8), z(16), z(32)],
    // <x6, x3x5, z4, z3z5, z2, z1>
    [x(1), x(10), z(4), z(10), z(16), z(32)],
    // <x6, x3x4x5, z4z5, z3z5, z2, z1>
    [x(1), x(14), z(6), z(10), z(16), z(32)],
    // <x6, z5, x3x4, z3z4, z2, z1>
    [x(1), z(2), x(12), z(12), z(16), z(32)],
];

/// Subgroup of the Pauli group given by generators that are pure X or pure Z strings.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateSubgroup {
    generators: Vec<PauliGenerator>,
}

impl CandidateSubgroup {
    pub fn new(generators: impl Into<Vec<PauliGenerator>>) -> Self {
        CandidateSubgroup {
            generators: generators.into(),
        }
    }

    #[must_use]
    pub fn generators(&self) -> &[PauliGenerator] {
        &self.generators
    }

    /// Whether conjugation by `permutation` maps every generator, and so the whole subgroup,
    /// into the Pauli group.
    #[must_use]
    pub fn clears<const SIZE: usize>(&self, permutation: &Permutation<SIZE>) -> bool {
        self.generators
            .iter()
            .all(|generator| generator.is_preserved_by(permutation))
    }

    #[must_use]
    pub fn is_abelian(&self) -> bool {
        self.generators.iter().enumerate().all(|(index, generator)| {
            self.generators[..index]
                .iter()
                .all(|other| generator.commutes_with(other))
        })
    }

    /// Rank of the generators as binary symplectic vectors.
    #[must_use]
    pub fn rank(&self, qubit_count: usize) -> usize {
        let mut basis: Vec<u64> = Vec::with_capacity(self.generators.len());
        for generator in &self.generators {
            let mut vector = generator.symplectic_bits(qubit_count);
            for &row in &basis {
                vector = vector.min(vector ^ row);
            }
            if vector != 0 {
                basis.push(vector);
                basis.sort_unstable_by(|left, right| right.cmp(left));
            }
        }
        basis.len()
    }

    /// `qubit_count` independent commuting generators span a maximal abelian subgroup.
    #[must_use]
    pub fn is_maximal_abelian(&self, qubit_count: usize) -> bool {
        self.generators.len() == qubit_count && self.is_abelian() && self.rank(qubit_count) == qubit_count
    }

    /// Label such as `<x6, x5, x3x4, z3z4, z2, z1>`.
    #[must_use]
    pub fn label(&self, qubit_count: usize) -> String {
        let generators: Vec<String> = self
            .generators
            .iter()
            .map(|generator| generator.label(qubit_count))
            .collect();
        format!("<{}>", generators.join(", "))
    }
}

#[must_use]
pub fn six_qubit_candidates() -> Vec<CandidateSubgroup> {
    SIX_QUBIT_CANDIDATES.iter().map(CandidateSubgroup::new).collect()
}

/// Index of the first candidate that `permutation` conjugates into the Pauli group.
///
/// `None` means no listed candidate works and `permutation` is a witness against the list.
#[must_use]
pub fn find_clearing_candidate<const SIZE: usize>(
    permutation: &Permutation<SIZE>,
    candidates: &[CandidateSubgroup],
) -> Option<usize> {
    candidates
        .iter()
        .position(|candidate| candidate.clears(permutation))
}
