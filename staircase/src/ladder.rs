use derive_more::{Display, Error};
use gf2perm::Permutation;

use crate::gate::{QubitId, ToffoliGate};

/// Every Toffoli gate of a six qubit staircase, ordered by target, then second control, then first control.
pub const SIX_QUBIT_STAIRCASE: [ToffoliGate; 20] = [
    ToffoliGate::new(1, 2, 3),
    ToffoliGate::new(1, 2, 4),
    ToffoliGate::new(1, 3, 4),
    ToffoliGate::new(2, 3, 4),
    ToffoliGate::new(1, 2, 5),
    ToffoliGate::new(1, 3, 5),
    ToffoliGate::new(2, 3, 5),
    ToffoliGate::new(1, 4, 5),
    ToffoliGate::new(2, 4, 5),
    ToffoliGate::new(3, 4, 5),
    ToffoliGate::new(1, 2, 6),
    ToffoliGate::new(1, 3, 6),
    ToffoliGate::new(2, 3, 6),
    ToffoliGate::new(1, 4, 6),
    ToffoliGate::new(2, 4, 6),
    ToffoliGate::new(3, 4, 6),
    ToffoliGate::new(1, 5, 6),
    ToffoliGate::new(2, 5, 6),
    ToffoliGate::new(3, 5, 6),
    ToffoliGate::new(4, 5, 6),
];

/// Selection masks are `u32`, one bit per gate.
pub const MAX_GATE_COUNT: usize = 31;

/// Largest register whose basis permutations are built, `2^16` states.
pub const MAX_QUBIT_COUNT: usize = 16;

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum LadderError {
    #[display("gate {index} ({gate}) acts outside of qubits 1..={qubit_count}")]
    QubitOutOfRange {
        index: usize,
        gate: ToffoliGate,
        qubit_count: usize,
    },
    #[display("gate {index} ({gate}) uses a qubit more than once")]
    RepeatedQubit { index: usize, gate: ToffoliGate },
    #[display("{gate_count} gates do not fit a {MAX_GATE_COUNT} bit selection mask")]
    TooManyGates { gate_count: usize },
    #[display("{qubit_count} qubits exceed the supported {MAX_QUBIT_COUNT}")]
    TooManyQubits { qubit_count: usize },
}

/// Which qubits the selected gates of a ladder use as controls and as targets.
///
/// Bit `q` of each set stands for qubit `q`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QubitUsage {
    pub controls: u32,
    pub targets: u32,
}

impl QubitUsage {
    pub fn add(&mut self, gate: &ToffoliGate) {
        self.controls |= (1 << gate.controls.0) | (1 << gate.controls.1);
        self.targets |= 1 << gate.target;
    }

    /// Qubits used both as a control and as a target.
    #[must_use]
    pub fn collisions(&self) -> u32 {
        self.controls & self.targets
    }

    #[must_use]
    pub fn has_mismatch(&self) -> bool {
        self.collisions() != 0
    }

    pub fn colliding_qubits(&self) -> impl Iterator<Item = QubitId> {
        let collisions = self.collisions();
        (0..u32::BITS as usize).filter(move |&qubit| (collisions >> qubit) & 1 == 1)
    }
}

/// An ordered list of Toffoli gates, any subset of which can be selected by a mask.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ladder {
    qubit_count: usize,
    gates: Vec<ToffoliGate>,
}

impl Ladder {
    /// # Errors
    ///
    /// Returns [`LadderError`] if a gate touches a qubit outside of `1..=qubit_count`, uses a qubit
    /// twice, or if there are more than [`MAX_GATE_COUNT`] gates or [`MAX_QUBIT_COUNT`] qubits.
    pub fn new(qubit_count: usize, gates: Vec<ToffoliGate>) -> Result<Self, LadderError> {
        if qubit_count > MAX_QUBIT_COUNT {
            return Err(LadderError::TooManyQubits { qubit_count });
        }
        if gates.len() > MAX_GATE_COUNT {
            return Err(LadderError::TooManyGates { gate_count: gates.len() });
        }
        for (index, &gate) in gates.iter().enumerate() {
            let [first, second, target] = gate.qubits();
            if gate.qubits().iter().any(|qubit| !(1..=qubit_count).contains(qubit)) {
                return Err(LadderError::QubitOutOfRange {
                    index,
                    gate,
                    qubit_count,
                });
            }
            if first == second || first == target || second == target {
                return Err(LadderError::RepeatedQubit { index, gate });
            }
        }
        Ok(Ladder { qubit_count, gates })
    }

    pub fn six_qubit() -> Self {
        Ladder {
            qubit_count: 6,
            gates: SIX_QUBIT_STAIRCASE.to_vec(),
        }
    }

    /// All Toffoli gates whose controls both lie above their target, in staircase order.
    ///
    /// # Panics
    ///
    /// Panics if the staircase on `qubit_count` qubits has more than [`MAX_GATE_COUNT`] gates,
    /// which happens from 7 qubits on.
    pub fn staircase(qubit_count: usize) -> Self {
        let mut gates = Vec::new();
        for target in 3..=qubit_count {
            for second_control in 2..target {
                for first_control in 1..second_control {
                    gates.push(ToffoliGate::new(first_control, second_control, target));
                }
            }
        }
        assert!(
            gates.len() <= MAX_GATE_COUNT,
            "a staircase on {qubit_count} qubits has {} gates",
            gates.len()
        );
        Ladder { qubit_count, gates }
    }

    #[inline]
    #[must_use]
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    #[inline]
    #[must_use]
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    #[inline]
    #[must_use]
    pub fn gates(&self) -> &[ToffoliGate] {
        &self.gates
    }

    /// Number of distinct selection masks, `2^gate_count`.
    #[inline]
    #[must_use]
    pub fn mask_count(&self) -> u32 {
        1 << self.gates.len()
    }

    /// Gates selected by `mask`, in ladder order.
    pub fn selected(&self, mask: u32) -> impl Iterator<Item = &ToffoliGate> {
        self.gates
            .iter()
            .enumerate()
            .filter(move |&(index, _)| (mask >> index) & 1 == 1)
            .map(|(_, gate)| gate)
    }

    /// Applies the gates selected by `mask` one after another, starting from the identity.
    ///
    /// Later gates act on the output of earlier ones, so the order of the ladder matters.
    ///
    /// # Panics
    ///
    /// Panics if `SIZE` is not the state count of the ladder's qubits.
    pub fn build<const SIZE: usize>(&self, mask: u32) -> Permutation<SIZE> {
        assert_eq!(
            Permutation::<SIZE>::QUBIT_COUNT,
            self.qubit_count,
            "permutations of {SIZE} states do not match a ladder on {} qubits",
            self.qubit_count
        );
        let mut images: [usize; SIZE] = std::array::from_fn(|state| state);
        for gate in self.selected(mask) {
            for image in &mut images {
                *image = gate.apply(*image, self.qubit_count);
            }
        }
        Permutation::from_images(images)
    }

    pub fn usage(&self, mask: u32) -> QubitUsage {
        let mut usage = QubitUsage::default();
        for gate in self.selected(mask) {
            usage.add(gate);
        }
        usage
    }

    /// Whether some qubit is a control of one selected gate and the target of another.
    #[must_use]
    pub fn has_mismatch(&self, mask: u32) -> bool {
        self.usage(mask).has_mismatch()
    }
}
