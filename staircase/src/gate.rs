use derive_more::Display;

/// Qubits are numbered from 1, left to right; qubit `q` of an `n` qubit register
/// is stored in bit `n - q` of a basis state.
pub type QubitId = usize;

/// Bit of a basis state holding `qubit` in a register of `qubit_count` qubits.
///
/// # Panics
///
/// Debug-asserts that `qubit` is in `1..=qubit_count`.
#[inline]
#[must_use]
pub fn qubit_bit(qubit: QubitId, qubit_count: usize) -> usize {
    debug_assert!((1..=qubit_count).contains(&qubit), "qubit {qubit} outside of 1..={qubit_count}");
    1 << (qubit_count - qubit)
}

/// Multi-controlled NOT with two controls, the Toffoli gate.
#[must_use]
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
#[display("CCX({}, {} -> {})", controls.0, controls.1, target)]
pub struct ToffoliGate {
    pub controls: (QubitId, QubitId),
    pub target: QubitId,
}

impl ToffoliGate {
    pub const fn new(first_control: QubitId, second_control: QubitId, target: QubitId) -> Self {
        ToffoliGate {
            controls: (first_control, second_control),
            target,
        }
    }

    #[inline]
    #[must_use]
    pub fn control_mask(&self, qubit_count: usize) -> usize {
        qubit_bit(self.controls.0, qubit_count) | qubit_bit(self.controls.1, qubit_count)
    }

    /// Image of the basis state `state`: the target bit flips when both control bits are set.
    #[inline]
    #[must_use]
    pub fn apply(&self, state: usize, qubit_count: usize) -> usize {
        let control_mask = self.control_mask(qubit_count);
        if state & control_mask == control_mask {
            state ^ qubit_bit(self.target, qubit_count)
        } else {
            state
        }
    }

    pub fn qubits(&self) -> [QubitId; 3] {
        [self.controls.0, self.controls.1, self.target]
    }
}
