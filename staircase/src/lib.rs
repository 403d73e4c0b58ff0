//! Exhaustive search over staircase ladders of Toffoli gates.
//!
//! Every subset of a fixed ladder of Toffoli gates defines a permutation of the computational
//! basis. For each one the search decides whether it lies in the third level of the Clifford
//! hierarchy and, when some qubit is both a control and a target, whether one of a short list of
//! maximal abelian subgroups of the Pauli group is conjugated back into the Pauli group.

pub mod gate;
pub mod hierarchy;
pub mod ladder;
pub mod pauli;
pub mod search;
pub mod subgroup;

pub use gate::{QubitId, ToffoliGate};
pub use hierarchy::is_third_level;
pub use ladder::{Ladder, LadderError, QubitUsage, SIX_QUBIT_STAIRCASE};
pub use pauli::{yields_x, yields_z, Axis, PauliGenerator};
pub use search::{format_mask, MaskOutcome, SearchError, SearchReport, StaircaseSearch};
pub use subgroup::{find_clearing_candidate, six_qubit_candidates, CandidateSubgroup, SIX_QUBIT_CANDIDATES};
