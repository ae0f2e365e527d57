//! Type relations.
//!
//! A relation takes the current types of an operator's arguments (inputs first, then outputs)
//! and returns a list of the same length in which some incomplete slots may have been replaced
//! by derived types. Returning the list unchanged means "not enough information yet". Relations
//! are pure: the solver may call them any number of times, from any thread.
use std::fmt;

use crate::error::Result;
use crate::types::Type;

mod broadcast;
mod concat;
mod identity;
pub(crate) mod util;

pub use broadcast::{broadcast_rel, broadcast_to_bool_rel};
pub use concat::concat_rel;
pub use identity::identity_rel;

/// The refined argument types of a relation call
pub type RelationResult = Result<Vec<Type>>;

/// The call shape of every relation: `(argument types, number of inputs)`
pub type RelationFn = fn(&[Type], usize) -> RelationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Output type equals input type. `1 → 1`
    Identity,

    /// Elementwise binary op with broadcasting. `2 → 1`
    Broadcast,

    /// Broadcasting comparison producing bool. `2 → 1`
    BroadcastToBool,

    /// Concatenate a tuple of tensors along axis 0. `1 → 1`
    Concat,
}

impl Relation {
    /// The *profile* of a relation is the pair of its number of inputs and outputs.
    pub fn profile(&self) -> (usize, usize) {
        match self {
            Relation::Identity => (1, 1),
            Relation::Broadcast => (2, 1),
            Relation::BroadcastToBool => (2, 1),
            Relation::Concat => (1, 1),
        }
    }

    pub fn arity(&self) -> usize {
        let (inputs, outputs) = self.profile();
        inputs + outputs
    }

    pub fn name(&self) -> &'static str {
        match self {
            Relation::Identity => "identity",
            Relation::Broadcast => "broadcast",
            Relation::BroadcastToBool => "broadcast_to_bool",
            Relation::Concat => "concat",
        }
    }

    pub fn function(&self) -> RelationFn {
        match self {
            Relation::Identity => identity_rel,
            Relation::Broadcast => broadcast_rel,
            Relation::BroadcastToBool => broadcast_to_bool_rel,
            Relation::Concat => concat_rel,
        }
    }

    pub fn apply(&self, args: &[Type], num_inputs: usize) -> RelationResult {
        (self.function())(args, num_inputs)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
