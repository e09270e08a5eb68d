use turnpike_core::State;

/// Successor enumeration for directional search.
///
/// Implementations append every legal successor of `s` along with its
/// positive step cost. The caller clears `buf` before calling.
pub trait TurnPather {
    /// Append `(next_state, step_cost)` pairs for `s` into `buf`.
    fn successors(&self, s: State, buf: &mut Vec<(State, i32)>);
}
