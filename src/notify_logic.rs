/// Decide whether this polling iteration may produce a wireless side effect.
///
/// Fires iff a peer is connected *and* a trigger edge was observed in
/// the current iteration.  An edge seen while disconnected is dropped
/// outright - never queued, never deferred.
pub fn should_fire(connected: bool, edge_detected: bool) -> bool {
    connected && edge_detected
}
