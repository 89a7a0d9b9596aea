/// Discrete events a host hands to the engine once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed at a screen position, in the same units as the
    /// active `CellLayout`.
    PointerPressed { x: f32, y: f32 },
    /// Drop any half-entered selection.
    ClearSelection,
}
