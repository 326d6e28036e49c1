/// Keyboard key identifier.
///
/// Intentionally small: the runtime maps platform keycodes into these
/// variants and reports anything else as unrecognized instead of storing it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Space,
    Escape,

    W,
    A,
    S,
    D,
}

/// Raw key transition reported by the platform.
///
/// `Press` and `Repeat` both mean the key is held; `Release` clears it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyAction {
    Press,
    Release,
    Repeat,
}
