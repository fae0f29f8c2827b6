//! Keyboard deny-list that discourages opening the browser developer tools.
//! Browser settings bypass it trivially; it is not a security boundary.
//! A chord matches when its key matches and it holds at least the listed
//! modifiers.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
}

struct BlockedChord {
    key: &'static str,
    ctrl: bool,
    shift: bool,
}

const BLOCKED: [BlockedChord; 5] = [
    BlockedChord { key: "F12", ctrl: false, shift: false },
    BlockedChord { key: "I", ctrl: true, shift: true },
    BlockedChord { key: "C", ctrl: true, shift: true },
    BlockedChord { key: "J", ctrl: true, shift: true },
    BlockedChord { key: "U", ctrl: true, shift: false },
];

pub fn is_blocked(chord: &KeyChord) -> bool {
    BLOCKED.iter().any(|blocked| {
        blocked.key.eq_ignore_ascii_case(&chord.key)
            && (!blocked.ctrl || chord.ctrl)
            && (!blocked.shift || chord.shift)
    })
}
