//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

pub struct DebugFlags {
    /// Emit loader timings and row counts.
    pub print_load: bool,
    /// Emit each snapped target date while the dashboard model is built.
    pub print_snaps: bool,
    /// Emit tab switches.
    pub print_ui_interactions: bool,
    /// Emit UI state serialization/deserialization logs.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_load: false,
    print_snaps: false,
    print_ui_interactions: false,
    print_state_serde: false,
    print_shutdown: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_are_off_by_default() {
        let flags = &DEBUG_FLAGS;
        assert!(!flags.print_load);
        assert!(!flags.print_snaps);
        assert!(!flags.print_ui_interactions);
        assert!(!flags.print_state_serde);
        assert!(!flags.print_shutdown);
    }
}
