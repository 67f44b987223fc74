bitflags::bitflags! {
    /// Per-call processing flags accepted by [`Engine::process_key`](crate::Engine::process_key).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Mode: u8 {
        /// Literal typing: every key is inserted as-is, no Telex action runs.
        const ENGLISH = 1 << 1;
        /// Tone keys (`s f r x j z`) are typed literally.
        const TONE_LESS = 1 << 2;
        /// Shape keys (`a e o w d`) never add or remove a modification.
        const MARK_LESS = 1 << 3;
        /// Keys are lowercased before processing.
        const LOWER_CASE = 1 << 4;
        /// `process_string` receives the whole field contents and starts from a clean engine.
        const FULL_TEXT = 1 << 5;
    }
}

impl Mode {
    #[inline(always)]
    pub fn is_literal(self) -> bool {
        self.contains(Mode::ENGLISH)
    }
}
