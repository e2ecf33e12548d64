/// Status and animation glyphs for one terminal capability level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub success: &'static str,
    pub warning: &'static str,
    pub failure: &'static str,
    pub spinner: &'static [&'static str],
}

pub const FANCY: GlyphSet = GlyphSet {
    success: "✓",
    warning: "●",
    failure: "✘",
    spinner: &["◴", "◷", "◶", "◵"],
};

/// Plain ASCII glyphs (`--boring`).
pub const BORING: GlyphSet = GlyphSet {
    success: "v",
    warning: "!",
    failure: "x",
    spinner: &["|", "/", "-", "\\"],
};

impl GlyphSet {
    pub fn for_boring(boring: bool) -> Self {
        if boring { BORING } else { FANCY }
    }
}

/// Rotation cursor over a fixed ring of frames.
#[derive(Debug, Clone)]
pub struct Spinner {
    frames: &'static [&'static str],
    cursor: usize,
}

impl Spinner {
    pub fn new(frames: &'static [&'static str]) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Return the current frame and advance to the next one.
    pub fn next_frame(&mut self) -> &'static str {
        if self.frames.is_empty() {
            return "";
        }
        let frame = self.frames[self.cursor];
        self.cursor = (self.cursor + 1) % self.frames.len();
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps_around() {
        let mut spinner = Spinner::new(BORING.spinner);
        let frames: Vec<_> = (0..6).map(|_| spinner.next_frame()).collect();
        assert_eq!(frames, vec!["|", "/", "-", "\\", "|", "/"]);
    }

    #[test]
    fn test_spinner_consecutive_frames_differ() {
        let mut spinner = Spinner::new(FANCY.spinner);
        let first = spinner.next_frame();
        let second = spinner.next_frame();
        assert_ne!(first, second);
    }

    #[test]
    fn test_empty_spinner_is_blank() {
        let mut spinner = Spinner::new(&[]);
        assert_eq!(spinner.next_frame(), "");
    }

    #[test]
    fn test_boring_glyphs_are_ascii() {
        let boring = GlyphSet::for_boring(true);
        assert!(boring.success.is_ascii());
        assert!(boring.warning.is_ascii());
        assert!(boring.failure.is_ascii());
        assert!(boring.spinner.iter().all(|f| f.is_ascii()));
        assert_eq!(GlyphSet::for_boring(false), FANCY);
    }
}
