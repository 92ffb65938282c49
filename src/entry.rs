use std::path::Path;

/// How an archive entry should be opened, judged by its file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// An engine `idwav` entry that needs transcoding
    IdWave,

    /// A RIFF/WAVE file that plays as it is
    Wave,

    /// Anything else
    Other,
}

impl EntryKind {
    /// Classify `name` by its extension, ignoring case.
    ///
    /// ```
    /// use idwavfile::EntryKind;
    ///
    /// assert_eq!(EntryKind::of("sound/vo/intro.IDWAV"), EntryKind::IdWave);
    /// assert_eq!(EntryKind::of("music/theme.wav"), EntryKind::Wave);
    /// assert_eq!(EntryKind::of("textures/floor.bimage"), EntryKind::Other);
    /// ```
    pub fn of<P: AsRef<Path>>(name: P) -> Self {
        let ext = name
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("idwav") => Self::IdWave,
            Some("wav") => Self::Wave,
            _ => Self::Other,
        }
    }

    pub fn is_audio(self) -> bool {
        self != Self::Other
    }
}
