/// Errors the accretion engine can report across its boundary.
///
/// Per spec §7: configuration errors are the caller's responsibility and are
/// raised at construction time; non-termination is a defensive backstop that
/// should never trigger given the dusted-measure termination argument, but
/// is detected rather than looped on forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An accretion constant (or combination of constants) is not physically
    /// sensible, e.g. `innermost_planet >= outermost_planet`.
    InvalidConstants(&'static str),
    /// The driver exceeded its injection-count safety bound without the
    /// dust disc becoming exhausted.
    NonTerminating {
        /// Number of planetesimals injected before the bound was hit.
        injected_nuclei: u32,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConstants(reason) => {
                write!(f, "invalid accretion constants: {reason}")
            }
            Self::NonTerminating { injected_nuclei } => {
                write!(
                    f,
                    "accretion did not terminate after {injected_nuclei} injections"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
