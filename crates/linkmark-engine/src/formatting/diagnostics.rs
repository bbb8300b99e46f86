use std::fmt;

/// A correction applied to a [`FormattingElement`](super::FormattingElement)'s
/// bounds during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundsCorrection {
    /// `end` was smaller than `start`; the two were swapped.
    Swapped { tag: String },
    /// `start` was negative after any swap; it was set to zero.
    ClampedStart { tag: String },
}

impl BoundsCorrection {
    pub fn tag(&self) -> &str {
        match self {
            BoundsCorrection::Swapped { tag } | BoundsCorrection::ClampedStart { tag } => tag,
        }
    }
}

impl fmt::Display for BoundsCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsCorrection::Swapped { tag } => write!(
                f,
                "End position smaller than start of '{tag}' element. They have been swapped."
            ),
            BoundsCorrection::ClampedStart { tag } => write!(
                f,
                "Start position of '{tag}' element smaller than zero. It has been set to zero."
            ),
        }
    }
}

/// Receives non-fatal reports emitted while building formatting elements.
pub trait Diagnostics {
    fn warn(&mut self, correction: BoundsCorrection);
}

/// Forwards corrections to the `log` facade at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&mut self, correction: BoundsCorrection) {
        log::warn!(target: "linkmark::formatting", "{correction}");
    }
}

/// Collects corrections, mostly useful for inspecting what was fixed.
impl Diagnostics for Vec<BoundsCorrection> {
    fn warn(&mut self, correction: BoundsCorrection) {
        self.push(correction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_tag() {
        let swapped = BoundsCorrection::Swapped {
            tag: "em".to_string(),
        };
        assert_eq!(
            swapped.to_string(),
            "End position smaller than start of 'em' element. They have been swapped."
        );

        let clamped = BoundsCorrection::ClampedStart {
            tag: "strong".to_string(),
        };
        assert_eq!(clamped.tag(), "strong");
        assert_eq!(
            clamped.to_string(),
            "Start position of 'strong' element smaller than zero. It has been set to zero."
        );
    }

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink: Vec<BoundsCorrection> = Vec::new();
        sink.warn(BoundsCorrection::Swapped { tag: "a".into() });
        sink.warn(BoundsCorrection::ClampedStart { tag: "a".into() });
        assert_eq!(sink.len(), 2);
        assert!(matches!(sink[0], BoundsCorrection::Swapped { .. }));
    }
}
