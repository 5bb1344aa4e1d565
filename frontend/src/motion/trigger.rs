/// One-shot lifecycle for effects that run at most once per mount.
///
/// There is no way back from `Triggered`: the only transition is `fire`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Trigger {
    #[default]
    Pending,
    Triggered,
}

impl Trigger {
    /// Moves to `Triggered`. Returns `true` only for the call that made the
    /// transition.
    pub fn fire(&mut self) -> bool {
        match self {
            Trigger::Pending => {
                *self = Trigger::Triggered;
                true
            }
            Trigger::Triggered => false,
        }
    }

    pub fn has_fired(&self) -> bool {
        matches!(self, Trigger::Triggered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_once_across_reentries() {
        let mut trigger = Trigger::default();
        let mut runs = 0;
        // enter, leave, enter, leave, enter
        for visible in [true, false, true, false, true] {
            if visible && trigger.fire() {
                runs += 1;
            }
        }
        assert_eq!(runs, 1);
        assert!(trigger.has_fired());
    }

    #[test]
    fn starts_pending() {
        assert!(!Trigger::default().has_fired());
    }
}
