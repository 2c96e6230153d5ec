/// Tracks whether the window is currently rendered in its miniature form.
///
/// The initial value is read synchronously from the host at construction
/// rather than assumed false, so a screen recreated while already
/// miniaturized never spends a frame believing otherwise. Updates come
/// only from the host's mode-change events, undebounced.
#[derive(Debug)]
pub struct PipModeObserver {
    in_pip: bool,
}

impl PipModeObserver {
    pub fn new(initial: bool) -> Self {
        Self { in_pip: initial }
    }

    pub fn on_mode_changed(&mut self, in_pip: bool) {
        self.in_pip = in_pip;
    }

    pub fn is_in_pip(&self) -> bool {
        self.in_pip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_value_comes_from_the_host() {
        let observer = PipModeObserver::new(true);
        assert!(observer.is_in_pip());
    }

    #[test]
    fn every_transition_is_reflected_immediately() {
        let mut observer = PipModeObserver::new(false);
        observer.on_mode_changed(true);
        assert!(observer.is_in_pip());
        observer.on_mode_changed(false);
        assert!(!observer.is_in_pip());
    }
}
