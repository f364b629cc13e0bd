use crate::countdown::Countdown;

/// Which user commands apply in the current engine state. The UI layer
/// renders its help line and key handling from this instead of reaching
/// into shared application state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandSet {
    pub start: bool,
    pub stop: bool,
    pub reset: bool,
}

impl CommandSet {
    pub fn for_countdown(countdown: &Countdown) -> Self {
        if countdown.is_stopped() {
            Self {
                start: true,
                stop: false,
                reset: false,
            }
        } else if countdown.is_paused() {
            Self {
                start: true,
                stop: false,
                reset: true,
            }
        } else {
            Self {
                start: false,
                stop: true,
                reset: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};

    fn at(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn stopped_offers_start_only() {
        let countdown = Countdown::new(10.0);
        assert_eq!(
            CommandSet::for_countdown(&countdown),
            CommandSet {
                start: true,
                stop: false,
                reset: false
            }
        );
    }

    #[test]
    fn running_offers_stop_only() {
        let mut countdown = Countdown::new(10.0);
        countdown.start(at(0));
        assert_eq!(
            CommandSet::for_countdown(&countdown),
            CommandSet {
                start: false,
                stop: true,
                reset: false
            }
        );
    }

    #[test]
    fn paused_offers_start_and_reset() {
        let mut countdown = Countdown::new(10.0);
        countdown.start(at(0));
        countdown.pause(at(3));
        assert_eq!(
            CommandSet::for_countdown(&countdown),
            CommandSet {
                start: true,
                stop: false,
                reset: true
            }
        );
    }
}
