use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::rotation::Steer;

/// Steering key carried by a key event, if any
pub fn steer_for(key: &KeyEvent) -> Option<Steer> {
    match key.code {
        KeyCode::Left => Some(Steer::Left),
        KeyCode::Right => Some(Steer::Right),
        _ => None,
    }
}

/// Tracks the held steering key for terminals that never report releases.
///
/// Every press or repeat refreshes the hold; once no repeat has arrived
/// for `timeout` the key counts as released.
#[derive(Debug)]
pub struct KeyHold {
    timeout: Duration,
    held: Option<(Steer, Instant)>,
}

impl KeyHold {
    pub fn new(timeout: Duration) -> Self {
        KeyHold {
            timeout,
            held: None,
        }
    }

    /// Records a press; returns the previously held key if it changed
    pub fn press(&mut self, steer: Steer, now: Instant) -> Option<Steer> {
        let previous = self.held.map(|(held, _)| held).filter(|&held| held != steer);
        self.held = Some((steer, now));
        previous
    }

    /// Releases the key if it has gone quiet for the timeout
    pub fn expire(&mut self, now: Instant) -> Option<Steer> {
        match self.held {
            Some((steer, since)) if now.saturating_duration_since(since) >= self.timeout => {
                self.held = None;
                Some(steer)
            }
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.held = None;
    }

    pub fn held(&self) -> Option<Steer> {
        self.held.map(|(steer, _)| steer)
    }
}

/// Whether a key event should act as a press (initial or auto-repeat)
pub fn is_press(key: &KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn hold_expires_after_timeout_only() {
        let start = Instant::now();
        let mut hold = KeyHold::new(Duration::from_millis(150));
        assert_eq!(hold.press(Steer::Left, start), None);

        assert_eq!(hold.expire(start + Duration::from_millis(100)), None);
        assert_eq!(hold.held(), Some(Steer::Left));

        // A repeat refreshes the hold
        let _ = hold.press(Steer::Left, start + Duration::from_millis(120));
        assert_eq!(hold.expire(start + Duration::from_millis(200)), None);
        assert_eq!(
            hold.expire(start + Duration::from_millis(270)),
            Some(Steer::Left)
        );
        assert_eq!(hold.held(), None);
    }

    #[test]
    fn switching_keys_reports_the_old_one() {
        let now = Instant::now();
        let mut hold = KeyHold::new(Duration::from_millis(150));
        let _ = hold.press(Steer::Left, now);
        assert_eq!(hold.press(Steer::Right, now), Some(Steer::Left));
        assert_eq!(hold.press(Steer::Right, now), None);
    }

    #[test]
    fn clearing_drops_the_hold() {
        let mut hold = KeyHold::new(Duration::from_millis(500));
        let _ = hold.press(Steer::Right, Instant::now());
        hold.clear();
        assert_eq!(hold.held(), None);
        assert_eq!(hold.expire(Instant::now() + Duration::from_secs(1)), None);
    }

    #[test]
    fn arrows_map_to_steering() {
        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(steer_for(&left), Some(Steer::Left));
        assert!(is_press(&left));
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(steer_for(&up), None);
    }
}
