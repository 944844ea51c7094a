//! Key mapping from terminal events to logical game keys.

use crate::types::GameKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key event to a game key.
///
/// Alphabet characters take precedence over the `q` quit shortcut, so an
/// alphabet containing `q` still scores with it; `Esc` and Ctrl-C always quit.
pub fn map_key(key: KeyEvent, alphabet: &[char]) -> Option<GameKey> {
    if should_quit(key) && !matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return Some(GameKey::Quit);
    }

    match key.code {
        KeyCode::Char(c) if alphabet.contains(&c) => Some(GameKey::Label(c)),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameKey::Quit),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    const ALPHABET: [char; 3] = ['1', '2', '3'];

    #[test]
    fn test_label_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('1')), &ALPHABET),
            Some(GameKey::Label('1'))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('3')), &ALPHABET),
            Some(GameKey::Label('3'))
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('4')), &ALPHABET), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left), &ALPHABET), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Esc), &ALPHABET),
            Some(GameKey::Quit)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('Q')), &ALPHABET),
            Some(GameKey::Quit)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &ALPHABET),
            Some(GameKey::Quit)
        );
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_alphabet_shadows_q_but_not_escape() {
        let alphabet = ['q', 'w', 'e'];
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('q')), &alphabet),
            Some(GameKey::Label('q'))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Esc), &alphabet),
            Some(GameKey::Quit)
        );
    }

    #[test]
    fn test_plain_c_is_a_label_when_in_alphabet() {
        let alphabet = ['a', 'b', 'c'];
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('c')), &alphabet),
            Some(GameKey::Label('c'))
        );
    }
}
