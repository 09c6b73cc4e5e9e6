// File: src/core/codec.rs
//! Fixed letter <-> digit layout of the 9-key pad.

use crate::core::types::Digit;
use crate::error::{KeypadError, Result};

/// Letters printed on each key, in key order. Index 0 is key 2.
const KEY_LETTERS: [&str; 8] = ["abc", "def", "ghi", "jkl", "mno", "pqrs", "tuv", "wxyz"];

/// Maps a lowercase letter to the key it is printed on.
pub fn digit_for(letter: char) -> Result<Digit> {
    let digit = match letter {
        'a'..='c' => 2,
        'd'..='f' => 3,
        'g'..='i' => 4,
        'j'..='l' => 5,
        'm'..='o' => 6,
        'p'..='s' => 7,
        't'..='v' => 8,
        'w'..='z' => 9,
        _ => return Err(KeypadError::InvalidCharacter(letter)),
    };
    Ok(digit)
}

/// Letters assigned to `digit`, or `None` for keys without letters.
pub fn letters_for(digit: Digit) -> Option<&'static str> {
    if is_letter_key(digit) {
        Some(KEY_LETTERS[(digit - 2) as usize])
    } else {
        None
    }
}

pub fn is_letter_key(digit: Digit) -> bool {
    (2..=9).contains(&digit)
}

/// Digit path of a word: one key per letter.
pub fn encode(word: &str) -> Result<Vec<Digit>> {
    word.chars().map(digit_for).collect()
}

/// Parses typed keys such as `"227"` into a digit sequence.
pub fn parse_keys(keys: &str) -> Result<Vec<Digit>> {
    keys.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if is_letter_key(d as Digit) => Ok(d as Digit),
            _ => Err(KeypadError::InvalidDigit(c)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_letter_has_one_key() {
        for letter in 'a'..='z' {
            let digit = digit_for(letter).unwrap();
            let letters = letters_for(digit).unwrap();
            assert!(letters.contains(letter), "{letter} not on key {digit}");
        }
    }

    #[test]
    fn layouts_are_inverse() {
        let mut total = 0;
        for digit in 2..=9 {
            for letter in letters_for(digit).unwrap().chars() {
                assert_eq!(digit_for(letter).unwrap(), digit);
                total += 1;
            }
        }
        assert_eq!(total, 26);
    }

    #[test]
    fn keys_without_letters() {
        assert_eq!(letters_for(0), None);
        assert_eq!(letters_for(1), None);
        assert_eq!(letters_for(10), None);
    }

    #[test]
    fn encodes_words() {
        assert_eq!(encode("cab").unwrap(), vec![2, 2, 2]);
        assert_eq!(encode("care").unwrap(), vec![2, 2, 7, 3]);
        assert_eq!(encode("zzz").unwrap(), vec![9, 9, 9]);
        assert!(encode("").unwrap().is_empty());
    }

    #[test]
    fn rejects_characters_off_the_pad() {
        assert!(matches!(encode("Cab"), Err(KeypadError::InvalidCharacter('C'))));
        assert!(matches!(encode("it's"), Err(KeypadError::InvalidCharacter('\''))));
    }

    #[test]
    fn parses_keys() {
        assert_eq!(parse_keys("2273").unwrap(), vec![2, 2, 7, 3]);
        assert!(parse_keys("").unwrap().is_empty());
        assert!(matches!(parse_keys("21"), Err(KeypadError::InvalidDigit('1'))));
        assert!(matches!(parse_keys("2a"), Err(KeypadError::InvalidDigit('a'))));
    }
}
