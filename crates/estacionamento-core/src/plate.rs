use std::fmt;
use std::str::FromStr;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of characters in a plate (`LLL D L DD`).
pub const PLATE_LEN: usize = 7;

/// Vehicle plate: three letters, a digit, a letter and two digits.
///
/// Random plates are not collision-free; uniqueness is left to the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Plate(String);

impl Plate {
    /// Draw a fresh plate from `rng`.
    pub fn random(rng: &mut dyn RngCore) -> Self {
        let mut value = String::with_capacity(PLATE_LEN);
        for _ in 0..3 {
            value.push(random_letter(rng));
        }
        value.push(random_digit(rng));
        value.push(random_letter(rng));
        for _ in 0..2 {
            value.push(random_digit(rng));
        }
        Plate(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns true when `value` matches `[A-Z]{3}[0-9][A-Z][0-9]{2}`.
pub fn is_valid_plate(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == PLATE_LEN
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            0..=2 | 4 => byte.is_ascii_uppercase(),
            _ => byte.is_ascii_digit(),
        })
}

/// Uniform uppercase ASCII letter.
pub fn random_letter(rng: &mut dyn RngCore) -> char {
    char::from(b'A' + rng.random_range(0..26u8))
}

fn random_digit(rng: &mut dyn RngCore) -> char {
    char::from(b'0' + rng.random_range(0..10u8))
}

impl FromStr for Plate {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        if is_valid_plate(value) {
            Ok(Plate(value.to_string()))
        } else {
            Err(Error::InvalidPlate(value.to_string()))
        }
    }
}

impl TryFrom<String> for Plate {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Plate> for String {
    fn from(plate: Plate) -> Self {
        plate.0
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use regex::Regex;

    use super::*;

    #[test]
    fn random_plates_follow_pattern() {
        let pattern = Regex::new(r"^[A-Z]{3}[0-9][A-Z][0-9]{2}$").expect("regex");
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..2_000 {
            let plate = Plate::random(&mut rng);
            assert!(pattern.is_match(plate.as_str()), "bad plate {plate}");
            assert!(is_valid_plate(plate.as_str()));
        }
    }

    #[test]
    fn same_seed_same_plates() {
        let mut left = ChaCha8Rng::seed_from_u64(99);
        let mut right = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(Plate::random(&mut left), Plate::random(&mut right));
        }
    }

    #[test]
    fn rejects_malformed_plates() {
        for value in ["", "ABC1D2", "ABC1D234", "abc1d23", "AB11D23", "ABC1123", "ABCDE23"] {
            assert!(value.parse::<Plate>().is_err(), "{value} should be rejected");
        }
        assert_eq!("QWE4R56".parse::<Plate>().expect("valid").as_str(), "QWE4R56");
    }

    #[test]
    fn serde_validates_plates() {
        let plate: Plate = serde_json::from_str("\"KPT0A12\"").expect("deserialize");
        assert_eq!(plate.to_string(), "KPT0A12");
        assert!(serde_json::from_str::<Plate>("\"kpt0a12\"").is_err());
    }
}
