use rand::rngs::StdRng;
use rand::SeedableRng;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// The decimal form of a challenge number, which is what a challenge is seeded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed(String);

impl Seed {
    pub fn from_number(challenge_number: u64) -> Self {
        Self(challenge_number.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The challenge id is the seed string read back as an integer.
    pub fn challenge_id(&self) -> u64 {
        self.0.parse().unwrap_or_default()
    }

    pub fn to_u64(&self) -> u64 {
        self.0.bytes().fold(FNV_OFFSET, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        })
    }

    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.to_u64())
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn test_fnv_of_known_string() {
        // FNV-1a of "a"
        assert_eq!(Seed("a".to_string()).to_u64(), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn test_same_number_same_draws() {
        let mut a = Seed::from_number(42).rng();
        let mut b = Seed::from_number(42).rng();
        let xs: Vec<u32> = (0..8).map(|_| a.random_range(0..1000)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.random_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_distinct_numbers_distinct_seeds() {
        assert_ne!(Seed::from_number(1).to_u64(), Seed::from_number(10).to_u64());
        assert_eq!(Seed::from_number(305).challenge_id(), 305);
        assert_eq!(Seed::from_number(305).as_str(), "305");
    }
}
