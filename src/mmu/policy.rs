use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::mmu::base::Mmu;
use crate::mmu::clock::ClockMmu;
use crate::mmu::error::MmuError;
use crate::mmu::lru::LruMmu;
use crate::mmu::random::RandomMmu;

/// Page replacement policy selectable by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    #[default]
    Clock,
    Lru,
    Random,
}

impl Policy {
    /// Build an engine for this policy with `frames` physical frames.
    /// `seed` only affects the random policy.
    pub fn build(self, frames: usize, seed: Option<u64>) -> Result<Box<dyn Mmu>, MmuError> {
        let mmu: Box<dyn Mmu> = match self {
            Policy::Clock => Box::new(ClockMmu::new(frames)?),
            Policy::Lru => Box::new(LruMmu::new(frames)?),
            Policy::Random => match seed {
                Some(seed) => Box::new(RandomMmu::seeded(frames, seed)?),
                None => Box::new(RandomMmu::new(frames)?),
            },
        };
        Ok(mmu)
    }
}

impl FromStr for Policy {
    type Err = MmuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clock" | "esc" => Ok(Policy::Clock),
            "lru" => Ok(Policy::Lru),
            "rand" | "random" => Ok(Policy::Random),
            _ => Err(MmuError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Clock => write!(f, "clock"),
            Policy::Lru => write!(f, "lru"),
            Policy::Random => write!(f, "rand"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policy() {
        assert_eq!("clock".parse::<Policy>().unwrap(), Policy::Clock);
        assert_eq!("LRU".parse::<Policy>().unwrap(), Policy::Lru);
        assert_eq!("rand".parse::<Policy>().unwrap(), Policy::Random);
        assert_eq!("random".parse::<Policy>().unwrap(), Policy::Random);
        assert_eq!(
            "fifo".parse::<Policy>(),
            Err(MmuError::UnknownPolicy("fifo".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for policy in [Policy::Clock, Policy::Lru, Policy::Random] {
            assert_eq!(policy.to_string().parse::<Policy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_build_engines() {
        for policy in [Policy::Clock, Policy::Lru, Policy::Random] {
            let mmu = policy.build(8, Some(1)).unwrap();
            assert_eq!(mmu.frame_count(), 8);
            assert_eq!(mmu.resident_count(), 0);
            assert_eq!(mmu.total_page_faults(), 0);
            assert!(policy.build(0, None).is_err());
        }
    }
}
