//! TTL Policy Module
//!
//! Named duration classes and the class assigned to each data category.

/// Default TTL applied by [`CacheStore::set`](super::CacheStore::set) when none is given.
pub const DEFAULT_TTL_MS: u64 = TtlClass::Medium.as_millis();

// == TTL Class ==
/// Named cache lifetimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TtlClass {
    /// 2 minutes
    Short,
    /// 5 minutes
    Medium,
    /// 15 minutes
    Long,
    /// 30 minutes
    ExtraLong,
}

impl TtlClass {
    /// Lifetime in milliseconds.
    pub const fn as_millis(self) -> u64 {
        match self {
            TtlClass::Short => 2 * 60 * 1000,
            TtlClass::Medium => 5 * 60 * 1000,
            TtlClass::Long => 15 * 60 * 1000,
            TtlClass::ExtraLong => 30 * 60 * 1000,
        }
    }
}

// == Data Category ==
/// The kinds of data the access layer caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataCategory {
    AllVehicles,
    NewVehicles,
    Vehicle,
    UserProfile,
    UserCars,
}

impl DataCategory {
    /// TTL class assigned to this category.
    pub const fn ttl(self) -> TtlClass {
        match self {
            DataCategory::AllVehicles | DataCategory::NewVehicles | DataCategory::UserCars => {
                TtlClass::Medium
            }
            DataCategory::Vehicle | DataCategory::UserProfile => TtlClass::Long,
        }
    }

    pub const fn ttl_ms(self) -> u64 {
        self.ttl().as_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_class_values() {
        assert_eq!(TtlClass::Short.as_millis(), 120_000);
        assert_eq!(TtlClass::Medium.as_millis(), 300_000);
        assert_eq!(TtlClass::Long.as_millis(), 900_000);
        assert_eq!(TtlClass::ExtraLong.as_millis(), 1_800_000);
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(DEFAULT_TTL_MS, 300_000);
    }

    #[test]
    fn test_category_assignment() {
        assert_eq!(DataCategory::AllVehicles.ttl(), TtlClass::Medium);
        assert_eq!(DataCategory::NewVehicles.ttl(), TtlClass::Medium);
        assert_eq!(DataCategory::Vehicle.ttl(), TtlClass::Long);
        assert_eq!(DataCategory::UserProfile.ttl(), TtlClass::Long);
        assert_eq!(DataCategory::UserCars.ttl(), TtlClass::Medium);
    }
}
