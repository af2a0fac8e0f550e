//! Active-region bookkeeping
//!
//! Several navigation contexts (one per tab, one per scope modal) can exist
//! at once, but only one may be visually active. The registry makes that
//! rule data instead of convention: the coordinator registers each region
//! it hosts and activates exactly one at a time.

/// Identifier of a hosting region (a tab's stack, a scope modal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(&'static str);

impl RegionId {
    /// Create a region identifier from a static name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The region's name.
    pub fn name(&self) -> &'static str {
        self.0
    }
}

/// Errors from region registration and activation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegionError {
    /// The region was already registered.
    #[error("region already registered: {0}")]
    AlreadyRegistered(&'static str),

    /// The region is not known to the registry.
    #[error("region not registered: {0}")]
    NotRegistered(&'static str),
}

/// Result type for region operations.
pub type Result<T> = std::result::Result<T, RegionError>;

/// Registry of hosting regions with at most one active.
#[derive(Debug, Default)]
pub struct RegionRegistry {
    regions: Vec<RegionId>,
    active: Option<RegionId>,
}

impl RegionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region. Fails on duplicates.
    pub fn register(&mut self, region: RegionId) -> Result<()> {
        if self.regions.contains(&region) {
            return Err(RegionError::AlreadyRegistered(region.name()));
        }
        self.regions.push(region);
        Ok(())
    }

    /// Remove a region; deactivates it if it was active.
    pub fn unregister(&mut self, region: RegionId) {
        self.regions.retain(|r| *r != region);
        if self.active == Some(region) {
            self.active = None;
        }
    }

    /// Activate a region, deactivating the previous one.
    ///
    /// Returns the previously active region so the caller can suspend it.
    pub fn activate(&mut self, region: RegionId) -> Result<Option<RegionId>> {
        if !self.regions.contains(&region) {
            return Err(RegionError::NotRegistered(region.name()));
        }
        Ok(self.active.replace(region))
    }

    /// The active region, if any.
    pub fn active(&self) -> Option<RegionId> {
        self.active
    }

    /// Whether the given region is the active one.
    pub fn is_active(&self, region: RegionId) -> bool {
        self.active == Some(region)
    }
}
