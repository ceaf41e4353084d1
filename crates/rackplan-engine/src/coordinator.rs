//! Dual-surface coordination

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// One of the two concurrent editing surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Website,
    Vr,
}

impl Surface {
    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::Website => "website",
            Surface::Vr => "vr",
        }
    }

    /// The opposite surface
    pub fn other(&self) -> Self {
        match self {
            Surface::Website => Surface::Vr,
            Surface::Vr => Surface::Website,
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Surface {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "website" => Ok(Surface::Website),
            "vr" => Ok(Surface::Vr),
            other => Err(format!("unknown surface '{}'", other)),
        }
    }
}

/// A consistent read of the coordinator: which surface is authoritative and
/// at which version. Pollers compare versions to detect a handover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurfaceSnapshot {
    pub surface: Surface,
    pub version: u64,
}

/// The single source of truth for which surface may edit right now.
///
/// A versioned state cell: one atomic flip counter, where the count is the
/// monotonic version and its parity selects the surface. The lock is
/// cooperative and advisory — nothing rejects a write from the wrong side,
/// and the flag never auto-reverts if a client crashes while authoritative
/// (accepted limitation; a heartbeat expiry is the production follow-up).
#[derive(Debug)]
pub struct SurfaceCoordinator {
    /// Surface at version 0
    initial: Surface,
    flips: AtomicU64,
}

impl SurfaceCoordinator {
    /// Create a coordinator with the website surface authoritative
    pub fn new() -> Self {
        Self::with_surface(Surface::Website)
    }

    /// Create a coordinator with the given surface authoritative
    pub fn with_surface(surface: Surface) -> Self {
        Self {
            initial: surface,
            flips: AtomicU64::new(0),
        }
    }

    /// The currently authoritative surface
    pub fn current(&self) -> Surface {
        self.snapshot().surface
    }

    /// The monotonic toggle count
    pub fn version(&self) -> u64 {
        self.flips.load(Ordering::Acquire)
    }

    /// Read surface and version together
    pub fn snapshot(&self) -> SurfaceSnapshot {
        let version = self.flips.load(Ordering::Acquire);
        SurfaceSnapshot {
            surface: self.surface_at(version),
            version,
        }
    }

    /// Unconditionally flip the authoritative surface, returning the new
    /// snapshot. There is no negotiation and no timeout; the side that just
    /// became non-authoritative is expected to stop issuing mutations.
    pub fn toggle(&self) -> SurfaceSnapshot {
        let version = self.flips.fetch_add(1, Ordering::AcqRel) + 1;
        SurfaceSnapshot {
            surface: self.surface_at(version),
            version,
        }
    }

    /// Flip only if the caller's last observed version is still current.
    ///
    /// Returns the new snapshot, or the current one unchanged when another
    /// caller toggled in between (the lost-update fence the bare flip
    /// cannot provide).
    pub fn toggle_from(&self, expected_version: u64) -> Result<SurfaceSnapshot, SurfaceSnapshot> {
        match self.flips.compare_exchange(
            expected_version,
            expected_version + 1,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => Ok(SurfaceSnapshot {
                surface: self.surface_at(expected_version + 1),
                version: expected_version + 1,
            }),
            Err(actual) => Err(SurfaceSnapshot {
                surface: self.surface_at(actual),
                version: actual,
            }),
        }
    }

    fn surface_at(&self, version: u64) -> Surface {
        if version % 2 == 0 {
            self.initial
        } else {
            self.initial.other()
        }
    }
}

impl Default for SurfaceCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
