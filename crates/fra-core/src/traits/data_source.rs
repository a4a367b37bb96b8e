//! ClaimSource / LocationSource: read-only views over loaded records.

use std::sync::Arc;

use crate::types::{ClaimRecord, LocationRecord};

/// Read-only access to the session's claim records.
pub trait ClaimSource {
    fn claims(&self) -> &[ClaimRecord];
}

/// Read-only access to the session's location records.
pub trait LocationSource {
    fn locations(&self) -> &[LocationRecord];
}

impl ClaimSource for [ClaimRecord] {
    fn claims(&self) -> &[ClaimRecord] {
        self
    }
}

impl ClaimSource for Vec<ClaimRecord> {
    fn claims(&self) -> &[ClaimRecord] {
        self
    }
}

impl<T: ClaimSource + ?Sized> ClaimSource for Arc<T> {
    fn claims(&self) -> &[ClaimRecord] {
        (**self).claims()
    }
}

impl LocationSource for [LocationRecord] {
    fn locations(&self) -> &[LocationRecord] {
        self
    }
}

impl LocationSource for Vec<LocationRecord> {
    fn locations(&self) -> &[LocationRecord] {
        self
    }
}

impl<T: LocationSource + ?Sized> LocationSource for Arc<T> {
    fn locations(&self) -> &[LocationRecord] {
        (**self).locations()
    }
}
