#![allow(dead_code)]

use geowrr_application::ports::{GeoLocation, GeoLookup, GeoProvider, RandomSource};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};

/// Geo provider backed by a fixed table. Unknown addresses are `NotFound`.
#[derive(Default)]
pub struct MockGeoProvider {
    locations: RwLock<HashMap<IpAddr, GeoLocation>>,
    lookups: Mutex<Vec<IpAddr>>,
}

impl MockGeoProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(self, ip: &str, location: GeoLocation) -> Self {
        self.locations
            .write()
            .unwrap()
            .insert(ip.parse().unwrap(), location);
        self
    }

    pub fn lookups(&self) -> Vec<IpAddr> {
        self.lookups.lock().unwrap().clone()
    }
}

impl GeoProvider for MockGeoProvider {
    fn lookup(&self, ip: IpAddr) -> GeoLookup {
        self.lookups.lock().unwrap().push(ip);
        match self.locations.read().unwrap().get(&ip) {
            Some(location) => GeoLookup::Found(location.clone()),
            None => GeoLookup::NotFound,
        }
    }
}

/// Always draws the same value and counts how often it was asked.
pub struct FixedRandom {
    value: u64,
    draws: AtomicUsize,
}

impl FixedRandom {
    pub fn new(value: u64) -> Self {
        Self {
            value,
            draws: AtomicUsize::new(0),
        }
    }

    pub fn draws(&self) -> usize {
        self.draws.load(Ordering::SeqCst)
    }
}

impl RandomSource for FixedRandom {
    fn draw(&self, upper: u64) -> u64 {
        self.draws.fetch_add(1, Ordering::SeqCst);
        self.value.min(upper)
    }
}

/// Walks `1..=upper` in order and wraps, so every value is drawn equally
/// often over a full cycle.
#[derive(Default)]
pub struct CyclingRandom {
    next: AtomicU64,
}

impl CyclingRandom {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RandomSource for CyclingRandom {
    fn draw(&self, upper: u64) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst) % upper + 1
    }
}
