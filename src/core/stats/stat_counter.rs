use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide event counter, cheap enough to bump from render threads.
#[derive(Debug)]
pub struct StatCounter {
    name: &'static str,
    value: AtomicU64,
}

impl StatCounter {
    pub const fn new(name: &'static str) -> Self {
        StatCounter {
            name,
            value: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn add(&self, val: u64) {
        self.value.fetch_add(val, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.value.store(0, Ordering::Relaxed);
    }
}

/// Counts how many of a number of events had some property.
#[derive(Debug)]
pub struct StatPercent {
    name: &'static str,
    num: AtomicU64,
    denom: AtomicU64,
}

impl StatPercent {
    pub const fn new(name: &'static str) -> Self {
        StatPercent {
            name,
            num: AtomicU64::new(0),
            denom: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn add_num(&self, val: u64) {
        self.num.fetch_add(val, Ordering::Relaxed);
    }

    #[inline]
    pub fn add_denom(&self, val: u64) {
        self.denom.fetch_add(val, Ordering::Relaxed);
    }

    pub fn get(&self) -> (u64, u64) {
        (
            self.num.load(Ordering::Relaxed),
            self.denom.load(Ordering::Relaxed),
        )
    }

    pub fn clear(&self) {
        self.num.store(0, Ordering::Relaxed);
        self.denom.store(0, Ordering::Relaxed);
    }
}
