use mealplanner_shared::mealplan::{WeekKey, WeekPlan};
use std::collections::HashMap;

pub const DEFAULT_CACHE_CAPACITY: usize = 3;

/// Recently opened week plans, bounded and least-recently-used first out.
#[derive(Debug, Clone)]
pub struct WeekCache {
    capacity: usize,
    tick: u64,
    entries: HashMap<WeekKey, (u64, WeekPlan)>,
}

impl Default for WeekCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl WeekCache {
    /// A capacity of 0 is raised to 1.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            tick: 0,
            entries: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, week: &WeekKey) -> bool {
        self.entries.contains_key(week)
    }

    pub fn get(&mut self, week: &WeekKey) -> Option<&WeekPlan> {
        self.tick += 1;
        let tick = self.tick;
        let (used, plan) = self.entries.get_mut(week)?;
        *used = tick;

        Some(&*plan)
    }

    /// Stores the plan, evicting the least recently used week when full.
    pub fn insert(&mut self, plan: WeekPlan) {
        self.tick += 1;

        if !self.entries.contains_key(&plan.week) && self.entries.len() >= self.capacity {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, (used, _))| *used)
                .map(|(week, _)| *week);

            if let Some(oldest) = oldest {
                self.entries.remove(&oldest);
                tracing::debug!(week = %oldest, "week evicted from cache");
            }
        }

        self.entries.insert(plan.week, (self.tick, plan));
    }

    pub fn remove(&mut self, week: &WeekKey) -> Option<WeekPlan> {
        self.entries.remove(week).map(|(_, plan)| plan)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
