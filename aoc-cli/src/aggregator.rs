//! Re-orders results streamed from worker threads
//!
//! Workers finish in any order. A result is held back until every key
//! before it has arrived, so output always reads `(year, day, part)`
//! ascending.

use crate::executor::{SolverResult, WorkItem};
use std::collections::{BTreeMap, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl ResultKey {
    fn of(result: &SolverResult) -> Self {
        Self {
            year: result.year,
            day: result.day,
            part: result.part,
        }
    }

    /// One key per part of every work item
    pub fn expected_from(work_items: &[WorkItem]) -> Vec<Self> {
        work_items
            .iter()
            .flat_map(|item| {
                item.parts.clone().map(move |part| Self {
                    year: item.year,
                    day: item.day,
                    part,
                })
            })
            .collect()
    }
}

pub struct ResultAggregator {
    /// Keys not yet emitted, ascending
    awaiting: VecDeque<ResultKey>,
    held: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    pub fn new(mut expected: Vec<ResultKey>) -> Self {
        expected.sort_unstable();
        expected.dedup();
        Self {
            awaiting: expected.into(),
            held: BTreeMap::new(),
        }
    }

    /// Accept one result and release everything now at the head of the order.
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.held.insert(ResultKey::of(&result), result);

        let mut ready = Vec::new();
        while let Some(next) = self.awaiting.front() {
            let Some(result) = self.held.remove(next) else {
                break;
            };
            self.awaiting.pop_front();
            ready.push(result);
        }
        ready
    }

    /// Whatever is still held back, in order. Called once the channel closes.
    pub fn drain(&mut self) -> Vec<SolverResult> {
        std::mem::take(&mut self.held).into_values().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.awaiting.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    fn key(year: u16, day: u8, part: u8) -> ResultKey {
        ResultKey { year, day, part }
    }

    fn answered(k: ResultKey) -> SolverResult {
        SolverResult {
            year: k.year,
            day: k.day,
            part: k.part,
            answer: Ok(format!("{}-{}-{}", k.year, k.day, k.part)),
            parse_duration: Some(TimeDelta::milliseconds(5)),
            solve_duration: TimeDelta::milliseconds(10),
        }
    }

    fn keys_of(results: &[SolverResult]) -> Vec<ResultKey> {
        results.iter().map(ResultKey::of).collect()
    }

    #[test]
    fn test_expected_keys_cover_every_part() {
        let items = [
            WorkItem {
                year: 2021,
                day: 15,
                parts: 1..=2,
            },
            WorkItem {
                year: 2022,
                day: 12,
                parts: 2..=2,
            },
        ];
        assert_eq!(
            ResultKey::expected_from(&items),
            vec![key(2021, 15, 1), key(2021, 15, 2), key(2022, 12, 2)]
        );
    }

    #[test]
    fn test_results_in_order_pass_straight_through() {
        let mut agg = ResultAggregator::new(vec![key(2021, 15, 1), key(2021, 15, 2)]);

        assert_eq!(keys_of(&agg.add(answered(key(2021, 15, 1)))), vec![key(2021, 15, 1)]);
        assert_eq!(keys_of(&agg.add(answered(key(2021, 15, 2)))), vec![key(2021, 15, 2)]);
        assert!(agg.is_complete());
    }

    #[test]
    fn test_late_first_result_releases_the_backlog() {
        let mut agg = ResultAggregator::new(vec![
            key(2023, 17, 1),
            key(2021, 15, 2),
            key(2021, 15, 1),
        ]);

        assert!(agg.add(answered(key(2023, 17, 1))).is_empty());
        assert!(agg.add(answered(key(2021, 15, 2))).is_empty());

        let ready = agg.add(answered(key(2021, 15, 1)));
        assert_eq!(
            keys_of(&ready),
            vec![key(2021, 15, 1), key(2021, 15, 2), key(2023, 17, 1)]
        );
        assert!(agg.is_complete());
    }

    #[test]
    fn test_drain_flushes_what_is_held() {
        let mut agg = ResultAggregator::new(vec![key(2022, 12, 1), key(2022, 12, 2)]);

        assert!(agg.add(answered(key(2022, 12, 2))).is_empty());
        assert!(!agg.is_complete());

        assert_eq!(keys_of(&agg.drain()), vec![key(2022, 12, 2)]);
        assert!(agg.drain().is_empty());
    }

    proptest! {
        #[test]
        fn prop_any_arrival_order_is_emitted_sorted(
            arrival in Just((0..12u8).collect::<Vec<_>>()).prop_shuffle()
        ) {
            let all: Vec<ResultKey> = (0..12u8)
                .map(|i| key(2015 + u16::from(i / 4), i % 4 / 2 + 1, i % 2 + 1))
                .collect();
            let mut agg = ResultAggregator::new(all.clone());

            let mut emitted = Vec::new();
            for i in arrival {
                emitted.extend(keys_of(&agg.add(answered(all[usize::from(i)]))));
            }

            prop_assert!(agg.is_complete());
            prop_assert_eq!(emitted, all);
        }
    }
}
