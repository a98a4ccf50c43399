use serde::{de, Deserialize, Deserializer, Serialize};
use std::borrow::Borrow;
use std::str::FromStr;

use crate::core::models::application::{Application, ApplicationStatus, ApplicationType};
use crate::error::Error;

/// Either every value (`all`) or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(v) => v == value,
        }
    }
}

impl<T> FromStr for Selector<T>
where
    T: FromStr<Err = Error>,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(Selector::All),
            _ => Ok(Selector::Only(s.parse()?)),
        }
    }
}

impl<'de, T> Deserialize<'de> for Selector<T>
where
    T: FromStr<Err = Error>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub interns: usize,
    pub volunteers: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

/// Keeps the records matching both selectors, in input order.
pub fn filter<A, I>(records: I, types: Selector<ApplicationType>, statuses: Selector<ApplicationStatus>) -> Vec<A>
where
    A: Borrow<Application>,
    I: IntoIterator<Item = A>,
{
    records
        .into_iter()
        .filter(|r| {
            let r: &Application = r.borrow();
            types.matches(&r.type_) && statuses.matches(&r.status)
        })
        .collect()
}

pub fn stats(records: &[Application]) -> Stats {
    let count_type = |t: ApplicationType| records.iter().filter(|r| r.type_ == t).count();
    let count_status = |s: ApplicationStatus| records.iter().filter(|r| r.status == s).count();
    Stats {
        total: records.len(),
        interns: count_type(ApplicationType::Intern),
        volunteers: count_type(ApplicationType::Volunteer),
        pending: count_status(ApplicationStatus::Pending),
        approved: count_status(ApplicationStatus::Approved),
        rejected: count_status(ApplicationStatus::Rejected),
    }
}
