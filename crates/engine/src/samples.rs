//! Sample values for previewing and test-running workflows.

use std::collections::BTreeMap;

use chrono::{Duration, Local, NaiveDate};

use crate::models::Workflow;
use crate::variables::required_variables;

/// Source of "today" for date-valued samples.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d";

static SAMPLE_VALUES: &[(&str, &str)] = &[
    ("recipient", "customer@example.com"),
    ("company_goal", "Increase student engagement by 20% this quarter"),
    ("sender", "student@example.com"),
    ("email_subject", "Question about the upcoming assignment"),
    ("email_body", "Hi, could you clarify the requirements for the next assignment? Thanks!"),
    ("student_name", "Jane Smith"),
    ("first_name", "Jane"),
    ("teacher_name", "Mr. Anderson"),
    ("course_name", "Introduction to Computer Science"),
    ("assignment_name", "Project 1: Sorting Algorithms"),
    ("name", "John Doe"),
    ("subject", "Weekly update"),
];

/// Representative value for `name`; unknown names get `sample_<name>`.
pub fn sample_value_for(name: &str, clock: &dyn Clock) -> String {
    match name {
        "date" => clock.today().format(DATE_FORMAT).to_string(),
        "due_date" => (clock.today() + Duration::days(7)).format(DATE_FORMAT).to_string(),
        _ => SAMPLE_VALUES
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_owned())
            .unwrap_or_else(|| format!("sample_{name}")),
    }
}

/// Sample value for every variable the caller must supply to run `workflow`.
pub fn generate_sample_data(workflow: &Workflow, clock: &dyn Clock) -> BTreeMap<String, String> {
    required_variables(workflow)
        .into_iter()
        .map(|name| {
            let value = sample_value_for(&name, clock);
            (name, value)
        })
        .collect()
}
