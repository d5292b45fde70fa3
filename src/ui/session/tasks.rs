use rand::seq::SliceRandom;
use rand::Rng;

/// Requirements offered by the "Random Task" shortcut.
pub const EXAMPLE_TASKS: [&str; 10] = [
    "Calculate the sum of sales for the last 3 months",
    "Find the average of values in column A if they are greater than 100",
    "Count how many times 'Yes' appears in column B",
    "Look up a value in table A and return corresponding value from table B",
    "Calculate the percentage of completed tasks (marked as 'Done')",
    "Find the latest date in a range of cells",
    "Calculate the running total of values in column A",
    "Count unique values in a range",
    "Calculate the difference between two dates in days",
    "Find the third highest value in a range",
];

/// Pick one example requirement.
pub fn random_task<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    EXAMPLE_TASKS.choose(rng).copied().unwrap_or(EXAMPLE_TASKS[0])
}
