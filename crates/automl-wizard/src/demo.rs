//! Bundled demo dataset.

/// File name reported for the demo dataset.
pub const DEMO_FILE_NAME: &str = "demo_customer_data.csv";

/// Fifteen customers with a `purchased` label.
pub const DEMO_CSV: &str = "age,gender,income,education,purchased
22,Male,45000,Bachelor,No
35,Female,70000,Master,Yes
45,Male,65000,Bachelor,Yes
28,Female,55000,Master,No
42,Male,80000,PhD,Yes
31,Female,60000,Bachelor,No
25,Male,48000,Bachelor,No
52,Female,95000,Master,Yes
38,Male,72000,PhD,Yes
29,Female,54000,Master,No
33,Male,63000,Bachelor,Yes
47,Female,85000,Master,Yes
41,Male,76000,Bachelor,Yes
24,Female,49000,Bachelor,No
36,Male,68000,Master,Yes
";
