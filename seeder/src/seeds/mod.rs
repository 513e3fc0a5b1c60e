pub mod course;
pub mod review;
pub mod user;

/// Fixed accounts every demo database starts with.
pub const FIXED_USERS: [(&str, &str); 2] = [
    ("Joe Smith", "joe@smith.com"),
    ("Sally Jones", "sally@jones.com"),
];

pub const FIXED_PASSWORD: &str = "password";
