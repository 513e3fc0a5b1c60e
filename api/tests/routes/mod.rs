mod health_test;
mod users;
