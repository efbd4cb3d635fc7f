use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub struct BenchError {
    details: String,
}

impl BenchError {
    pub fn new(msg: &str) -> BenchError {
        BenchError {
            details: msg.to_string(),
        }
    }
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.details)
    }
}

impl Error for BenchError {
    fn description(&self) -> &str {
        &self.details
    }
}
