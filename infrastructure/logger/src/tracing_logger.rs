use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "YouChat -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "YouChat -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "YouChat -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "YouChat -- ", "{}", message);
    }
}
